//! Scene Description
//!
//! Static, declarative pieces of the fly-through scene:
//! - [`GridFloor`]: glowing cross-line and rail floor
//! - [`RoundedFrame`]: rounded-rectangle frames with a glowing outline
//! - [`LightingSettings`] / [`Light`]: ambient and directional lights
//! - [`CameraSettings`], [`BloomSettings`]
//! - [`SceneLayout`]: everything above resolved from a `SceneConfig`

pub mod bloom;
pub mod camera;
pub mod frame;
pub mod grid;
pub mod layout;
pub mod light;
pub mod material;

pub use bloom::BloomSettings;
pub use camera::CameraSettings;
pub use frame::RoundedFrame;
pub use grid::{GridFloor, GridLine, GridLineKind};
pub use layout::{FRAME_CORNER_DIVISIONS, FrameLayout, GridLayout, ModelInstance, SceneLayout};
pub use light::{Light, LightKind, LightingSettings};
pub use material::{Color, EmissiveMaterial};
