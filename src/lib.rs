#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Frame-driven choreography for a 3D fly-through scene: a gate animation
//! that opens on click, a delayed camera flight through it, and a wizard
//! that cross-fades between idle and attack animations.
//!
//! The host application owns the window, the renderer and the glTF assets.
//! It feeds clicks and frame deltas into a [`Stage`] and reads back the
//! camera position and animation weights.

pub mod animation;
pub mod camera;
pub mod config;
pub mod errors;
pub mod input;
pub mod scene;
pub mod stage;
pub mod tween;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use animation::{
    AnimationAction, AnimationClip, AnimationMixer, AnimationRig, DualAnimationBlender, LoopMode,
    PlaybackConfig, PlaybackTracker,
};
pub use camera::{CameraFlightSequencer, FlightOptions};
pub use config::SceneConfig;
pub use errors::{GateflightError, Result};
pub use input::PointerInput;
pub use scene::SceneLayout;
pub use stage::{Stage, StageEvent, StageEvents};
pub use tween::{Easing, TweenEngine, Tweener};
pub use utils::{Delay, Timer};

/// Everything a host needs to drive a scene.
pub mod prelude {
    pub use crate::animation::{AnimationClip, AnimationRig, PlaybackConfig, StartPolicy};
    pub use crate::camera::FlightOptions;
    pub use crate::config::SceneConfig;
    pub use crate::errors::{GateflightError, Result};
    pub use crate::scene::SceneLayout;
    pub use crate::stage::{Stage, StageEvent};
    pub use crate::tween::Easing;
    pub use crate::utils::Timer;
}
