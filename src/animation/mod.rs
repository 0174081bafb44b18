//! Animation Module
//!
//! Clip playback and the choreography built on top of it:
//!
//! - [`AnimationMixer`]: owns one [`AnimationAction`] per clip and advances them
//! - [`AnimationRig`]: the capability surface components drive a mixer through
//! - [`PlaybackTracker`]: single-clip playback with start policy and completion
//! - [`DualAnimationBlender`]: idle/attack cross-fading state machine

pub mod action;
pub mod blender;
pub mod clip;
pub mod mixer;
pub mod rig;
pub mod tracker;

pub use action::{AnimationAction, LoopMode};
pub use blender::{BlendPhase, BlendState, CROSS_FADE_DURATION, DualAnimationBlender};
pub use clip::AnimationClip;
pub use mixer::{ActionHandle, AnimationMixer};
pub use rig::{AnimationRig, FiredSubscriptions, SubscriptionId};
pub use tracker::{
    ClipSelection, CompletionCallback, PlaybackConfig, PlaybackLoop, PlaybackSession,
    PlaybackTracker, StartPolicy,
};
