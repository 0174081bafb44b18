//! Tweening
//!
//! Easing curves and a small frame-driven interpolation engine. Components
//! talk to interpolation through the [`Tweener`] trait only.

pub mod easing;
pub mod engine;

pub use easing::{EaseDirection, Easing};
pub use engine::{COMPLETION_EPSILON, TweenEngine, TweenId, TweenSample, TweenSamples, Tweener};
