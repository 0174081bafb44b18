//! Utility Module
//!
//! - [`Timer`]: wall-clock frame timing for hosts driving the scene
//! - [`Delay`]: frame-driven one-shot countdown

pub mod time;

pub use time::{Delay, Timer};
