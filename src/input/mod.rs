//! Pointer Input
//!
//! Raw click and cursor events, with explicit per-component subscriptions.
//! The optional `winit` feature adds an adapter for native windows.

pub mod pointer;
#[cfg(feature = "winit")]
pub mod winit_adapter;

pub use pointer::{ClickSubscription, PointerInput};
