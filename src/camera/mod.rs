//! Camera Choreography
//!
//! Scripted camera motion. The renderer owns the camera; this module only
//! decides where its position should be on each frame.

pub mod flight;

pub use flight::{
    CameraFlightSequencer, CameraFlightState, FlightCallback, FlightOptions, FlightPhase,
};
