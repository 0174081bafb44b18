//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! Errors are only produced while *building* a scene: reading and decoding
//! configuration, parsing colors and easing names, validating numeric
//! parameters. The runtime choreography (trackers, sequencers, blenders)
//! never fails; degraded inputs such as a missing animation clip are logged
//! and turn the component inert instead.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gateflight::errors::Result;
//! use gateflight::config::SceneConfig;
//!
//! fn load() -> Result<SceneConfig> {
//!     SceneConfig::load("scene.json")
//! }
//! ```

use thiserror::Error;

/// The main error type for scene configuration and assembly.
#[derive(Error, Debug)]
pub enum GateflightError {
    // ========================================================================
    // I/O & Decoding Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ========================================================================
    // Parameter Errors
    // ========================================================================
    /// A color string or integer could not be interpreted as RGB.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The easing name is not one of the supported curves.
    #[error("Unknown easing: {0}")]
    UnknownEasing(String),

    /// A numeric parameter is out of its valid range.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Dotted path of the offending field
        name: String,
        /// Human readable constraint that was violated
        reason: String,
    },
}

impl GateflightError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Alias for `Result<T, GateflightError>`.
pub type Result<T> = std::result::Result<T, GateflightError>;
