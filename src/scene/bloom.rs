//! Bloom Post-Processing Configuration
//!
//! Pure data handed to the renderer's bloom pass. Emissive materials with an
//! intensity well above 1 (grid lines, frame outlines, the gate) are what
//! crosses the luminance threshold and glows.

use serde::{Deserialize, Serialize};

use crate::errors::{GateflightError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomSettings {
    /// Whether bloom is enabled.
    pub enabled: bool,

    /// Strength of the bloom contribution in the final composite.
    ///
    /// Default: `0.1`
    pub intensity: f32,

    /// Luminance above which pixels start to bloom, in `[0, 1]`.
    ///
    /// Default: `0.1`
    pub luminance_threshold: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            intensity: 0.1,
            luminance_threshold: 0.1,
        }
    }
}

impl BloomSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.intensity.is_finite() && self.intensity >= 0.0) {
            return Err(GateflightError::invalid(
                "bloom.intensity",
                "must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.luminance_threshold) {
            return Err(GateflightError::invalid(
                "bloom.luminance_threshold",
                "must be within [0, 1]",
            ));
        }
        Ok(())
    }
}
