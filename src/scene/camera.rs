use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::errors::{GateflightError, Result};

/// Initial perspective camera of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(GateflightError::invalid("camera.fov", "must be within (0, 180)"));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(GateflightError::invalid(
                "camera.near/camera.far",
                "require 0 < near < far",
            ));
        }
        Ok(())
    }

    /// Right-handed projection with a `[0, 1]` depth range.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
    }
}
