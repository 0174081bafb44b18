use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::scene::material::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LightKind {
    /// Uniform light from every direction.
    Ambient,
    /// Parallel rays shining from `position` towards the origin.
    Directional { position: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
}

impl Light {
    #[must_use]
    pub fn new_ambient(intensity: f32) -> Self {
        Self {
            kind: LightKind::Ambient,
            color: Color::WHITE,
            intensity,
        }
    }

    #[must_use]
    pub fn new_directional(position: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional { position },
            color: Color::WHITE,
            intensity,
        }
    }

    /// Direction the light travels in, for directional lights.
    #[must_use]
    pub fn direction(&self) -> Option<Vec3> {
        match self.kind {
            LightKind::Ambient => None,
            LightKind::Directional { position } => Some((-position).normalize_or_zero()),
        }
    }
}

/// The scene's light rig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingSettings {
    pub ambient_intensity: f32,
    pub directional_position: Vec3,
    pub directional_intensity: f32,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            ambient_intensity: 125.0,
            directional_position: Vec3::new(10.0, 10.0, 10.0),
            directional_intensity: 25.0,
        }
    }
}

impl LightingSettings {
    #[must_use]
    pub fn lights(&self) -> Vec<Light> {
        vec![
            Light::new_ambient(self.ambient_intensity),
            Light::new_directional(self.directional_position, self.directional_intensity),
        ]
    }
}
