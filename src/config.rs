//! Scene Configuration
//!
//! [`SceneConfig`] describes everything a fly-through scene needs: camera,
//! lights, bloom, the two animated models, the camera flight, the frames and
//! the grid floor. Every field has a default, so a config file only lists
//! what it changes.
//!
//! # Example
//!
//! ```rust,ignore
//! let config = SceneConfig::from_json_str(r#"{
//!     "flight": { "target": [0.0, 0.0, -300.0], "easing": "sine.inOut" },
//!     "gate": { "playback": { "start": "auto" } }
//! }"#)?;
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::tracker::{PlaybackConfig, PlaybackLoop, StartPolicy};
use crate::camera::flight::FlightOptions;
use crate::errors::{GateflightError, Result};
use crate::scene::bloom::BloomSettings;
use crate::scene::camera::CameraSettings;
use crate::scene::frame::RoundedFrame;
use crate::scene::grid::GridFloor;
use crate::scene::light::LightingSettings;

// ============================================================================
// Sections
// ============================================================================

/// Where and how large a model is placed. `rotation` holds XYZ Euler angles
/// in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPlacement {
    pub model_path: String,
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Vec3,
}

impl Default for ModelPlacement {
    fn default() -> Self {
        Self {
            model_path: String::new(),
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub placement: ModelPlacement,
    pub playback: PlaybackConfig,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            placement: ModelPlacement {
                model_path: "/models/gate-animated-2-emissive.glb".into(),
                position: Vec3::new(0.0, -3.5, -5.0),
                scale: Vec3::splat(10.0),
                rotation: Vec3::new(0.0, std::f32::consts::PI, 0.0),
            },
            playback: PlaybackConfig {
                looping: PlaybackLoop::PlayOnceAndClamp,
                start: StartPolicy::Manual,
                ..PlaybackConfig::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub target: Vec3,
    pub options: FlightOptions,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, 0.0, -570.0),
            options: FlightOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub enabled: bool,
    pub placement: ModelPlacement,
    pub idle_clip: String,
    pub attack_clip: String,
    pub time_scale: f32,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            placement: ModelPlacement {
                model_path: "/models/wizard.glb".into(),
                position: Vec3::new(0.0, -5.0, -600.0),
                scale: Vec3::splat(5.0),
                rotation: Vec3::ZERO,
            },
            idle_clip: "Idle".into(),
            attack_clip: "Attack".into(),
            time_scale: 0.333,
        }
    }
}

// ============================================================================
// SceneConfig
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraSettings,
    pub lighting: LightingSettings,
    pub bloom: BloomSettings,
    pub gate: GateConfig,
    pub flight: FlightConfig,
    pub wizard: WizardConfig,
    pub frames: Vec<RoundedFrame>,
    pub grid: GridFloor,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraSettings::default(),
            lighting: LightingSettings::default(),
            bloom: BloomSettings::default(),
            gate: GateConfig::default(),
            flight: FlightConfig::default(),
            wizard: WizardConfig::default(),
            frames: [-6.0, 0.0, 6.0]
                .into_iter()
                .map(|x| RoundedFrame::at(Vec3::new(x, 4.0, -30.0)))
                .collect(),
            grid: GridFloor::default(),
        }
    }
}

impl SceneConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading scene config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.camera.validate()?;
        self.bloom.validate()?;
        self.grid.validate()?;
        for frame in &self.frames {
            frame.validate()?;
        }

        check_time_scale("gate.playback.time_scale", self.gate.playback.time_scale)?;
        check_time_scale("wizard.time_scale", self.wizard.time_scale)?;

        let flight = &self.flight.options;
        check_seconds("flight.options.duration", flight.duration)?;
        check_seconds("flight.options.delay", flight.delay)?;
        if !self.flight.target.is_finite() {
            return Err(GateflightError::invalid("flight.target", "must be finite"));
        }
        Ok(())
    }
}

fn check_seconds(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GateflightError::invalid(name, "must be a non-negative number of seconds"))
    }
}

fn check_time_scale(name: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GateflightError::invalid(name, "must be finite"))
    }
}
