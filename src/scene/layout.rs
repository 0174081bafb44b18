//! Scene Layout
//!
//! Turns a [`SceneConfig`] into the flat, declarative description the
//! renderer consumes. Nothing here changes per frame.

use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::config::{ModelPlacement, SceneConfig};
use crate::scene::bloom::BloomSettings;
use crate::scene::camera::CameraSettings;
use crate::scene::frame::RoundedFrame;
use crate::scene::grid::GridLine;
use crate::scene::light::Light;
use crate::scene::material::EmissiveMaterial;

/// Samples per frame corner; enough for smooth corners at the default size.
pub const FRAME_CORNER_DIVISIONS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInstance {
    pub name: &'static str,
    pub placement: ModelPlacement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameLayout {
    pub position: Vec3,
    pub fill_size: Vec2,
    pub fill_material: EmissiveMaterial,
    pub outline: Vec<Vec2>,
    pub tube_radius: f32,
    pub edge_material: EmissiveMaterial,
}

impl FrameLayout {
    fn from_frame(frame: &RoundedFrame) -> Self {
        Self {
            position: frame.position,
            fill_size: frame.fill_size(),
            fill_material: frame.fill_material(),
            outline: frame.outline(FRAME_CORNER_DIVISIONS),
            tube_radius: frame.tube_radius,
            edge_material: frame.edge_material(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout {
    pub origin: Vec3,
    pub lines: Vec<GridLine>,
    pub cross_material: EmissiveMaterial,
    pub rail_material: EmissiveMaterial,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub camera: CameraSettings,
    pub lights: Vec<Light>,
    pub bloom: BloomSettings,
    pub models: Vec<ModelInstance>,
    pub frames: Vec<FrameLayout>,
    pub grid: GridLayout,
}

impl SceneLayout {
    #[must_use]
    pub fn build(config: &SceneConfig) -> Self {
        let mut models = vec![ModelInstance {
            name: "gate",
            placement: config.gate.placement.clone(),
        }];
        if config.wizard.enabled {
            models.push(ModelInstance {
                name: "wizard",
                placement: config.wizard.placement.clone(),
            });
        }

        let grid = GridLayout {
            origin: config.grid.position,
            lines: config.grid.lines(),
            cross_material: config.grid.cross_material(),
            rail_material: config.grid.rail_material(),
        };

        let layout = Self {
            camera: config.camera.clone(),
            lights: config.lighting.lights(),
            bloom: config.bloom.clone(),
            models,
            frames: config.frames.iter().map(FrameLayout::from_frame).collect(),
            grid,
        };
        log::debug!(
            "Scene layout: {} models, {} frames, {} grid lines",
            layout.models.len(),
            layout.frames.len(),
            layout.grid.lines.len()
        );
        layout
    }
}
