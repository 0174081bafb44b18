//! Grid Floor
//!
//! A glowing floor grid laid out along the camera's flight path. The grid
//! starts at its origin and extends towards -Z; rails run along Z and are
//! centered on X.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{GateflightError, Result};
use crate::scene::material::{Color, EmissiveMaterial};

/// Upper bound on the lines of one grid, cross lines and rails together.
pub const MAX_GRID_LINES: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridLineKind {
    /// Runs along X, one per spacing step down the corridor.
    Cross,
    /// Runs along Z for the full length of the grid.
    Rail,
}

/// One line of the grid, rendered as a thin box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLine {
    pub kind: GridLineKind,
    /// Center of the box, relative to the grid origin.
    pub center: Vec3,
    /// Box extents along X, Y and Z.
    pub size: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridFloor {
    pub position: Vec3,
    pub width: f32,
    pub length: f32,
    pub spacing: f32,
    pub cross_color: Color,
    pub rail_color: Color,
    pub cross_emissive_intensity: f32,
    pub rail_emissive_intensity: f32,
    pub opacity: f32,
    pub line_thickness: f32,
}

impl Default for GridFloor {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, -5.0, 0.0),
            width: 8.0,
            length: 600.0,
            spacing: 2.0,
            cross_color: Color::rgb(98.0 / 255.0, 135.0 / 255.0, 248.0 / 255.0),
            rail_color: Color::rgb(206.0 / 255.0, 2.0 / 255.0, 212.0 / 255.0),
            cross_emissive_intensity: 4.5,
            rail_emissive_intensity: 4.5,
            opacity: 0.7,
            line_thickness: 0.02,
        }
    }
}

impl GridFloor {
    #[must_use]
    pub fn with_length(length: f32) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.spacing) {
            return Err(GateflightError::invalid("grid.spacing", "must be positive"));
        }
        if !is_non_negative(self.width) || !is_non_negative(self.length) {
            return Err(GateflightError::invalid(
                "grid.width/grid.length",
                "must be non-negative",
            ));
        }
        if !is_positive(self.line_thickness) {
            return Err(GateflightError::invalid(
                "grid.line_thickness",
                "must be positive",
            ));
        }
        if self.cross_line_count() + self.rail_count() > MAX_GRID_LINES {
            return Err(GateflightError::invalid(
                "grid.length/grid.spacing",
                format!("more than {MAX_GRID_LINES} grid lines"),
            ));
        }
        Ok(())
    }

    /// Number of cross lines, saturating just above [`MAX_GRID_LINES`].
    #[must_use]
    pub fn cross_line_count(&self) -> usize {
        line_count(self.length, self.spacing)
    }

    /// Number of rails, saturating just above [`MAX_GRID_LINES`].
    #[must_use]
    pub fn rail_count(&self) -> usize {
        line_count(self.width, self.spacing)
    }

    /// Lays out every line of the grid: cross lines first, then rails.
    ///
    /// An invalid spacing yields no lines.
    #[must_use]
    pub fn lines(&self) -> Vec<GridLine> {
        if self.validate().is_err() {
            log::warn!("Grid floor parameters are invalid, no lines generated");
            return Vec::new();
        }

        let t = self.line_thickness;
        let cross_count = self.cross_line_count();
        let rail_count = self.rail_count();
        let rail_offset = (rail_count - 1) as f32 * self.spacing / 2.0;

        let cross = (0..cross_count).map(|i| GridLine {
            kind: GridLineKind::Cross,
            center: Vec3::new(0.0, 0.0, -(i as f32) * self.spacing),
            size: Vec3::new(self.width, t, t),
        });
        let rails = (0..rail_count).map(|i| GridLine {
            kind: GridLineKind::Rail,
            center: Vec3::new(
                i as f32 * self.spacing - rail_offset,
                0.0,
                -self.length / 2.0,
            ),
            size: Vec3::new(t, t, self.length),
        });

        cross.chain(rails).collect()
    }

    #[must_use]
    pub fn cross_material(&self) -> EmissiveMaterial {
        EmissiveMaterial::glowing(self.cross_color, self.cross_emissive_intensity)
            .with_opacity(self.opacity)
    }

    #[must_use]
    pub fn rail_material(&self) -> EmissiveMaterial {
        EmissiveMaterial::glowing(self.rail_color, self.rail_emissive_intensity)
            .with_opacity(self.opacity)
    }
}

fn line_count(extent: f32, spacing: f32) -> usize {
    let steps = (f64::from(extent) / f64::from(spacing)).floor();
    if steps.is_nan() || steps < 0.0 {
        return 1;
    }
    steps.min(MAX_GRID_LINES as f64) as usize + 1
}

fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn is_non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}
