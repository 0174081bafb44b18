//! Framed Rectangles
//!
//! Decorative rounded-rectangle frames: an invisible fill plane with a
//! glowing tube along its rounded outline.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::errors::{GateflightError, Result};
use crate::scene::material::{Color, EmissiveMaterial};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundedFrame {
    pub position: Vec3,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub tube_radius: f32,
    pub fill_color: Color,
    pub edge_color: Color,
    pub emissive_intensity: f32,
}

impl Default for RoundedFrame {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            width: 15.0,
            height: 7.5,
            corner_radius: 1.1,
            tube_radius: 0.05,
            fill_color: Color::BLACK,
            edge_color: Color::rgb(1.0, 99.0 / 255.0, 39.0 / 255.0),
            emissive_intensity: 4.5,
        }
    }
}

impl RoundedFrame {
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0)
        {
            return Err(GateflightError::invalid(
                "frame.width/frame.height",
                "must be positive",
            ));
        }
        let max_radius = self.width.min(self.height) / 2.0;
        if !(self.corner_radius >= 0.0 && self.corner_radius <= max_radius) {
            return Err(GateflightError::invalid(
                "frame.corner_radius",
                format!("must be within [0, {max_radius}]"),
            ));
        }
        if !(self.tube_radius >= 0.0 && self.tube_radius * 2.0 < self.width.min(self.height)) {
            return Err(GateflightError::invalid(
                "frame.tube_radius",
                "must be non-negative and thinner than the frame",
            ));
        }
        Ok(())
    }

    /// Size of the fill plane, inset by the tube on every side.
    #[must_use]
    pub fn fill_size(&self) -> Vec2 {
        Vec2::new(
            self.width - self.tube_radius * 2.0,
            self.height - self.tube_radius * 2.0,
        )
    }

    /// Samples the closed outline counter-clockwise, starting at the bottom
    /// edge. Each corner is a quadratic Bézier sampled `corner_divisions`
    /// times. The first point is not repeated at the end.
    #[must_use]
    pub fn outline(&self, corner_divisions: usize) -> Vec<Vec2> {
        let (w, h, r) = (self.width, self.height, self.corner_radius);
        let (x, y) = (-w / 2.0, -h / 2.0);
        let divisions = corner_divisions.max(1);

        // (line end, corner control, corner end) for each side
        let sides = [
            (Vec2::new(x + w - r, y), Vec2::new(x + w, y), Vec2::new(x + w, y + r)),
            (Vec2::new(x + w, y + h - r), Vec2::new(x + w, y + h), Vec2::new(x + w - r, y + h)),
            (Vec2::new(x + r, y + h), Vec2::new(x, y + h), Vec2::new(x, y + h - r)),
            (Vec2::new(x, y + r), Vec2::new(x, y), Vec2::new(x + r, y)),
        ];

        let start = Vec2::new(x + r, y);
        let mut points = vec![start];
        let push = |p: Vec2, points: &mut Vec<Vec2>| {
            if points.last().is_none_or(|last| !last.abs_diff_eq(p, 1e-6)) {
                points.push(p);
            }
        };

        for (line_end, control, corner_end) in sides {
            push(line_end, &mut points);
            for k in 1..=divisions {
                let t = k as f32 / divisions as f32;
                let u = 1.0 - t;
                push(
                    line_end * (u * u) + control * (2.0 * u * t) + corner_end * (t * t),
                    &mut points,
                );
            }
        }

        if points.len() > 1 && points[points.len() - 1].abs_diff_eq(start, 1e-6) {
            points.pop();
        }
        points
    }

    #[must_use]
    pub fn fill_material(&self) -> EmissiveMaterial {
        EmissiveMaterial {
            color: self.fill_color,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            opacity: 0.0,
            transparent: true,
        }
    }

    #[must_use]
    pub fn edge_material(&self) -> EmissiveMaterial {
        EmissiveMaterial::glowing(self.edge_color, self.emissive_intensity)
    }
}
