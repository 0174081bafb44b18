use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{GateflightError, Result};

/// An sRGB color with components in `[0, 1]`.
///
/// Parsed from `"#rrggbb"` / `"0xrrggbb"` strings or from `0xRRGGBB`
/// integers, and serialized back as `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` integer.
    pub fn from_hex(hex: u32) -> Result<Self> {
        if hex > 0x00FF_FFFF {
            return Err(GateflightError::InvalidColor(format!("{hex:#x}")));
        }
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Ok(Self::rgb(channel(16), channel(8), channel(0)))
    }

    #[must_use]
    pub fn to_hex(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = GateflightError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| GateflightError::InvalidColor(s.to_string()))?;

        if digits.len() != 6 {
            return Err(GateflightError::InvalidColor(s.to_string()));
        }
        let hex = u32::from_str_radix(digits, 16)
            .map_err(|_| GateflightError::InvalidColor(s.to_string()))?;
        Self::from_hex(hex)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Text(String),
    Hex(u32),
}

impl TryFrom<ColorRepr> for Color {
    type Error = GateflightError;

    fn try_from(repr: ColorRepr) -> Result<Self> {
        match repr {
            ColorRepr::Text(text) => text.parse(),
            ColorRepr::Hex(hex) => Self::from_hex(hex),
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Standard material whose color also glows, as used by the grid and the
/// frame outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissiveMaterial {
    pub color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub transparent: bool,
}

impl EmissiveMaterial {
    /// An opaque material glowing in its own color.
    #[must_use]
    pub fn glowing(color: Color, emissive_intensity: f32) -> Self {
        Self {
            color,
            emissive: color,
            emissive_intensity,
            opacity: 1.0,
            transparent: false,
        }
    }

    /// Makes the material transparent with the given opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.transparent = self.opacity < 1.0;
        self
    }
}
