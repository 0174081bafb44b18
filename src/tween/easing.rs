//! Easing Curves
//!
//! Named easing curves using the tween-library naming scheme
//! (`"power2.inOut"`, `"sine.out"`, `"none"`, ...).
//!
//! Every family is defined by its ease-in curve `f`; the other directions
//! are derived from it:
//!
//! - out:   `1 - f(1 - t)`
//! - inOut: `f(2t) / 2` for the first half, mirrored for the second

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GateflightError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EaseDirection {
    In,
    /// Default when a name has no direction suffix.
    #[default]
    Out,
    InOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Polynomial of degree `n + 1` (`power1` is quadratic).
    Power(u8, EaseDirection),
    Sine(EaseDirection),
    Expo(EaseDirection),
    Circ(EaseDirection),
}

impl Default for Easing {
    fn default() -> Self {
        Self::Power(2, EaseDirection::InOut)
    }
}

impl Easing {
    /// Maps linear progress `t` to eased progress. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let direction = match self {
            Self::Linear => return t,
            Self::Power(_, d) | Self::Sine(d) | Self::Expo(d) | Self::Circ(d) => d,
        };

        match direction {
            EaseDirection::In => self.ease_in(t),
            EaseDirection::Out => 1.0 - self.ease_in(1.0 - t),
            EaseDirection::InOut => {
                if t < 0.5 {
                    self.ease_in(t * 2.0) / 2.0
                } else {
                    1.0 - self.ease_in((1.0 - t) * 2.0) / 2.0
                }
            }
        }
    }

    fn ease_in(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::Power(n, _) => t.powi(i32::from(n) + 1),
            Self::Sine(_) => 1.0 - (t * FRAC_PI_2).cos(),
            Self::Expo(_) => {
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Self::Circ(_) => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
        }
    }
}

// ============================================================================
// Names
// ============================================================================

impl FromStr for Easing {
    type Err = GateflightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (family, direction) = match lower.split_once('.') {
            Some((family, direction)) => (family, Some(direction)),
            None => (lower.as_str(), None),
        };

        let direction = match direction {
            None | Some("out") => EaseDirection::Out,
            Some("in") => EaseDirection::In,
            Some("inout") => EaseDirection::InOut,
            Some(_) => return Err(GateflightError::UnknownEasing(s.to_string())),
        };

        let easing = match family {
            "none" | "linear" | "power0" => Self::Linear,
            "power1" | "quad" => Self::Power(1, direction),
            "power2" | "cubic" => Self::Power(2, direction),
            "power3" | "quart" => Self::Power(3, direction),
            "power4" | "quint" | "strong" => Self::Power(4, direction),
            "sine" => Self::Sine(direction),
            "expo" => Self::Expo(direction),
            "circ" => Self::Circ(direction),
            _ => return Err(GateflightError::UnknownEasing(s.to_string())),
        };
        Ok(easing)
    }
}

impl fmt::Display for EaseDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inOut",
        })
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("none"),
            Self::Power(n, d) => write!(f, "power{n}.{d}"),
            Self::Sine(d) => write!(f, "sine.{d}"),
            Self::Expo(d) => write!(f, "expo.{d}"),
            Self::Circ(d) => write!(f, "circ.{d}"),
        }
    }
}

impl Serialize for Easing {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
