//! Layout sizing types and density conversion.
//!
//! `SizeSpec` is what a node declares; `MeasureSpec` (in `constraints`) is
//! what the measure phase hands to it.

use serde::{Deserialize, Serialize};

// Host toolkit baseline: 1dp == 1px at 160dpi.
pub const BASE_DENSITY: f32 = 1.0;
pub const BASE_FONT_SIZE: f32 = 14.0;

/// Declared sizing mode for one axis of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeSpec {
    /// Fixed pixel size.
    Exact(i32),
    /// Shrink to the node's intrinsic measurement.
    #[default]
    WrapContent,
    /// Take the parent's resolved size.
    MatchParent,
    /// Fraction (0..1) of the parent's resolved size.
    Percent(f32),
}

/// Density-independent pixel conversion, supplied by the host display.
///
/// Conversions truncate toward zero, matching the host's integer dimension
/// helpers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Density {
    /// Pixels per dp.
    pub density: f32,
    /// Pixels per sp (density times the user's font scale).
    pub scaled_density: f32,
}

impl Density {
    pub fn new(density: f32, scaled_density: f32) -> Self {
        Self { density, scaled_density }
    }

    /// dp to whole device pixels.
    #[inline]
    pub fn dp(&self, value: f32) -> i32 {
        (value * self.density) as i32
    }

    /// dp to fractional device pixels (radii, line spacing).
    #[inline]
    pub fn dp_f(&self, value: f32) -> f32 {
        value * self.density
    }

    /// sp to fractional device pixels (font sizes).
    #[inline]
    pub fn sp(&self, value: f32) -> f32 {
        value * self.scaled_density
    }
}

impl Default for Density {
    fn default() -> Self {
        Self {
            density: BASE_DENSITY,
            scaled_density: BASE_DENSITY,
        }
    }
}
