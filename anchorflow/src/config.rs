//! Layout configuration.
//!
//! Display metrics and default text metrics used when building containers
//! from documents. Every field has a default, so a config file only needs
//! the values it changes.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::layout::length::{BASE_FONT_SIZE, Density};
use crate::layout::text::{CHAR_WIDTH_RATIO, LINE_HEIGHT_RATIO, MonospaceShaper};

/// Configuration for building and shaping layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// dp/sp to device pixel conversion.
    pub density: Density,

    /// Font size in sp for text that sets none.
    pub default_font_size: f32,

    /// Monospace cell width as a fraction of font size.
    pub char_width_ratio: f32,

    /// Line height as a fraction of font size.
    pub line_height_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            density: Density::default(),
            default_font_size: BASE_FONT_SIZE,
            char_width_ratio: CHAR_WIDTH_RATIO,
            line_height_ratio: LINE_HEIGHT_RATIO,
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Reject values no display or font can have.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("density", self.density.density),
            ("scaled_density", self.density.scaled_density),
            ("default_font_size", self.default_font_size),
            ("char_width_ratio", self.char_width_ratio),
            ("line_height_ratio", self.line_height_ratio),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidConfig(format!("{name} must be positive, got {value}")));
            }
        }
        Ok(())
    }

    /// The default shaper for these text metrics.
    pub fn shaper(&self) -> MonospaceShaper {
        MonospaceShaper::new(self.char_width_ratio, self.line_height_ratio)
    }
}
