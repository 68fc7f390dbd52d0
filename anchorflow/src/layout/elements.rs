//! Leaf primitives - text runs and image references.
//!
//! These are the payloads a `PrimitiveLayout` positions. They are plain
//! records: no host widget is created for them.

use std::io::Cursor;
use std::path::Path;

use crate::error::Result;
use crate::primitives::{Color, Size};

use super::text::{TextAlign, TextBlock, TextStyle};

// =========================================================================
// Background shape
// =========================================================================

/// Elliptical radius of one corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Corner {
    pub rx: f32,
    pub ry: f32,
}

impl Corner {
    pub const fn circular(radius: f32) -> Self {
        Self { rx: radius, ry: radius }
    }
}

/// Per-corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: Corner,
    pub top_right: Corner,
    pub bottom_right: Corner,
    pub bottom_left: Corner,
}

impl CornerRadii {
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: Corner::circular(radius),
            top_right: Corner::circular(radius),
            bottom_right: Corner::circular(radius),
            bottom_left: Corner::circular(radius),
        }
    }
}

/// Filled rounded background drawn behind a text run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shape {
    pub color: Color,
    /// Uniform radius; wins over `corners` when non-zero.
    pub radius: f32,
    pub corners: Option<CornerRadii>,
}

impl Shape {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn corners(mut self, corners: CornerRadii) -> Self {
        self.corners = Some(corners);
        self
    }

    /// The radii to paint with.
    pub fn radii(&self) -> CornerRadii {
        if self.radius != 0.0 {
            CornerRadii::uniform(self.radius)
        } else {
            self.corners.unwrap_or_default()
        }
    }
}

// =========================================================================
// TextRun
// =========================================================================

/// A run of text with its own wrapping and ellipsis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
    /// Cap on the single-line width before wrapping.
    pub max_width: Option<i32>,
    pub background: Option<Shape>,
    /// Block from the last measure pass.
    pub(crate) block: Option<TextBlock>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the font size in device pixels.
    pub fn font_size(mut self, size: f32) -> Self {
        self.style.font_size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    /// Set line spacing as `base * mult + add`.
    pub fn line_spacing(mut self, add: f32, mult: f32) -> Self {
        self.style.line_spacing_add = add;
        self.style.line_spacing_mult = mult;
        self
    }

    /// Keep at most `lines` lines (0 = unlimited).
    pub fn max_lines(mut self, lines: usize) -> Self {
        self.style.max_lines = lines;
        self
    }

    pub fn ellipsize(mut self, ellipsize: bool) -> Self {
        self.style.ellipsize = ellipsize;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.style.align = align;
        self
    }

    pub fn max_width(mut self, width: i32) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn background(mut self, shape: Shape) -> Self {
        self.background = Some(shape);
        self
    }

    /// The wrapped block computed by the last measure pass.
    pub fn block(&self) -> Option<&TextBlock> {
        self.block.as_ref()
    }
}

// =========================================================================
// ImageRef
// =========================================================================

/// Where an image comes from and how big it is natively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSource {
    /// Resource key or path the host resolves when painting.
    pub key: String,
    pub intrinsic: Size,
}

impl ImageSource {
    pub fn new(key: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            key: key.into(),
            intrinsic: Size::new(width, height),
        }
    }

    /// Read the intrinsic size from encoded image bytes (header only).
    pub fn probe(key: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let (width, height) = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(Self {
            key: key.into(),
            intrinsic: Size::new(width as i32, height as i32),
        })
    }

    /// Read the intrinsic size from an image file; the path becomes the key.
    pub fn probe_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path)?;
        Ok(Self {
            key: path.to_string_lossy().into_owned(),
            intrinsic: Size::new(width as i32, height as i32),
        })
    }
}

/// An image positioned as a primitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageRef {
    pub source: ImageSource,
    /// Multiplied with the image color (white = no tint).
    pub tint: Option<Color>,
}

impl ImageRef {
    pub fn new(source: ImageSource) -> Self {
        Self { source, tint: None }
    }

    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn intrinsic_size(&self) -> Size {
        self.source.intrinsic
    }
}
