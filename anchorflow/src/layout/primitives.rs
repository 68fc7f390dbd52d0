//! Draw List - paint output of the primitive container.
//!
//! Commands are recorded in paint order and carry absolute device-pixel
//! geometry. The host replays them on its canvas.

use crate::primitives::{Color, Point, Rect};

use super::elements::CornerRadii;

/// One paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled (optionally rounded) rectangle behind a text run.
    Background {
        rect: Rect,
        radii: CornerRadii,
        color: Color,
    },
    /// A single line of text; `origin` is the top-left of the line box.
    Text {
        text: String,
        origin: Point,
        font_size: f32,
        color: Color,
    },
    /// An image stretched to `rect`.
    Image {
        rect: Rect,
        key: String,
        tint: Option<Color>,
    },
}

/// Paint commands for one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Add methods
    // =========================================================================

    #[inline]
    pub fn add_background(&mut self, rect: Rect, radii: CornerRadii, color: Color) -> &mut Self {
        self.commands.push(DrawCommand::Background { rect, radii, color });
        self
    }

    #[inline]
    pub fn add_text(
        &mut self,
        text: impl Into<String>,
        origin: Point,
        font_size: f32,
        color: Color,
    ) -> &mut Self {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            origin,
            font_size,
            color,
        });
        self
    }

    #[inline]
    pub fn add_image(&mut self, rect: Rect, key: impl Into<String>, tint: Option<Color>) -> &mut Self {
        self.commands.push(DrawCommand::Image {
            rect,
            key: key.into(),
            tint,
        });
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text commands only, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl IntoIterator for DrawList {
    type Item = DrawCommand;
    type IntoIter = std::vec::IntoIter<DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}
