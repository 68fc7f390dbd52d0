//! Text shaping seam and a monospace estimator.
//!
//! The primitive container only needs two answers from a shaper: how wide a
//! run is on one line, and how a run breaks into lines for a given width.
//! Real hosts plug in their font engine; `MonospaceShaper` estimates from
//! display cell widths, which is exact for monospace fonts and close enough
//! for layout tests.

use serde::{Deserialize, Serialize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::primitives::Color;

use super::length::BASE_FONT_SIZE;

// Cell metrics for a monospace face at 14px: 8.4px wide, 18px line height.
pub const CHAR_WIDTH_RATIO: f32 = 8.4 / 14.0;
pub const LINE_HEIGHT_RATIO: f32 = 18.0 / 14.0;

const ELLIPSIS: char = '\u{2026}';

/// Horizontal alignment of lines inside a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Shaping parameters for a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in device pixels.
    pub font_size: f32,
    pub color: Color,
    /// Extra pixels added to each line advance.
    pub line_spacing_add: f32,
    /// Multiplier applied to the base line height.
    pub line_spacing_mult: f32,
    /// Maximum lines kept; 0 means unlimited.
    pub max_lines: usize,
    /// Replace the tail of the last kept line with an ellipsis when lines
    /// are dropped.
    pub ellipsize: bool,
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: BASE_FONT_SIZE,
            color: Color::WHITE,
            line_spacing_add: 0.0,
            line_spacing_mult: 1.0,
            max_lines: 1,
            ellipsize: true,
            align: TextAlign::Start,
        }
    }
}

/// A shaped, wrapped block of text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBlock {
    pub lines: Vec<String>,
    /// Distance between consecutive line tops.
    pub line_advance: f32,
    /// Total block height in whole pixels.
    pub height: i32,
}

/// Font engine interface used by text primitives.
pub trait TextShaper {
    /// Width of `text` laid out on a single line.
    fn measure_width(&self, text: &str, font_size: f32) -> i32;

    /// Break `text` into lines no wider than `max_width` and size the block.
    fn layout_block(&self, text: &str, style: &TextStyle, max_width: i32) -> TextBlock;
}

/// Cell-width estimator for monospace fonts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceShaper {
    /// Cell width as a fraction of font size.
    pub char_width_ratio: f32,
    /// Line height as a fraction of font size.
    pub line_height_ratio: f32,
}

impl MonospaceShaper {
    pub fn new(char_width_ratio: f32, line_height_ratio: f32) -> Self {
        Self {
            char_width_ratio,
            line_height_ratio,
        }
    }

    fn cell(&self, font_size: f32) -> f32 {
        font_size * self.char_width_ratio
    }

    fn px(&self, cells: usize, font_size: f32) -> i32 {
        (cells as f32 * self.cell(font_size)).ceil() as i32
    }

    /// Greedy word wrap of one hard line.
    fn wrap_paragraph(&self, paragraph: &str, font_size: f32, max_width: i32, out: &mut Vec<String>) {
        let fits = |s: &str| self.px(s.width(), font_size) <= max_width;
        let mut current = String::new();

        for word in paragraph.split(' ') {
            let candidate = if current.is_empty() {
                word.to_owned()
            } else {
                format!("{current} {word}")
            };
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            if fits(word) {
                current = word.to_owned();
                continue;
            }
            // Word wider than the line: hard-break it by cells.
            for c in word.chars() {
                current.push(c);
                if !fits(&current) && current.chars().count() > 1 {
                    current.pop();
                    out.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }
        out.push(current);
    }

    fn ellipsize(&self, line: &mut String, font_size: f32, max_width: i32) {
        let ellipsis_cells = ELLIPSIS.width().unwrap_or(1);
        while !line.is_empty() && self.px(line.width() + ellipsis_cells, font_size) > max_width {
            line.pop();
        }
        line.push(ELLIPSIS);
    }
}

impl Default for MonospaceShaper {
    fn default() -> Self {
        Self::new(CHAR_WIDTH_RATIO, LINE_HEIGHT_RATIO)
    }
}

impl TextShaper for MonospaceShaper {
    fn measure_width(&self, text: &str, font_size: f32) -> i32 {
        let cells = text.split('\n').map(|line| line.width()).max().unwrap_or(0);
        self.px(cells, font_size)
    }

    fn layout_block(&self, text: &str, style: &TextStyle, max_width: i32) -> TextBlock {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            self.wrap_paragraph(paragraph, style.font_size, max_width, &mut lines);
        }

        if style.max_lines > 0 && lines.len() > style.max_lines {
            lines.truncate(style.max_lines);
            if style.ellipsize {
                if let Some(last) = lines.last_mut() {
                    self.ellipsize(last, style.font_size, max_width);
                }
            }
        }

        // The last line carries no extra spacing.
        let base = style.font_size * self.line_height_ratio;
        let line_advance = base * style.line_spacing_mult + style.line_spacing_add;
        let height = match lines.len() {
            0 => 0,
            n => (base + (n - 1) as f32 * line_advance).ceil() as i32,
        };

        TextBlock {
            lines,
            line_advance,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 10px font with ratio 1.0 gives 10px cells and 10px lines.
    fn shaper() -> MonospaceShaper {
        MonospaceShaper::new(1.0, 1.0)
    }

    fn style(max_lines: usize) -> TextStyle {
        TextStyle {
            font_size: 10.0,
            max_lines,
            ..TextStyle::default()
        }
    }

    #[test]
    fn test_measure_width_uses_widest_hard_line() {
        assert_eq!(shaper().measure_width("abc", 10.0), 30);
        assert_eq!(shaper().measure_width("ab\nabcd", 10.0), 40);
        assert_eq!(shaper().measure_width("", 10.0), 0);
    }

    #[test]
    fn test_wide_characters_take_two_cells() {
        assert_eq!(shaper().measure_width("日本", 10.0), 40);
    }

    #[test]
    fn test_wraps_on_spaces() {
        let block = shaper().layout_block("aaa bbb ccc", &style(0), 70);
        assert_eq!(block.lines, vec!["aaa bbb", "ccc"]);
        assert_eq!(block.height, 20);
    }

    #[test]
    fn test_hard_breaks_long_words() {
        let block = shaper().layout_block("abcdefg", &style(0), 30);
        assert_eq!(block.lines, vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_newlines_start_new_lines() {
        let block = shaper().layout_block("a\n\nb", &style(0), 100);
        assert_eq!(block.lines, vec!["a", "", "b"]);
        assert_eq!(block.height, 30);
    }

    #[test]
    fn test_max_lines_ellipsizes() {
        let block = shaper().layout_block("aaa bbb ccc", &style(1), 40);
        assert_eq!(block.lines, vec!["aaa\u{2026}"]);
        assert_eq!(block.height, 10);
    }

    #[test]
    fn test_max_lines_without_ellipsis_truncates() {
        let style = TextStyle {
            ellipsize: false,
            ..style(2)
        };
        let block = shaper().layout_block("aa bb cc", &style, 20);
        assert_eq!(block.lines, vec!["aa", "bb"]);
    }

    #[test]
    fn test_line_spacing_applies_between_lines() {
        let style = TextStyle {
            line_spacing_add: 2.0,
            line_spacing_mult: 1.5,
            ..style(0)
        };
        let block = shaper().layout_block("aa bb cc", &style, 20);
        assert_eq!(block.lines.len(), 3);
        assert_eq!(block.line_advance, 17.0);
        // 10 + 2 * 17
        assert_eq!(block.height, 44);
    }
}
