//! Flow layout - left-to-right packing that wraps to a new line.
//!
//! Children are placed in order until the next one does not fit in what is
//! left of the line, then it starts a new line. The host asks for a measure
//! pass and a layout pass separately; both run the same `LineBreaker`, so
//! they always agree on where lines break.

use crate::primitives::{Insets, Rect, Size};

use super::constraints::MeasureSpecs;
use super::host::{HostView, LayoutParams};

// =========================================================================
// Packer
// =========================================================================

/// A child as the packer sees it: measured size plus margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowItem {
    pub size: Size,
    pub margins: Insets,
}

impl FlowItem {
    pub fn new(size: Size, margins: Insets) -> Self {
        Self { size, margins }
    }

    /// Horizontal space taken on a line, trailing gap included.
    #[inline]
    pub fn occupied(&self, horizontal_gap: i32) -> i32 {
        self.margins.left + self.size.width + self.margins.right + horizontal_gap
    }

    /// Margin-inclusive height.
    #[inline]
    pub fn outer_height(&self) -> i32 {
        self.margins.top + self.size.height + self.margins.bottom
    }
}

/// The line-break decision, shared by both passes.
#[derive(Debug, Clone)]
pub struct LineBreaker {
    container_width: i32,
    horizontal_gap: i32,
    remaining: i32,
    placed: usize,
}

impl LineBreaker {
    pub fn new(container_width: i32, horizontal_gap: i32) -> Self {
        Self {
            container_width,
            horizontal_gap,
            remaining: container_width,
            placed: 0,
        }
    }

    /// Account for the next item; returns true if it starts a new line.
    ///
    /// The very first item never breaks, however wide it is. A wrapped item
    /// sits flush at the line start, so only its width and the gap count
    /// against the new line.
    pub fn place(&mut self, item: &FlowItem) -> bool {
        let occupied = item.occupied(self.horizontal_gap);
        let new_line = self.placed > 0 && occupied > self.remaining;
        if new_line {
            self.remaining = self.container_width - item.size.width - self.horizontal_gap;
        } else {
            self.remaining -= occupied;
        }
        self.placed += 1;
        new_line
    }

    /// Width left on the current line.
    pub fn remaining(&self) -> i32 {
        self.remaining
    }
}

/// One band of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowLine {
    /// Index of the first child on this line.
    pub first: usize,
    /// Number of children on this line.
    pub len: usize,
    /// Top of the band in container coordinates.
    pub top: i32,
    /// Tallest margin-inclusive child.
    pub height: i32,
    /// Horizontal space consumed, gaps included.
    pub consumed: i32,
}

/// Result of a measure pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlowMeasure {
    pub lines: Vec<FlowLine>,
    /// Sum of line heights plus the vertical gaps between them.
    pub content_height: i32,
}

/// Gap configuration plus the two passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowPacker {
    pub horizontal_gap: i32,
    pub vertical_gap: i32,
}

impl FlowPacker {
    pub fn new(horizontal_gap: i32, vertical_gap: i32) -> Self {
        Self {
            horizontal_gap,
            vertical_gap,
        }
    }

    /// Assign items to lines and total up the height.
    pub fn measure(&self, container_width: i32, items: &[FlowItem]) -> FlowMeasure {
        let mut breaker = LineBreaker::new(container_width, self.horizontal_gap);
        let mut lines: Vec<FlowLine> = Vec::new();
        let mut total = 0;

        for (index, item) in items.iter().enumerate() {
            let new_line = breaker.place(item);
            let consumed = container_width - breaker.remaining();

            if let (false, Some(line)) = (new_line, lines.last_mut()) {
                line.len += 1;
                line.consumed = consumed;
                line.height = line.height.max(item.outer_height());
                continue;
            }

            if let Some(line) = lines.last() {
                total += line.height + self.vertical_gap;
                tracing::trace!(index, top = total, "flow line break");
            }
            lines.push(FlowLine {
                first: index,
                len: 1,
                top: total,
                height: item.outer_height(),
                consumed,
            });
        }

        if let Some(line) = lines.last() {
            total += line.height;
        }

        FlowMeasure {
            lines,
            content_height: total,
        }
    }

    /// Compute each item's frame.
    ///
    /// Lines start at x = 0. The first child of a wrapped line sits flush at
    /// 0 (its left margin is cancelled) so wrapped left edges line up; the
    /// very first child keeps its left margin.
    pub fn layout(&self, container_width: i32, items: &[FlowItem]) -> Vec<Rect> {
        let mut breaker = LineBreaker::new(container_width, self.horizontal_gap);
        let mut frames = Vec::with_capacity(items.len());
        let mut x = 0;
        let mut line_top = 0;
        let mut line_height = 0;

        for item in items {
            if breaker.place(item) {
                line_top += line_height + self.vertical_gap;
                line_height = 0;
                x = -item.margins.left;
            }

            let left = x + item.margins.left;
            let top = line_top + item.margins.top;
            frames.push(Rect::new(left, top, left + item.size.width, top + item.size.height));

            x += item.occupied(self.horizontal_gap);
            line_height = line_height.max(item.outer_height());
        }

        frames
    }
}

// =========================================================================
// FlowLayout
// =========================================================================

struct FlowChild<V> {
    view: V,
    params: LayoutParams,
    measured: Size,
}

/// A container that wraps its host children like words in a paragraph.
///
/// Width is always whatever the container was given; only the height
/// depends on the children (unless the height spec is exact).
pub struct FlowLayout<V> {
    children: Vec<FlowChild<V>>,
    packer: FlowPacker,
    padding: Insets,
    measured: Size,
}

impl<V: HostView> FlowLayout<V> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            packer: FlowPacker::default(),
            padding: Insets::ZERO,
            measured: Size::ZERO,
        }
    }

    /// Set horizontal spacing between items on a line.
    pub fn horizontal_gap(mut self, gap: i32) -> Self {
        self.packer.horizontal_gap = gap;
        self
    }

    /// Set vertical spacing between lines.
    pub fn vertical_gap(mut self, gap: i32) -> Self {
        self.packer.vertical_gap = gap;
        self
    }

    /// Padding shrinks the space offered to children when they measure.
    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Add a child.
    pub fn push(mut self, view: V, params: LayoutParams) -> Self {
        self.add(view, params);
        self
    }

    pub fn add(&mut self, view: V, params: LayoutParams) {
        self.children.push(FlowChild {
            view,
            params,
            measured: Size::ZERO,
        });
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, index: usize) -> Option<&V> {
        self.children.get(index).map(|c| &c.view)
    }

    pub fn packer(&self) -> FlowPacker {
        self.packer
    }

    /// Size from the last measure pass.
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Measure children, then pack them to find the height.
    pub fn measure(&mut self, specs: MeasureSpecs) -> Size {
        for child in &mut self.children {
            let child_specs = child.params.child_specs(specs, &self.padding);
            child.measured = child.view.measure(child_specs);
        }

        let width = specs.width.size;
        let height = if specs.height.is_exact() {
            specs.height.size
        } else {
            self.packer.measure(width, &self.items()).content_height
        };

        tracing::debug!(children = self.children.len(), width, height, "flow measure");
        self.measured = Size::new(width, height);
        self.measured
    }

    /// Place children inside `frame` and write their frames back.
    pub fn layout(&mut self, frame: Rect) -> Vec<Rect> {
        let frames = self.packer.layout(frame.width(), &self.items());
        for (child, rect) in self.children.iter_mut().zip(&frames) {
            child.view.layout(*rect);
        }
        tracing::debug!(children = frames.len(), width = frame.width(), "flow layout");
        frames
    }

    /// Line assignment for the current measured sizes.
    pub fn lines(&self, container_width: i32) -> Vec<FlowLine> {
        self.packer.measure(container_width, &self.items()).lines
    }

    fn items(&self) -> Vec<FlowItem> {
        self.children
            .iter()
            .map(|c| FlowItem::new(c.measured, c.params.margins))
            .collect()
    }
}

impl<V: HostView> Default for FlowLayout<V> {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
