//! Primitive Layout - lightweight text and image leaves in one container.
//!
//! Children are plain records rather than host widgets. Text measures itself
//! through a `TextShaper`, images report their fixed or intrinsic size, and
//! both are then placed by the same anchor resolver the percent container
//! uses. The container paints its children into a `DrawList` and answers
//! hit-tests by scanning children in declaration order.

use crate::primitives::{Insets, Point, Rect, Size};

use super::anchor::AnchorSpec;
use super::constraints::MeasureSpecs;
use super::elements::{ImageRef, TextRun};
use super::handle::{HandleArena, NodeHandle};
use super::length::SizeSpec;
use super::primitives::DrawList;
use super::registry::NodeRegistry;
use super::resolver;
use super::text::{MonospaceShaper, TextAlign, TextShaper};

// =========================================================================
// Primitive
// =========================================================================

/// What a primitive draws.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveKind {
    Text(TextRun),
    Image(ImageRef),
}

/// A positioned leaf of a `PrimitiveLayout`.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    label: String,
    pub kind: PrimitiveKind,
    /// Size of the padded box. Wrap content means natural size plus padding.
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub margins: Insets,
    pub padding: Insets,
    pub anchors: AnchorSpec,
    handle: NodeHandle,
    measured: Size,
    rect: Rect,
}

impl Primitive {
    fn new(label: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self {
            label: label.into(),
            kind,
            width: SizeSpec::WrapContent,
            height: SizeSpec::WrapContent,
            margins: Insets::ZERO,
            padding: Insets::ZERO,
            anchors: AnchorSpec::new(),
            handle: NodeHandle::PARENT,
            measured: Size::ZERO,
            rect: Rect::ZERO,
        }
    }

    pub fn text(label: impl Into<String>, run: TextRun) -> Self {
        Self::new(label, PrimitiveKind::Text(run))
    }

    pub fn image(label: impl Into<String>, image: ImageRef) -> Self {
        Self::new(label, PrimitiveKind::Image(image))
    }

    pub fn width(mut self, width: SizeSpec) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: SizeSpec) -> Self {
        self.height = height;
        self
    }

    /// Fixed pixel size on both axes.
    pub fn size(self, width: i32, height: i32) -> Self {
        self.width(SizeSpec::Exact(width)).height(SizeSpec::Exact(height))
    }

    pub fn margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn anchors(mut self, anchors: AnchorSpec) -> Self {
        self.anchors = anchors;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Handle issued when the primitive was added to a container.
    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Rect from the last layout pass.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn as_text(&self) -> Option<&TextRun> {
        match &self.kind {
            PrimitiveKind::Text(run) => Some(run),
            PrimitiveKind::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageRef> {
        match &self.kind {
            PrimitiveKind::Image(image) => Some(image),
            PrimitiveKind::Text(_) => None,
        }
    }

    fn measure(&mut self, specs: MeasureSpecs, shaper: &dyn TextShaper) -> Size {
        let width_spec = specs.width.for_child(0, self.width);
        let height_spec = specs.height.for_child(0, self.height);
        let pad_w = self.padding.horizontal();
        let pad_h = self.padding.vertical();

        self.measured = match &mut self.kind {
            PrimitiveKind::Text(run) => {
                let natural = shaper.measure_width(&run.text, run.style.font_size);
                let capped = run.max_width.map_or(natural, |max| natural.min(max));
                let width = width_spec.resolve(capped + pad_w);
                let block = shaper.layout_block(&run.text, &run.style, (width - pad_w).max(0));
                let height = height_spec.resolve(block.height + pad_h);
                run.block = Some(block);
                Size::new(width, height)
            }
            PrimitiveKind::Image(image) => {
                let intrinsic = image.intrinsic_size();
                Size::new(
                    width_spec.resolve(intrinsic.width + pad_w),
                    height_spec.resolve(intrinsic.height + pad_h),
                )
            }
        };
        self.measured
    }

    fn paint(&self, shaper: &dyn TextShaper, list: &mut DrawList) {
        let content = self.rect.inset(&self.padding);
        match &self.kind {
            PrimitiveKind::Text(run) => {
                if let Some(shape) = &run.background {
                    list.add_background(self.rect, shape.radii(), shape.color);
                }
                let Some(block) = &run.block else {
                    return;
                };
                for (i, line) in block.lines.iter().enumerate() {
                    let line_width = shaper.measure_width(line, run.style.font_size);
                    let dx = match run.style.align {
                        TextAlign::Start => 0,
                        TextAlign::Center => (content.width() - line_width) / 2,
                        TextAlign::End => content.width() - line_width,
                    };
                    let dy = (i as f32 * block.line_advance).round() as i32;
                    list.add_text(
                        line.as_str(),
                        Point::new(content.left + dx, content.top + dy),
                        run.style.font_size,
                        run.style.color,
                    );
                }
            }
            PrimitiveKind::Image(image) => {
                list.add_image(content, image.source.key.as_str(), image.tint);
            }
        }
    }
}

// =========================================================================
// PrimitiveLayout
// =========================================================================

/// A container of text and image primitives positioned by `AnchorSpec`.
///
/// ```ignore
/// let mut layout = PrimitiveLayout::new();
/// let avatar = layout.add(Primitive::image("avatar", ImageRef::new(source))
///     .size(48, 48)
///     .anchors(AnchorSpec::new().left_percent(0.05).center_vertical_of(AnchorTarget::Parent)));
/// layout.add(Primitive::text("name", TextRun::new("Ada"))
///     .margins(Insets::new(12, 0, 0, 0))
///     .anchors(AnchorSpec::new().start_to_end_of(avatar).top_to_top_of(avatar)));
/// ```
pub struct PrimitiveLayout {
    primitives: Vec<Primitive>,
    arena: HandleArena,
    shaper: Box<dyn TextShaper>,
    measured: Size,
}

impl PrimitiveLayout {
    /// Container with the default monospace shaper.
    pub fn new() -> Self {
        Self::with_shaper(MonospaceShaper::default())
    }

    pub fn with_shaper(shaper: impl TextShaper + 'static) -> Self {
        Self {
            primitives: Vec::new(),
            arena: HandleArena::new(),
            shaper: Box::new(shaper),
            measured: Size::ZERO,
        }
    }

    /// Handle for `label`, issuing one if the label is new.
    pub fn intern(&mut self, label: &str) -> NodeHandle {
        self.arena.intern(label)
    }

    pub fn handles(&self) -> &HandleArena {
        &self.arena
    }

    /// Add a primitive and return its handle.
    pub fn add(&mut self, mut primitive: Primitive) -> NodeHandle {
        primitive.handle = self.arena.intern(&primitive.label);
        let handle = primitive.handle;
        self.primitives.push(primitive);
        handle
    }

    /// Add a primitive (builder form).
    pub fn push(mut self, primitive: Primitive) -> Self {
        self.add(primitive);
        self
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// The first primitive added under `label`.
    pub fn find(&self, label: &str) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.label == label)
    }

    pub fn find_mut(&mut self, label: &str) -> Option<&mut Primitive> {
        self.primitives.iter_mut().find(|p| p.label == label)
    }

    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Measure every primitive, then take the size the specs give.
    pub fn measure(&mut self, specs: MeasureSpecs) -> Size {
        for primitive in &mut self.primitives {
            primitive.measure(specs, self.shaper.as_ref());
        }
        self.measured = Size::new(specs.width.default_size(0), specs.height.default_size(0));
        tracing::debug!(primitives = self.primitives.len(), size = ?self.measured, "primitive measure");
        self.measured
    }

    /// Resolve every primitive in declaration order.
    pub fn layout(&mut self, frame: Rect) -> NodeRegistry {
        let mut registry = NodeRegistry::with_capacity(self.primitives.len());
        for primitive in &mut self.primitives {
            primitive.rect = resolver::place(
                &mut registry,
                frame,
                primitive.handle,
                &primitive.anchors,
                &primitive.margins,
                primitive.measured,
            );
        }
        tracing::debug!(primitives = self.primitives.len(), ?frame, "primitive layout");
        registry
    }

    /// The first primitive, in declaration order, whose rect contains the point.
    pub fn primitive_at(&self, x: i32, y: i32) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.rect.contains_xy(x, y))
    }

    /// Label of the primitive under a pointer position.
    pub fn label_at(&self, x: f32, y: f32) -> Option<&str> {
        self.primitive_at(x as i32, y as i32).map(Primitive::label)
    }

    /// Paint every primitive at its resolved rect, in declaration order.
    pub fn paint(&self) -> DrawList {
        let mut list = DrawList::new();
        for primitive in &self.primitives {
            primitive.paint(self.shaper.as_ref(), &mut list);
        }
        list
    }
}

impl Default for PrimitiveLayout {
    fn default() -> Self {
        Self::new()
    }
}
