//! Percent Layout - host widgets positioned by percentage or relative anchors.
//!
//! Measuring delegates to each child's own measurement. Layout walks the
//! children in declaration order, resolves each against the parent box and
//! the siblings placed before it, and writes the frame back.
//!
//! The container needs a definite size from its host; with an unspecified
//! spec it measures to zero and every percentage resolves to 0.

use crate::primitives::{Insets, Rect, Size};

use super::constraints::MeasureSpecs;
use super::handle::{HandleArena, NodeHandle};
use super::host::{HostView, LayoutParams};
use super::registry::NodeRegistry;
use super::resolver;

struct PercentChild<V> {
    handle: NodeHandle,
    view: V,
    params: LayoutParams,
    measured: Size,
}

/// A container that places host children by `AnchorSpec`.
///
/// ```ignore
/// let mut layout = PercentLayout::new();
/// let title = layout.intern("title");
/// layout.add("title", title_view, LayoutParams::exact(120, 24)
///     .anchors(AnchorSpec::new().left_percent(0.1).top_percent(0.2)));
/// layout.add("subtitle", subtitle_view, LayoutParams::exact(120, 18)
///     .anchors(AnchorSpec::new().start_to_start_of(title).top_to_bottom_of(title)));
/// ```
pub struct PercentLayout<V> {
    children: Vec<PercentChild<V>>,
    arena: HandleArena,
    padding: Insets,
    measured: Size,
}

impl<V: HostView> PercentLayout<V> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            arena: HandleArena::new(),
            padding: Insets::ZERO,
            measured: Size::ZERO,
        }
    }

    /// Padding shrinks the space offered to children when they measure.
    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Add a child under `label` (builder form).
    pub fn push(mut self, label: &str, view: V, params: LayoutParams) -> Self {
        self.add(label, view, params);
        self
    }

    /// Add a child under `label` and return its handle.
    pub fn add(&mut self, label: &str, view: V, params: LayoutParams) -> NodeHandle {
        let handle = self.arena.intern(label);
        self.children.push(PercentChild {
            handle,
            view,
            params,
            measured: Size::ZERO,
        });
        handle
    }

    /// Handle for `label`, issuing one if the label is new.
    ///
    /// Use this to anchor to a sibling that is added later; until that
    /// sibling is placed in a pass the anchor reads as the origin.
    pub fn intern(&mut self, label: &str) -> NodeHandle {
        self.arena.intern(label)
    }

    pub fn handles(&self) -> &HandleArena {
        &self.arena
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The first child added under `label`.
    pub fn child(&self, label: &str) -> Option<&V> {
        let handle = self.arena.get(label)?;
        self.children
            .iter()
            .find(|c| c.handle == handle)
            .map(|c| &c.view)
    }

    pub fn child_mut(&mut self, label: &str) -> Option<&mut V> {
        let handle = self.arena.get(label)?;
        self.children
            .iter_mut()
            .find(|c| c.handle == handle)
            .map(|c| &mut c.view)
    }

    /// Size from the last measure pass.
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Measure every child, then take the size the specs give.
    pub fn measure(&mut self, specs: MeasureSpecs) -> Size {
        for child in &mut self.children {
            let child_specs = child.params.child_specs(specs, &self.padding);
            child.measured = child.view.measure(child_specs);
        }
        self.measured = Size::new(specs.width.default_size(0), specs.height.default_size(0));
        tracing::debug!(children = self.children.len(), size = ?self.measured, "percent measure");
        self.measured
    }

    /// Resolve every child in declaration order and write frames back.
    ///
    /// Returns the registry built during this pass.
    pub fn layout(&mut self, frame: Rect) -> NodeRegistry {
        let mut registry = NodeRegistry::with_capacity(self.children.len());
        for child in &mut self.children {
            let rect = resolver::place(
                &mut registry,
                frame,
                child.handle,
                &child.params.anchors,
                &child.params.margins,
                child.measured,
            );
            child.view.layout(rect);
        }
        tracing::debug!(children = self.children.len(), ?frame, "percent layout");
        registry
    }
}

impl<V: HostView> Default for PercentLayout<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::anchor::{AnchorSpec, AnchorTarget};
    use crate::layout::constraints::MeasureSpec;
    use crate::layout::host::IntrinsicView;
    use crate::layout::length::SizeSpec;

    fn fixed(size: Size) -> MeasureSpecs {
        MeasureSpecs::exactly(size)
    }

    #[test]
    fn test_left_percent_child() {
        let mut layout = PercentLayout::new().push(
            "box",
            IntrinsicView::new(50, 20),
            LayoutParams::default().anchors(AnchorSpec::new().left_percent(0.25)),
        );
        layout.measure(fixed(Size::new(200, 100)));
        layout.layout(Rect::new(0, 0, 200, 100));
        let frame = layout.child("box").map(|v| v.frame);
        assert_eq!(frame, Some(Rect::new(50, 0, 100, 20)));
    }

    #[test]
    fn test_measure_takes_spec_size() {
        let mut layout: PercentLayout<IntrinsicView> = PercentLayout::new();
        assert_eq!(layout.measure(fixed(Size::new(300, 40))), Size::new(300, 40));
        let unspecified = MeasureSpecs::new(MeasureSpec::UNSPECIFIED, MeasureSpec::UNSPECIFIED);
        assert_eq!(layout.measure(unspecified), Size::ZERO);
    }

    #[test]
    fn test_children_measure_with_their_size_specs() {
        let mut layout = PercentLayout::new()
            .padding(Insets::all(10))
            .push(
                "fill",
                IntrinsicView::new(5, 5),
                LayoutParams::new(SizeSpec::MatchParent, SizeSpec::Percent(0.5)),
            );
        layout.measure(fixed(Size::new(200, 100)));
        assert_eq!(layout.child("fill").map(|v| v.measured), Some(Size::new(180, 40)));
    }

    #[test]
    fn test_chain_resolves_in_declaration_order() {
        let mut layout = PercentLayout::new();
        let icon = layout.intern("icon");
        layout.add(
            "icon",
            IntrinsicView::new(24, 24),
            LayoutParams::default()
                .margins(Insets::new(16, 0, 0, 0))
                .anchors(
                    AnchorSpec::new()
                        .start_to_start_of(AnchorTarget::Parent)
                        .center_vertical_of(AnchorTarget::Parent),
                ),
        );
        layout.add(
            "label",
            IntrinsicView::new(80, 20),
            LayoutParams::default()
                .margins(Insets::new(8, 0, 0, 0))
                .anchors(AnchorSpec::new().start_to_end_of(icon).center_vertical_of(icon)),
        );
        layout.measure(fixed(Size::new(320, 56)));
        let registry = layout.layout(Rect::new(0, 0, 320, 56));

        assert_eq!(layout.child("icon").map(|v| v.frame), Some(Rect::new(16, 16, 40, 40)));
        assert_eq!(layout.child("label").map(|v| v.frame), Some(Rect::new(48, 18, 128, 38)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_forward_reference_reads_origin() {
        let mut layout = PercentLayout::new();
        let later = layout.intern("later");
        layout.add(
            "early",
            IntrinsicView::new(10, 10),
            LayoutParams::default().anchors(AnchorSpec::new().start_to_end_of(later).top_to_bottom_of(later)),
        );
        layout.add(
            "later",
            IntrinsicView::new(10, 10),
            LayoutParams::default().anchors(AnchorSpec::new().left_percent(0.5).top_percent(0.5)),
        );
        layout.measure(fixed(Size::new(100, 100)));
        layout.layout(Rect::new(0, 0, 100, 100));
        assert_eq!(layout.child("early").map(|v| v.frame), Some(Rect::new(0, 0, 10, 10)));
        assert_eq!(layout.child("later").map(|v| v.frame), Some(Rect::new(50, 50, 60, 60)));
    }

    #[test]
    fn test_self_reference_reads_origin() {
        let mut layout = PercentLayout::new();
        let me = layout.intern("me");
        layout.add(
            "me",
            IntrinsicView::new(10, 10),
            LayoutParams::default()
                .margins(Insets::new(4, 0, 0, 0))
                .anchors(AnchorSpec::new().start_to_end_of(me)),
        );
        layout.measure(fixed(Size::new(100, 100)));
        layout.layout(Rect::new(0, 0, 100, 100));
        assert_eq!(layout.child("me").map(|v| v.frame.left), Some(4));
    }

    #[test]
    fn test_relayout_does_not_reuse_previous_positions() {
        let mut layout = PercentLayout::new();
        let later = layout.intern("later");
        layout.add(
            "early",
            IntrinsicView::new(10, 10),
            LayoutParams::default().anchors(AnchorSpec::new().start_to_end_of(later)),
        );
        layout.add(
            "later",
            IntrinsicView::new(10, 10),
            LayoutParams::default().anchors(AnchorSpec::new().left_percent(0.5)),
        );
        layout.measure(fixed(Size::new(100, 100)));
        let first = layout.layout(Rect::new(0, 0, 100, 100));
        let second = layout.layout(Rect::new(0, 0, 100, 100));
        assert_eq!(first.get(layout.intern("early")), second.get(layout.intern("early")));
        assert_eq!(layout.child("early").map(|v| v.frame.left), Some(0));
    }
}
