//! Anchor resolution.
//!
//! Turns a node's `AnchorSpec` into a top-left position, one axis at a
//! time, against the parent box and the siblings already placed in this
//! pass. Call order is layout order: a sibling placed later (or the node
//! itself) is not in the registry yet and reads as the zero rect.
//!
//! There is no clamping. A node may land partly or entirely outside its
//! parent if its anchors say so.

use crate::primitives::{Insets, Point, Rect, Size};

use super::anchor::{AnchorSpec, AnchorTarget, AxisAnchors, AxisRule};
use super::handle::NodeHandle;
use super::registry::NodeRegistry;

/// Which axis a rule is being evaluated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    #[inline]
    fn start(self, rect: &Rect) -> i32 {
        match self {
            Axis::Horizontal => rect.left,
            Axis::Vertical => rect.top,
        }
    }

    #[inline]
    fn end(self, rect: &Rect) -> i32 {
        match self {
            Axis::Horizontal => rect.right,
            Axis::Vertical => rect.bottom,
        }
    }

    #[inline]
    fn extent(self, rect: &Rect) -> i32 {
        match self {
            Axis::Horizontal => rect.width(),
            Axis::Vertical => rect.height(),
        }
    }

    #[inline]
    fn mid(self, rect: &Rect) -> i32 {
        match self {
            Axis::Horizontal => rect.mid_x(),
            Axis::Vertical => rect.mid_y(),
        }
    }
}

/// Resolve a node's top-left corner.
///
/// `parent` is the container box as the host handed it to the layout pass;
/// parent-relative edge rules read its edges directly. `size` is the node's
/// measured size and `margins` its own margins.
pub fn resolve(
    parent: Rect,
    registry: &NodeRegistry,
    spec: &AnchorSpec,
    margins: &Insets,
    size: Size,
) -> Point {
    let x = resolve_axis(
        Axis::Horizontal,
        &spec.horizontal,
        parent,
        registry,
        (margins.left, margins.right),
        size.width,
    );
    let y = resolve_axis(
        Axis::Vertical,
        &spec.vertical,
        parent,
        registry,
        (margins.top, margins.bottom),
        size.height,
    );
    Point::new(x, y)
}

/// Resolve a node and register its rect under `handle`.
///
/// This is the per-node step both anchor containers run in declaration
/// order.
pub fn place(
    registry: &mut NodeRegistry,
    parent: Rect,
    handle: NodeHandle,
    spec: &AnchorSpec,
    margins: &Insets,
    size: Size,
) -> Rect {
    let origin = resolve(parent, registry, spec, margins, size);
    let rect = Rect::from_origin_size(origin, size);
    registry.register(handle, rect);
    tracing::trace!(handle = handle.raw(), ?rect, "placed node");
    rect
}

/// Resolve one axis. `margins` is (start, end) along that axis.
pub fn resolve_axis(
    axis: Axis,
    anchors: &AxisAnchors,
    parent: Rect,
    registry: &NodeRegistry,
    margins: (i32, i32),
    extent: i32,
) -> i32 {
    let (start_margin, end_margin) = margins;
    let Some(rule) = anchors.active() else {
        return 0;
    };

    match rule {
        AxisRule::Percent(p) => (axis.extent(&parent) as f32 * p).round() as i32,
        AxisRule::Center(AnchorTarget::Parent) => (axis.extent(&parent) - extent) / 2,
        AxisRule::Center(target) => {
            axis.mid(&target_rect(target, parent, registry)) - extent / 2
        }
        AxisRule::StartToEnd(target) => {
            axis.end(&target_rect(target, parent, registry)) + start_margin
        }
        AxisRule::StartToStart(target) => {
            axis.start(&target_rect(target, parent, registry)) + start_margin
        }
        AxisRule::EndToStart(target) => {
            axis.start(&target_rect(target, parent, registry)) - end_margin - extent
        }
        AxisRule::EndToEnd(target) => {
            axis.end(&target_rect(target, parent, registry)) - end_margin - extent
        }
    }
}

/// The rect a rule measures against. Unplaced siblings read as zero.
fn target_rect(target: AnchorTarget, parent: Rect, registry: &NodeRegistry) -> Rect {
    match target {
        AnchorTarget::Parent => parent,
        AnchorTarget::Node(handle) => registry.get(handle).unwrap_or_else(|| {
            tracing::trace!(handle = handle.raw(), "anchor target not placed yet, using origin");
            Rect::ZERO
        }),
    }
}
