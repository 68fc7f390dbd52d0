//! The host toolkit seam.
//!
//! Containers never create widgets. They own children that implement
//! `HostView`, ask them to measure against a spec, and hand back a frame.

use crate::primitives::{Insets, Rect, Size};

use super::anchor::AnchorSpec;
use super::constraints::MeasureSpecs;
use super::length::SizeSpec;

/// A host widget as seen by a container.
pub trait HostView {
    /// Measure against the given specs and return the measured size.
    fn measure(&mut self, specs: MeasureSpecs) -> Size;

    /// Accept the frame resolved by the container, in container coordinates.
    fn layout(&mut self, frame: Rect);
}

impl<V: HostView + ?Sized> HostView for Box<V> {
    fn measure(&mut self, specs: MeasureSpecs) -> Size {
        (**self).measure(specs)
    }

    fn layout(&mut self, frame: Rect) {
        (**self).layout(frame)
    }
}

/// Per-child layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutParams {
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub margins: Insets,
    pub anchors: AnchorSpec,
}

impl LayoutParams {
    pub fn new(width: SizeSpec, height: SizeSpec) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Fixed pixel size on both axes.
    pub fn exact(width: i32, height: i32) -> Self {
        Self::new(SizeSpec::Exact(width), SizeSpec::Exact(height))
    }

    pub fn margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    pub fn anchors(mut self, anchors: AnchorSpec) -> Self {
        self.anchors = anchors;
        self
    }

    /// Specs for measuring a child of a container measured with `parent`.
    ///
    /// Only the container's padding is taken off; margins do not shrink the
    /// space offered to the child.
    pub fn child_specs(&self, parent: MeasureSpecs, padding: &Insets) -> MeasureSpecs {
        MeasureSpecs::new(
            parent.width.for_child(padding.horizontal(), self.width),
            parent.height.for_child(padding.vertical(), self.height),
        )
    }
}

/// A host view with a fixed intrinsic size.
///
/// Measures by reconciling its intrinsic size with the spec and records the
/// last frame it was given. Stands in for toolkit widgets that report a
/// natural size (icons, fixed buttons) and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntrinsicView {
    pub intrinsic: Size,
    pub measured: Size,
    pub frame: Rect,
}

impl IntrinsicView {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            intrinsic: Size::new(width, height),
            ..Self::default()
        }
    }
}

impl HostView for IntrinsicView {
    fn measure(&mut self, specs: MeasureSpecs) -> Size {
        self.measured = specs.resolve(self.intrinsic);
        self.measured
    }

    fn layout(&mut self, frame: Rect) {
        self.frame = frame;
    }
}
