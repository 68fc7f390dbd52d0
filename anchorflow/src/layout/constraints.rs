//! Measure specs passed down during the measure phase.
//!
//! A `MeasureSpec` is the host toolkit's per-axis constraint: a mode plus a
//! pixel size. Containers derive a child's spec from their own spec and the
//! child's declared `SizeSpec`.

use crate::error::{LayoutError, Result};
use crate::primitives::Size;

use super::length::SizeSpec;

/// How strictly the size of a `MeasureSpec` binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasureMode {
    /// The parent imposes no constraint.
    #[default]
    Unspecified,
    /// The node must be exactly `size`.
    Exactly,
    /// The node may be at most `size`.
    AtMost,
}

/// Per-axis measure constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: i32,
}

impl MeasureSpec {
    /// No constraint.
    pub const UNSPECIFIED: Self = Self {
        mode: MeasureMode::Unspecified,
        size: 0,
    };

    /// Checked constructor for specs coming from outside the crate.
    pub fn new(mode: MeasureMode, size: i32) -> Result<Self> {
        if size < 0 {
            return Err(LayoutError::NegativeMeasure(size));
        }
        Ok(Self { mode, size })
    }

    #[inline]
    pub fn exactly(size: i32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size: size.max(0),
        }
    }

    #[inline]
    pub fn at_most(size: i32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size: size.max(0),
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.mode == MeasureMode::Exactly
    }

    /// Derive a child's spec from this (parent) spec.
    ///
    /// `padding` is the parent's padding plus the child's margins along
    /// this axis. Percent sizes are exact fractions of the space left.
    pub fn for_child(&self, padding: i32, child: SizeSpec) -> MeasureSpec {
        let available = (self.size - padding).max(0);
        match (child, self.mode) {
            (SizeSpec::Exact(px), _) => MeasureSpec::exactly(px),
            (_, MeasureMode::Unspecified) => MeasureSpec::UNSPECIFIED,
            (SizeSpec::MatchParent, MeasureMode::Exactly) => MeasureSpec::exactly(available),
            (SizeSpec::MatchParent, MeasureMode::AtMost) => MeasureSpec::at_most(available),
            (SizeSpec::WrapContent, _) => MeasureSpec::at_most(available),
            (SizeSpec::Percent(p), _) => {
                MeasureSpec::exactly((available as f32 * p).round() as i32)
            }
        }
    }

    /// The size a node takes for this spec when it has no opinion of its own.
    pub fn default_size(&self, min: i32) -> i32 {
        match self.mode {
            MeasureMode::Unspecified => min,
            MeasureMode::Exactly | MeasureMode::AtMost => self.size,
        }
    }

    /// Reconcile a node's desired size with this spec.
    pub fn resolve(&self, desired: i32) -> i32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unspecified => desired,
        }
    }
}

/// Both axes of a measure request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasureSpecs {
    pub width: MeasureSpec,
    pub height: MeasureSpec,
}

impl MeasureSpecs {
    pub fn new(width: MeasureSpec, height: MeasureSpec) -> Self {
        Self { width, height }
    }

    /// Exact specs for a fixed container size.
    pub fn exactly(size: Size) -> Self {
        Self {
            width: MeasureSpec::exactly(size.width),
            height: MeasureSpec::exactly(size.height),
        }
    }

    /// Resolve a desired size against both axes.
    pub fn resolve(&self, desired: Size) -> Size {
        Size::new(self.width.resolve(desired.width), self.height.resolve(desired.height))
    }
}
