//! anchorflow: Anchor and Flow Layout Engine
//!
//! anchorflow positions rectangular nodes inside a container from
//! declarative rules:
//! - Percentage offsets and edge/center anchors relative to the parent or
//!   to previously placed siblings
//! - Line-wrapping flow with horizontal and vertical gaps
//! - Text and image primitives measured without host widgets
//!
//! # Usage
//!
//! ```ignore
//! use anchorflow::layout::{AnchorSpec, AnchorTarget, IntrinsicView, LayoutParams, MeasureSpecs, PercentLayout};
//! use anchorflow::{Rect, Size};
//!
//! let mut layout = PercentLayout::new().push(
//!     "badge",
//!     IntrinsicView::new(50, 20),
//!     LayoutParams::default().anchors(AnchorSpec::new().left_percent(0.25).center_vertical_of(AnchorTarget::Parent)),
//! );
//! layout.measure(MeasureSpecs::exactly(Size::new(200, 100)));
//! let registry = layout.layout(Rect::new(0, 0, 200, 100));
//! ```
//!
//! The library logs through `tracing` and installs no subscriber.

// Core primitives
pub mod primitives;
pub mod error;
pub mod config;

// Layout system (anchor resolver, flow packer, containers)
pub mod layout;

// Re-export core types
pub use primitives::{Color, Insets, Point, Rect, Size};
pub use error::{LayoutError, Result};
pub use config::LayoutConfig;

// Layout system exports
pub use layout::{
    AnchorSpec, AnchorTarget, FlowLayout, HostView, LayoutDocument, LayoutParams, MeasureSpec,
    MeasureSpecs, NodeHandle, NodeRegistry, PercentLayout, Primitive, PrimitiveLayout, SizeSpec,
};
