//! Layout System for anchorflow
//!
//! Three containers share one measure/layout protocol:
//!
//! - `PercentLayout` places host views by percentage or relative anchors.
//! - `PrimitiveLayout` places lightweight text and image records the same
//!   way, then paints them into a `DrawList`.
//! - `FlowLayout` wraps host views into lines like words in a paragraph.
//!
//! # Architecture
//!
//! ```text
//! measure(specs) sizes every child -> layout(frame) resolves positions in
//! declaration order -> frames written back / NodeRegistry returned
//! ```
//!
//! Resolution is a single ordered pass. A node can only anchor to the parent
//! or to siblings placed before it; anything else reads as the origin.

pub mod anchor;
pub mod constraints;
pub mod document;
pub mod elements;
pub mod flow;
pub mod handle;
pub mod host;
pub mod length;
pub mod percent;
pub mod primitive_layout;
pub mod primitives;
pub mod registry;
pub mod resolver;
pub mod text;

// Re-export core types
pub use anchor::{AnchorSpec, AnchorTarget, AxisAnchors, AxisRule};
pub use constraints::{MeasureMode, MeasureSpec, MeasureSpecs};
pub use handle::{HandleArena, NodeHandle};
pub use host::{HostView, IntrinsicView, LayoutParams};
pub use length::{Density, SizeSpec, BASE_DENSITY, BASE_FONT_SIZE};
pub use registry::NodeRegistry;
pub use resolver::Axis;

// Re-export containers
pub use flow::{FlowItem, FlowLayout, FlowLine, FlowMeasure, FlowPacker, LineBreaker};
pub use percent::PercentLayout;
pub use primitive_layout::{Primitive, PrimitiveKind, PrimitiveLayout};

// Re-export leaves, text and painting
pub use document::{BuiltLayout, LayoutDocument, NodeDoc};
pub use elements::{Corner, CornerRadii, ImageRef, ImageSource, Shape, TextRun};
pub use primitives::{DrawCommand, DrawList};
pub use text::{MonospaceShaper, TextAlign, TextBlock, TextShaper, TextStyle};
