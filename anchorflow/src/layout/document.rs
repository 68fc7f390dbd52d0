//! Declarative layout documents.
//!
//! A document describes one container and its children in JSON. Sizes,
//! margins, padding and gaps are in dp, font sizes in sp; both are converted
//! with the `Density` from `LayoutConfig` when the document is built.
//! Anchors name their targets by label, and `"0"` or `"parent"` mean the
//! container itself.
//!
//! ```json
//! {
//!   "kind": "primitive",
//!   "children": [
//!     { "id": "title", "text": { "text": "Hello" },
//!       "anchors": { "center_horizontal_of": "parent", "top_percent": 0.2 } },
//!     { "id": "body", "text": { "text": "World", "max_lines": 2 },
//!       "margins": { "top": 8 },
//!       "anchors": { "start_to_start_of": "title", "top_to_bottom_of": "title" } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::primitives::{Color, Insets, Rect, Size};

use super::anchor::{AnchorSpec, AnchorTarget, AxisAnchors};
use super::constraints::MeasureSpecs;
use super::elements::{Corner, CornerRadii, ImageRef, ImageSource, Shape, TextRun};
use super::flow::FlowLayout;
use super::handle::NodeHandle;
use super::host::{HostView, LayoutParams};
use super::length::{Density, SizeSpec};
use super::percent::PercentLayout;
use super::primitive_layout::{Primitive, PrimitiveLayout};
use super::text::TextAlign;

// =========================================================================
// Document model
// =========================================================================

/// One container and its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutDocument {
    Percent {
        #[serde(default)]
        padding: InsetsDoc,
        #[serde(default)]
        children: Vec<NodeDoc>,
    },
    Flow {
        #[serde(default)]
        horizontal_gap: f32,
        #[serde(default)]
        vertical_gap: f32,
        #[serde(default)]
        padding: InsetsDoc,
        #[serde(default)]
        children: Vec<NodeDoc>,
    },
    Primitive {
        #[serde(default)]
        children: Vec<NodeDoc>,
    },
}

/// A child node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDoc {
    pub id: String,
    /// Host widget type, handed to the view factory.
    pub view: Option<String>,
    pub width: Dimension,
    pub height: Dimension,
    pub margins: InsetsDoc,
    pub padding: InsetsDoc,
    pub anchors: AnchorDoc,
    /// Text payload (primitive containers).
    pub text: Option<TextDoc>,
    /// Image payload (primitive containers).
    pub image: Option<ImageDoc>,
    /// Free-form properties for the view factory.
    pub props: serde_json::Map<String, serde_json::Value>,
}

/// A declared size in dp.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Dp(f32),
    #[default]
    WrapContent,
    MatchParent,
    Percent(f32),
}

impl Dimension {
    pub fn to_spec(self, density: &Density) -> SizeSpec {
        match self {
            Dimension::Dp(dp) => SizeSpec::Exact(density.dp(dp)),
            Dimension::WrapContent => SizeSpec::WrapContent,
            Dimension::MatchParent => SizeSpec::MatchParent,
            Dimension::Percent(p) => SizeSpec::Percent(p),
        }
    }
}

/// Four-sided insets in dp.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InsetsDoc {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl InsetsDoc {
    pub fn to_px(self, density: &Density) -> Insets {
        Insets::new(
            density.dp(self.left),
            density.dp(self.top),
            density.dp(self.right),
            density.dp(self.bottom),
        )
    }
}

/// Anchor slots with targets named by label.
///
/// Every slot is kept as written. Setting several on one axis is allowed;
/// the resolver's priority order picks the winner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorDoc {
    pub left_percent: Option<f32>,
    pub center_horizontal_of: Option<String>,
    pub start_to_start_of: Option<String>,
    pub start_to_end_of: Option<String>,
    pub end_to_start_of: Option<String>,
    pub end_to_end_of: Option<String>,
    pub top_percent: Option<f32>,
    pub center_vertical_of: Option<String>,
    pub top_to_top_of: Option<String>,
    pub top_to_bottom_of: Option<String>,
    pub bottom_to_top_of: Option<String>,
    pub bottom_to_bottom_of: Option<String>,
}

impl AnchorDoc {
    /// Resolve labels to handles with `intern` and build the spec.
    pub fn to_spec(&self, mut intern: impl FnMut(&str) -> NodeHandle) -> AnchorSpec {
        let mut target =
            |label: &Option<String>| label.as_deref().map(|l| AnchorTarget::from(intern(l)));
        let horizontal = AxisAnchors {
            percent: self.left_percent,
            center: target(&self.center_horizontal_of),
            start_to_end: target(&self.start_to_end_of),
            start_to_start: target(&self.start_to_start_of),
            end_to_start: target(&self.end_to_start_of),
            end_to_end: target(&self.end_to_end_of),
        };
        let vertical = AxisAnchors {
            percent: self.top_percent,
            center: target(&self.center_vertical_of),
            start_to_end: target(&self.top_to_bottom_of),
            start_to_start: target(&self.top_to_top_of),
            end_to_start: target(&self.bottom_to_top_of),
            end_to_end: target(&self.bottom_to_bottom_of),
        };
        AnchorSpec {
            horizontal,
            vertical,
        }
    }
}

/// Text payload. Font size in sp, spacing and widths in dp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextDoc {
    pub text: String,
    pub font_size: Option<f32>,
    pub color: Option<String>,
    pub line_spacing_add: f32,
    pub line_spacing_mult: f32,
    pub max_lines: usize,
    pub ellipsize: bool,
    pub max_width: Option<f32>,
    pub align: TextAlign,
    pub background: Option<ShapeDoc>,
}

impl Default for TextDoc {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: None,
            color: None,
            line_spacing_add: 0.0,
            line_spacing_mult: 1.0,
            max_lines: 1,
            ellipsize: true,
            max_width: None,
            align: TextAlign::Start,
            background: None,
        }
    }
}

/// Rounded background. Radii in dp; corners are `[rx, ry]` pairs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDoc {
    pub color: String,
    pub radius: f32,
    pub corners: Option<CornersDoc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CornersDoc {
    pub top_left: [f32; 2],
    pub top_right: [f32; 2],
    pub bottom_right: [f32; 2],
    pub bottom_left: [f32; 2],
}

/// Image payload. Without an intrinsic size the key is read as a file path
/// and the size comes from the image header.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDoc {
    pub key: String,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub tint: Option<String>,
}

// =========================================================================
// Building
// =========================================================================

/// A container built from a document.
pub enum BuiltLayout<V> {
    Percent(PercentLayout<V>),
    Flow(FlowLayout<V>),
    Primitive(PrimitiveLayout),
}

impl<V: HostView> BuiltLayout<V> {
    pub fn measure(&mut self, specs: MeasureSpecs) -> Size {
        match self {
            BuiltLayout::Percent(layout) => layout.measure(specs),
            BuiltLayout::Flow(layout) => layout.measure(specs),
            BuiltLayout::Primitive(layout) => layout.measure(specs),
        }
    }

    pub fn layout(&mut self, frame: Rect) {
        match self {
            BuiltLayout::Percent(layout) => {
                layout.layout(frame);
            }
            BuiltLayout::Flow(layout) => {
                layout.layout(frame);
            }
            BuiltLayout::Primitive(layout) => {
                layout.layout(frame);
            }
        }
    }
}

impl LayoutDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn children(&self) -> &[NodeDoc] {
        match self {
            LayoutDocument::Percent { children, .. }
            | LayoutDocument::Flow { children, .. }
            | LayoutDocument::Primitive { children } => children,
        }
    }

    /// Build the container. `factory` creates the host view for each child
    /// of a percent or flow container; primitive containers never call it.
    pub fn build<V, F>(&self, config: &LayoutConfig, mut factory: F) -> Result<BuiltLayout<V>>
    where
        V: HostView,
        F: FnMut(&NodeDoc) -> V,
    {
        let density = &config.density;
        let built = match self {
            LayoutDocument::Percent { padding, children } => {
                let mut layout = PercentLayout::new().padding(padding.to_px(density));
                for node in children {
                    let anchors = node.anchors.to_spec(|label| layout.intern(label));
                    let params = node_params(node, density).anchors(anchors);
                    layout.add(&node.id, factory(node), params);
                }
                BuiltLayout::Percent(layout)
            }
            LayoutDocument::Flow {
                horizontal_gap,
                vertical_gap,
                padding,
                children,
            } => {
                let mut layout = FlowLayout::new()
                    .horizontal_gap(density.dp(*horizontal_gap))
                    .vertical_gap(density.dp(*vertical_gap))
                    .padding(padding.to_px(density));
                for node in children {
                    layout.add(factory(node), node_params(node, density));
                }
                BuiltLayout::Flow(layout)
            }
            LayoutDocument::Primitive { children } => {
                BuiltLayout::Primitive(build_primitives(children, config)?)
            }
        };
        tracing::debug!(children = self.children().len(), "built layout document");
        Ok(built)
    }

    /// Build a primitive container, failing for other kinds.
    pub fn build_primitive(&self, config: &LayoutConfig) -> Result<PrimitiveLayout> {
        match self {
            LayoutDocument::Primitive { children } => build_primitives(children, config),
            _ => Err(LayoutError::InvalidDocument(
                "expected a primitive container".to_owned(),
            )),
        }
    }
}

fn node_params(node: &NodeDoc, density: &Density) -> LayoutParams {
    LayoutParams::new(node.width.to_spec(density), node.height.to_spec(density))
        .margins(node.margins.to_px(density))
}

fn build_primitives(children: &[NodeDoc], config: &LayoutConfig) -> Result<PrimitiveLayout> {
    let density = &config.density;
    let mut layout = PrimitiveLayout::with_shaper(config.shaper());
    for node in children {
        let primitive = match (&node.text, &node.image) {
            (Some(text), _) => Primitive::text(&node.id, text_run(text, config)?),
            (None, Some(image)) => Primitive::image(&node.id, image_ref(image, density)?),
            (None, None) => {
                return Err(LayoutError::InvalidDocument(format!(
                    "primitive '{}' has neither text nor image",
                    node.id
                )));
            }
        };
        let anchors = node.anchors.to_spec(|label| layout.intern(label));
        layout.add(
            primitive
                .width(node.width.to_spec(density))
                .height(node.height.to_spec(density))
                .margins(node.margins.to_px(density))
                .padding(node.padding.to_px(density))
                .anchors(anchors),
        );
    }
    Ok(layout)
}

fn parse_color(s: &str) -> Result<Color> {
    Color::parse_hex(s).ok_or_else(|| LayoutError::InvalidColor(s.to_owned()))
}

fn text_run(doc: &TextDoc, config: &LayoutConfig) -> Result<TextRun> {
    let density = &config.density;
    let mut run = TextRun::new(doc.text.as_str())
        .font_size(density.sp(doc.font_size.unwrap_or(config.default_font_size)))
        .line_spacing(density.dp_f(doc.line_spacing_add), doc.line_spacing_mult)
        .max_lines(doc.max_lines)
        .ellipsize(doc.ellipsize)
        .align(doc.align);
    if let Some(color) = &doc.color {
        run = run.color(parse_color(color)?);
    }
    if let Some(max_width) = doc.max_width {
        run = run.max_width(density.dp(max_width));
    }
    if let Some(shape) = &doc.background {
        run = run.background(shape_from(shape, density)?);
    }
    Ok(run)
}

fn shape_from(doc: &ShapeDoc, density: &Density) -> Result<Shape> {
    let mut shape = Shape::new(parse_color(&doc.color)?).radius(density.dp_f(doc.radius));
    if let Some(corners) = doc.corners {
        let corner = |[rx, ry]: [f32; 2]| Corner {
            rx: density.dp_f(rx),
            ry: density.dp_f(ry),
        };
        shape = shape.corners(CornerRadii {
            top_left: corner(corners.top_left),
            top_right: corner(corners.top_right),
            bottom_right: corner(corners.bottom_right),
            bottom_left: corner(corners.bottom_left),
        });
    }
    Ok(shape)
}

fn image_ref(doc: &ImageDoc, density: &Density) -> Result<ImageRef> {
    let source = match (doc.width, doc.height) {
        (Some(width), Some(height)) => {
            ImageSource::new(doc.key.as_str(), density.dp(width), density.dp(height))
        }
        _ => ImageSource::probe_file(&doc.key)?,
    };
    let mut image = ImageRef::new(source);
    if let Some(tint) = &doc.tint {
        image = image.tint(parse_color(tint)?);
    }
    Ok(image)
}
