//! Integration tests for the layout containers.
//!
//! Each test drives a container through the same measure-then-layout
//! sequence a host toolkit runs, and checks the frames written back to the
//! children. Set `RUST_LOG=anchorflow=trace` to see every placement.

use anchorflow::layout::{
    AnchorSpec, AnchorTarget, BuiltLayout, FlowLayout, ImageRef, ImageSource, IntrinsicView,
    LayoutParams, MeasureSpecs, PercentLayout, Primitive, PrimitiveLayout, TextRun,
};
use anchorflow::{Insets, LayoutConfig, LayoutDocument, NodeRegistry, Rect, Size};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Test harness that owns a percent container of fixed-size views.
struct PercentTest {
    layout: PercentLayout<IntrinsicView>,
    frame: Rect,
}

impl PercentTest {
    fn new(width: i32, height: i32) -> Self {
        init_tracing();
        Self {
            layout: PercentLayout::new(),
            frame: Rect::new(0, 0, width, height),
        }
    }

    fn add(&mut self, label: &str, width: i32, height: i32, margins: Insets, anchors: AnchorSpec) {
        self.layout.add(
            label,
            IntrinsicView::new(width, height),
            LayoutParams::default().margins(margins).anchors(anchors),
        );
    }

    /// Run one measure and layout pass.
    fn run(&mut self) -> NodeRegistry {
        self.layout.measure(MeasureSpecs::exactly(self.frame.size()));
        self.layout.layout(self.frame)
    }

    fn frame_of(&self, label: &str) -> Rect {
        self.layout
            .child(label)
            .map(|v| v.frame)
            .unwrap_or_else(|| panic!("no child {label}"))
    }
}

// =========================================================================
// Anchor resolution
// =========================================================================

#[test]
fn percent_offset_wins_over_relational_rules() {
    let mut t = PercentTest::new(200, 100);
    let other = t.layout.intern("other");
    t.add("other", 30, 30, Insets::ZERO, AnchorSpec::new().left_percent(0.8));
    let mut spec = AnchorSpec::new().start_to_end_of(other);
    spec.horizontal.percent = Some(0.3);
    t.add("a", 10, 10, Insets::new(7, 0, 0, 0), spec);
    t.run();
    assert_eq!(t.frame_of("a").left, 60);
}

#[test]
fn start_to_end_follows_sibling_right_edge() {
    let mut t = PercentTest::new(300, 100);
    let b = t.layout.intern("b");
    t.add("b", 50, 20, Insets::ZERO, AnchorSpec::new().left_percent(0.1).top_percent(0.1));
    t.add(
        "a",
        40,
        20,
        Insets::new(12, 3, 0, 0),
        AnchorSpec::new().start_to_end_of(b).top_to_top_of(b),
    );
    t.run();
    let b_rect = t.frame_of("b");
    assert_eq!(b_rect, Rect::new(30, 10, 80, 30));
    assert_eq!(t.frame_of("a").left, b_rect.right + 12);
    assert_eq!(t.frame_of("a").top, b_rect.top + 3);
}

#[test]
fn never_placed_target_reads_as_origin() {
    let mut t = PercentTest::new(200, 100);
    let ghost = t.layout.intern("ghost");
    t.add(
        "a",
        10,
        10,
        Insets::new(4, 6, 0, 0),
        AnchorSpec::new().start_to_end_of(ghost).top_to_bottom_of(ghost),
    );
    let registry = t.run();
    assert_eq!(t.frame_of("a").origin(), anchorflow::Point::new(4, 6));
    assert!(!registry.contains(ghost));
}

#[test]
fn percent_container_places_quarter_offset() {
    let mut t = PercentTest::new(200, 80);
    t.add("box", 50, 20, Insets::ZERO, AnchorSpec::new().left_percent(0.25));
    t.run();
    let rect = t.frame_of("box");
    assert_eq!((rect.left, rect.right), (50, 100));
}

#[test]
fn end_anchored_row_to_the_right_edge() {
    let mut t = PercentTest::new(320, 48);
    let close = t.layout.intern("close");
    t.add(
        "close",
        24,
        24,
        Insets::new(0, 0, 16, 0),
        AnchorSpec::new()
            .end_to_end_of(AnchorTarget::Parent)
            .center_vertical_of(AnchorTarget::Parent),
    );
    t.add(
        "menu",
        24,
        24,
        Insets::new(0, 0, 8, 0),
        AnchorSpec::new().end_to_start_of(close).center_vertical_of(close),
    );
    t.run();
    assert_eq!(t.frame_of("close"), Rect::new(280, 12, 304, 36));
    assert_eq!(t.frame_of("menu"), Rect::new(248, 12, 272, 36));
}

#[test]
fn repeated_passes_are_identical() {
    let mut t = PercentTest::new(240, 120);
    let a = t.layout.intern("a");
    t.add("a", 40, 40, Insets::all(4), AnchorSpec::new().center_in_parent());
    t.add("b", 20, 10, Insets::all(2), AnchorSpec::new().start_to_end_of(a).bottom_to_bottom_of(a));
    let first = t.run();
    let second = t.run();
    assert_eq!(first, second);
}

// =========================================================================
// Flow
// =========================================================================

fn flow_of(widths: &[i32], gap: i32) -> FlowLayout<IntrinsicView> {
    init_tracing();
    let mut flow = FlowLayout::new().horizontal_gap(gap).vertical_gap(gap);
    for &w in widths {
        flow.add(IntrinsicView::new(w, 20), LayoutParams::default());
    }
    flow
}

#[test]
fn flow_breaks_before_third_item() {
    let mut flow = flow_of(&[40, 40, 40], 10);
    let size = flow.measure(MeasureSpecs::new(
        anchorflow::MeasureSpec::exactly(100),
        anchorflow::MeasureSpec::UNSPECIFIED,
    ));
    assert_eq!(size, Size::new(100, 50));
    let lines = flow.lines(100);
    assert_eq!(lines.len(), 2);
    assert_eq!((lines[0].len, lines[1].first), (2, 2));

    let frames = flow.layout(Rect::new(0, 0, 100, 50));
    assert_eq!(frames[2], Rect::new(0, 30, 40, 50));
}

#[test]
fn flow_layout_is_idempotent() {
    let mut flow = flow_of(&[30, 50, 20, 60, 10], 5);
    flow.measure(MeasureSpecs::exactly(Size::new(120, 200)));
    let first = flow.layout(Rect::new(0, 0, 120, 200));
    let second = flow.layout(Rect::new(0, 0, 120, 200));
    assert_eq!(first, second);
    assert_eq!(flow.child(4).map(|v| v.frame), first.get(4).copied());
}

// =========================================================================
// Primitives and documents
// =========================================================================

#[test]
fn primitive_text_centered_in_parent() {
    init_tracing();
    let mut layout = PrimitiveLayout::new().push(
        Primitive::text("title", TextRun::new("centered"))
            .width(anchorflow::SizeSpec::Exact(60))
            .anchors(AnchorSpec::new().center_horizontal_of(AnchorTarget::Parent)),
    );
    layout.measure(MeasureSpecs::exactly(Size::new(200, 100)));
    layout.layout(Rect::new(0, 0, 200, 100));
    assert_eq!(layout.find("title").map(|p| p.rect().left), Some(70));
}

#[test]
fn primitive_hit_test_and_paint() {
    init_tracing();
    let mut layout = PrimitiveLayout::new();
    let icon = layout.add(
        Primitive::image("icon", ImageRef::new(ImageSource::new("icon.png", 32, 32)))
            .anchors(AnchorSpec::new().left_percent(0.1).top_percent(0.1)),
    );
    layout.add(
        Primitive::text("caption", TextRun::new("hi"))
            .margins(Insets::new(0, 4, 0, 0))
            .anchors(AnchorSpec::new().start_to_start_of(icon).top_to_bottom_of(icon)),
    );
    layout.measure(MeasureSpecs::exactly(Size::new(100, 100)));
    layout.layout(Rect::new(0, 0, 100, 100));

    assert_eq!(layout.label_at(15.0, 15.0), Some("icon"));
    assert_eq!(layout.label_at(11.0, 47.0), Some("caption"));
    assert_eq!(layout.label_at(99.0, 99.0), None);
    assert_eq!(layout.paint().len(), 2);
}

#[test]
fn document_builds_and_lays_out() -> anyhow::Result<()> {
    init_tracing();
    let json = r#"{
        "kind": "percent",
        "padding": {"left": 0},
        "children": [
            {"id": "avatar", "width": {"dp": 40}, "height": {"dp": 40},
             "margins": {"left": 16},
             "anchors": {"start_to_start_of": "parent", "center_vertical_of": "0"}},
            {"id": "name", "width": {"dp": 100}, "height": {"dp": 20},
             "margins": {"left": 12},
             "anchors": {"start_to_end_of": "avatar", "top_to_top_of": "avatar"}}
        ]
    }"#;
    let config = LayoutConfig::from_json(r#"{"density": {"density": 2.0, "scaled_density": 2.0}}"#)?;
    let mut built = LayoutDocument::from_json(json)?.build(&config, |_| IntrinsicView::new(0, 0))?;
    built.measure(MeasureSpecs::exactly(Size::new(400, 120)));
    built.layout(Rect::new(0, 0, 400, 120));

    let BuiltLayout::Percent(layout) = built else {
        panic!("expected percent layout");
    };
    assert_eq!(layout.child("avatar").map(|v| v.frame), Some(Rect::new(32, 20, 112, 100)));
    assert_eq!(layout.child("name").map(|v| v.frame), Some(Rect::new(136, 20, 336, 60)));
    Ok(())
}
