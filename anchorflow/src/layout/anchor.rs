//! Anchor declarations.
//!
//! An `AnchorSpec` pins a node's horizontal and vertical position, each
//! independently, to a percentage of the parent or to an edge/center of
//! the parent or a sibling. Both axes share one shape, `AxisAnchors`; on the
//! vertical axis "start" means top and "end" means bottom.
//!
//! The builder methods clear every other rule on the axis they touch. The
//! slot fields stay public so a spec can still carry several rules on one
//! axis; `AxisAnchors::active` then picks the winner by priority.

use super::handle::NodeHandle;

/// What an anchor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorTarget {
    /// The containing layout.
    Parent,
    /// A sibling, by handle.
    Node(NodeHandle),
}

impl From<NodeHandle> for AnchorTarget {
    fn from(handle: NodeHandle) -> Self {
        if handle.is_parent() {
            AnchorTarget::Parent
        } else {
            AnchorTarget::Node(handle)
        }
    }
}

/// The single rule that governs one axis after priority is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisRule {
    /// Offset as a fraction of the parent's extent.
    Percent(f32),
    /// Center on the target.
    Center(AnchorTarget),
    /// Start edge to the target's end edge.
    StartToEnd(AnchorTarget),
    /// Start edge to the target's start edge.
    StartToStart(AnchorTarget),
    /// End edge to the target's start edge.
    EndToStart(AnchorTarget),
    /// End edge to the target's end edge.
    EndToEnd(AnchorTarget),
}

/// Rule slots for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisAnchors {
    pub percent: Option<f32>,
    pub center: Option<AnchorTarget>,
    pub start_to_end: Option<AnchorTarget>,
    pub start_to_start: Option<AnchorTarget>,
    pub end_to_start: Option<AnchorTarget>,
    pub end_to_end: Option<AnchorTarget>,
}

impl AxisAnchors {
    /// Slots holding exactly `rule`.
    pub fn from_rule(rule: AxisRule) -> Self {
        let mut anchors = Self::default();
        match rule {
            AxisRule::Percent(p) => anchors.percent = Some(p),
            AxisRule::Center(t) => anchors.center = Some(t),
            AxisRule::StartToEnd(t) => anchors.start_to_end = Some(t),
            AxisRule::StartToStart(t) => anchors.start_to_start = Some(t),
            AxisRule::EndToStart(t) => anchors.end_to_start = Some(t),
            AxisRule::EndToEnd(t) => anchors.end_to_end = Some(t),
        }
        anchors
    }

    /// The winning rule: percent, center, start-to-end, start-to-start,
    /// end-to-start, end-to-end, in that order.
    pub fn active(&self) -> Option<AxisRule> {
        if let Some(p) = self.percent {
            return Some(AxisRule::Percent(p));
        }
        self.center
            .map(AxisRule::Center)
            .or(self.start_to_end.map(AxisRule::StartToEnd))
            .or(self.start_to_start.map(AxisRule::StartToStart))
            .or(self.end_to_start.map(AxisRule::EndToStart))
            .or(self.end_to_end.map(AxisRule::EndToEnd))
    }

    /// Number of slots set. More than one means the spec is malformed.
    pub fn rule_count(&self) -> usize {
        [
            self.percent.is_some(),
            self.center.is_some(),
            self.start_to_end.is_some(),
            self.start_to_start.is_some(),
            self.end_to_start.is_some(),
            self.end_to_end.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

/// Immutable anchor declaration for one node.
///
/// ```ignore
/// let spec = AnchorSpec::new()
///     .start_to_end_of(icon)
///     .center_vertical_of(AnchorTarget::Parent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorSpec {
    pub horizontal: AxisAnchors,
    pub vertical: AxisAnchors,
}

impl AnchorSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the horizontal rule.
    pub fn horizontal(mut self, rule: AxisRule) -> Self {
        self.horizontal = AxisAnchors::from_rule(rule);
        self
    }

    /// Replace the vertical rule.
    pub fn vertical(mut self, rule: AxisRule) -> Self {
        self.vertical = AxisAnchors::from_rule(rule);
        self
    }

    pub fn left_percent(self, percent: f32) -> Self {
        self.horizontal(AxisRule::Percent(percent))
    }

    pub fn center_horizontal_of(self, target: impl Into<AnchorTarget>) -> Self {
        self.horizontal(AxisRule::Center(target.into()))
    }

    pub fn start_to_start_of(self, target: impl Into<AnchorTarget>) -> Self {
        self.horizontal(AxisRule::StartToStart(target.into()))
    }

    pub fn start_to_end_of(self, target: impl Into<AnchorTarget>) -> Self {
        self.horizontal(AxisRule::StartToEnd(target.into()))
    }

    pub fn end_to_start_of(self, target: impl Into<AnchorTarget>) -> Self {
        self.horizontal(AxisRule::EndToStart(target.into()))
    }

    pub fn end_to_end_of(self, target: impl Into<AnchorTarget>) -> Self {
        self.horizontal(AxisRule::EndToEnd(target.into()))
    }

    pub fn top_percent(self, percent: f32) -> Self {
        self.vertical(AxisRule::Percent(percent))
    }

    pub fn center_vertical_of(self, target: impl Into<AnchorTarget>) -> Self {
        self.vertical(AxisRule::Center(target.into()))
    }

    pub fn top_to_top_of(self, target: impl Into<AnchorTarget>) -> Self {
        self.vertical(AxisRule::StartToStart(target.into()))
    }

    pub fn top_to_bottom_of(self, target: impl Into<AnchorTarget>) -> Self {
        self.vertical(AxisRule::StartToEnd(target.into()))
    }

    pub fn bottom_to_top_of(self, target: impl Into<AnchorTarget>) -> Self {
        self.vertical(AxisRule::EndToStart(target.into()))
    }

    pub fn bottom_to_bottom_of(self, target: impl Into<AnchorTarget>) -> Self {
        self.vertical(AxisRule::EndToEnd(target.into()))
    }

    /// Center on the parent along both axes.
    pub fn center_in_parent(self) -> Self {
        self.center_horizontal_of(AnchorTarget::Parent)
            .center_vertical_of(AnchorTarget::Parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(raw: u32) -> AnchorTarget {
        AnchorTarget::Node(NodeHandle::from_raw(raw))
    }

    #[test]
    fn test_builder_clears_same_axis() {
        let spec = AnchorSpec::new().start_to_end_of(node(1)).left_percent(0.5);
        assert_eq!(spec.horizontal.rule_count(), 1);
        assert_eq!(spec.horizontal.active(), Some(AxisRule::Percent(0.5)));

        let spec = AnchorSpec::new().left_percent(0.5).end_to_end_of(node(2));
        assert_eq!(spec.horizontal.percent, None);
        assert_eq!(spec.horizontal.active(), Some(AxisRule::EndToEnd(node(2))));
    }

    #[test]
    fn test_builder_leaves_other_axis_alone() {
        let spec = AnchorSpec::new().top_percent(0.1).start_to_start_of(node(1));
        assert_eq!(spec.vertical.active(), Some(AxisRule::Percent(0.1)));
        assert_eq!(spec.horizontal.active(), Some(AxisRule::StartToStart(node(1))));
    }

    #[test]
    fn test_vertical_builders_map_to_mirrored_rules() {
        let t = node(4);
        assert_eq!(AnchorSpec::new().top_to_top_of(t).vertical.active(), Some(AxisRule::StartToStart(t)));
        assert_eq!(AnchorSpec::new().top_to_bottom_of(t).vertical.active(), Some(AxisRule::StartToEnd(t)));
        assert_eq!(AnchorSpec::new().bottom_to_top_of(t).vertical.active(), Some(AxisRule::EndToStart(t)));
        assert_eq!(AnchorSpec::new().bottom_to_bottom_of(t).vertical.active(), Some(AxisRule::EndToEnd(t)));
        assert_eq!(AnchorSpec::new().center_vertical_of(t).vertical.active(), Some(AxisRule::Center(t)));
    }

    #[test]
    fn test_priority_chain_on_malformed_slots() {
        let anchors = AxisAnchors {
            percent: None,
            center: None,
            start_to_end: Some(node(1)),
            start_to_start: Some(node(2)),
            end_to_start: None,
            end_to_end: Some(node(3)),
        };
        assert_eq!(anchors.rule_count(), 3);
        assert_eq!(anchors.active(), Some(AxisRule::StartToEnd(node(1))));

        let with_percent = AxisAnchors {
            percent: Some(0.3),
            center: Some(AnchorTarget::Parent),
            ..anchors
        };
        assert_eq!(with_percent.active(), Some(AxisRule::Percent(0.3)));
    }

    #[test]
    fn test_parent_handle_converts_to_parent_target() {
        assert_eq!(AnchorTarget::from(NodeHandle::PARENT), AnchorTarget::Parent);
        assert_eq!(AnchorTarget::from(NodeHandle::from_raw(7)), node(7));
    }

    #[test]
    fn test_empty_spec_has_no_rules() {
        let spec = AnchorSpec::new();
        assert_eq!(spec.horizontal.active(), None);
        assert_eq!(spec.vertical.active(), None);
    }
}
