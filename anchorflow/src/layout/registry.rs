//! Per-pass node registry.
//!
//! Maps handles to resolved rects in the order nodes were laid out. A
//! lookup only sees nodes already placed in the current pass; anything else
//! is absent, and the resolver reads absent as the zero rect.

use indexmap::IndexMap;

use crate::primitives::Rect;

use super::handle::NodeHandle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeRegistry {
    rects: IndexMap<NodeHandle, Rect>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rects: IndexMap::with_capacity(capacity),
        }
    }

    /// Record a node's resolved rect.
    ///
    /// Registering the same handle twice keeps its original position in the
    /// order and overwrites the rect, so two nodes sharing a handle resolve
    /// against whichever was placed last.
    pub fn register(&mut self, handle: NodeHandle, rect: Rect) {
        self.rects.insert(handle, rect);
    }

    /// The rect of an already-placed node.
    #[inline]
    pub fn get(&self, handle: NodeHandle) -> Option<Rect> {
        self.rects.get(&handle).copied()
    }

    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.rects.contains_key(&handle)
    }

    /// Placed nodes in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, Rect)> + '_ {
        self.rects.iter().map(|(h, r)| (*h, *r))
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
