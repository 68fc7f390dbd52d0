//! Node handles and per-container label interning.
//!
//! `HandleArena` issues sequential handles as labels are first mentioned,
//! so a container never shares an id space with anything else. Handle 0 is
//! the parent sentinel; the labels `"0"` and `"parent"` always intern to it.
//!
//! `NodeHandle::from_label_hash` keeps the toolkit's legacy string-hash ids
//! for callers that still mint handles from labels. Distinct labels can
//! collide there; that is the caller's risk.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Label that always names the parent container.
pub const PARENT_LABEL: &str = "0";

/// Alias accepted for the parent container in documents.
pub const PARENT_ALIAS: &str = "parent";

/// Integer identifier used to look up a node's resolved rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeHandle(u32);

impl NodeHandle {
    /// The parent container.
    pub const PARENT: Self = Self(0);

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn is_parent(self) -> bool {
        self.0 == 0
    }

    /// Legacy id derivation: 32-bit string hash of the label, absolute value.
    ///
    /// Hashes UTF-16 code units with multiplier 31 and wrapping arithmetic.
    /// `"0"` is forced to the parent sentinel. `i32::MIN` stays negative
    /// under `abs`, so its bit pattern survives into the handle unchanged.
    pub fn from_label_hash(label: &str) -> Self {
        if label == PARENT_LABEL {
            return Self::PARENT;
        }
        let hash = label
            .encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32));
        Self(hash.wrapping_abs() as u32)
    }
}

/// Sequential handle issuer for one container.
///
/// Labels are kept for debugging and for resolving names back to handles.
/// Interning is idempotent: the same label always yields the same handle.
#[derive(Debug, Clone, Default)]
pub struct HandleArena {
    labels: IndexSet<String>,
}

impl HandleArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a label names the parent container.
    pub fn is_parent_label(label: &str) -> bool {
        label == PARENT_LABEL || label == PARENT_ALIAS
    }

    /// Return the handle for `label`, issuing the next one on first mention.
    pub fn intern(&mut self, label: &str) -> NodeHandle {
        if Self::is_parent_label(label) {
            return NodeHandle::PARENT;
        }
        if let Some(index) = self.labels.get_index_of(label) {
            return Self::handle_at(index);
        }
        let (index, _) = self.labels.insert_full(label.to_owned());
        Self::handle_at(index)
    }

    /// Look up a label without issuing a handle.
    pub fn get(&self, label: &str) -> Option<NodeHandle> {
        if Self::is_parent_label(label) {
            return Some(NodeHandle::PARENT);
        }
        self.labels.get_index_of(label).map(Self::handle_at)
    }

    /// The label a handle was issued for.
    pub fn label(&self, handle: NodeHandle) -> Option<&str> {
        if handle.is_parent() {
            return Some(PARENT_LABEL);
        }
        self.labels
            .get_index(handle.raw() as usize - 1)
            .map(String::as_str)
    }

    /// Number of issued (non-parent) handles.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn handle_at(index: usize) -> NodeHandle {
        NodeHandle(index as u32 + 1)
    }
}
