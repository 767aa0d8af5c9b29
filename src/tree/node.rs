//! Score tree node structures.
//!
//! Nodes live in the `ScoreTree` arena and point at their children through
//! `NodeId` indices.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index into the `ScoreTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Position in the arena.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A cumulative score with up to two children.
///
/// The left child holds the score after a card's first value, the right
/// child the score after its second value (aces only).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreNode {
    /// Cumulative score at this node.
    pub value: i32,

    /// Left child (NONE if absent).
    pub left: NodeId,

    /// Right child (NONE if absent).
    pub right: NodeId,
}

impl ScoreNode {
    /// Create a childless node.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            left: NodeId::NONE,
            right: NodeId::NONE,
        }
    }

    /// A node with no children.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Existing children, left first.
    #[must_use]
    pub fn children(&self) -> SmallVec<[NodeId; 2]> {
        [self.left, self.right]
            .into_iter()
            .filter(|id| !id.is_none())
            .collect()
    }
}
