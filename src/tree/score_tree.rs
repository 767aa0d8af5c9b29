//! Arena-based score tree.
//!
//! Every root-to-leaf path sums one way of counting the cards added so far.
//! Nodes are stored in a flat `Vec<ScoreNode>` and linked by `NodeId`; the
//! root is always the first slot, so a tree can never be without one.

use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};

use super::node::{NodeId, ScoreNode};
use crate::core::{GameError, Result};

/// Binary tree of cumulative scores.
///
/// ```
/// use rust_blackjack::tree::ScoreTree;
///
/// let mut tree = ScoreTree::new(0);
/// tree.add_branch(&[1, 11]).unwrap(); // ace
/// tree.add_branch(&[10]).unwrap();    // king
/// assert_eq!(tree.leaf_values(), vec![11, 21]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScoreNode>", into = "Vec<ScoreNode>")]
pub struct ScoreTree {
    /// All nodes; index 0 is the root.
    nodes: Vec<ScoreNode>,
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl ScoreTree {
    /// Create a tree holding a single root.
    #[must_use]
    pub fn new(root_value: i32) -> Self {
        Self {
            nodes: vec![ScoreNode::new(root_value)],
        }
    }

    /// Rebuild a tree from a raw arena.
    ///
    /// Fails if the arena is empty (no root) or the links do not form a single
    /// tree rooted at index 0. Children must sit after their parent and every
    /// non-root node must have exactly one parent.
    pub fn from_nodes(nodes: Vec<ScoreNode>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(GameError::invalid("Root cannot be empty"));
        }
        if nodes.len() >= NodeId::NONE.index() {
            return Err(GameError::invalid("Too many nodes for a score tree"));
        }

        let mut has_parent = vec![false; nodes.len()];
        for (parent, node) in nodes.iter().enumerate() {
            for child in node.children() {
                let idx = child.index();
                if idx <= parent || idx >= nodes.len() {
                    return Err(GameError::invalid(format!(
                        "{child} is not a valid child of NodeId({parent})"
                    )));
                }
                if std::mem::replace(&mut has_parent[idx], true) {
                    return Err(GameError::invalid(format!("{child} has more than one parent")));
                }
            }
        }

        if let Some(orphan) = has_parent.iter().skip(1).position(|linked| !linked) {
            return Err(GameError::invalid(format!(
                "NodeId({}) is unreachable from the root",
                orphan + 1
            )));
        }

        Ok(Self { nodes })
    }

    /// Root node ID (always 0).
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Get a node by ID.
    ///
    /// Panics if `id` does not belong to this tree.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &ScoreNode {
        &self.nodes[id.index()]
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn alloc(&mut self, node: ScoreNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn attach(&mut self, parent: NodeId, side: Side, value: i32) -> Result<NodeId> {
        let slot = match self.nodes.get(parent.index()) {
            Some(node) => match side {
                Side::Left => node.left,
                Side::Right => node.right,
            },
            None => return Err(GameError::invalid(format!("{parent} is not in the tree"))),
        };
        if !slot.is_none() {
            return Err(GameError::invalid(format!("{parent} already has that child")));
        }

        let child = self.alloc(ScoreNode::new(value));
        let node = &mut self.nodes[parent.index()];
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
        Ok(child)
    }

    /// Hang a new left child holding `value` under `parent`.
    pub fn attach_left(&mut self, parent: NodeId, value: i32) -> Result<NodeId> {
        self.attach(parent, Side::Left, value)
    }

    /// Hang a new right child holding `value` under `parent`.
    pub fn attach_right(&mut self, parent: NodeId, value: i32) -> Result<NodeId> {
        self.attach(parent, Side::Right, value)
    }

    /// Grow every current leaf by a card's possible values.
    ///
    /// The first value becomes the left child (`leaf + values[0]`), the
    /// second, if present, the right child. The new children replace the old
    /// leaves as the live score set. Returns the new leaf count.
    pub fn add_branch(&mut self, values: &[i32]) -> Result<usize> {
        let (first, second) = match *values {
            [first] => (first, None),
            [first, second] => (first, Some(second)),
            _ => {
                return Err(GameError::invalid(format!(
                    "A card must have one or two values, got {}",
                    values.len()
                )))
            }
        };

        let overflow = || GameError::invalid(format!("Score overflow adding {values:?}"));
        let mut branches = Vec::new();
        for leaf in self.leaves() {
            let base = self.get(leaf).value;
            let left = base.checked_add(first).ok_or_else(overflow)?;
            let right = match second {
                Some(second) => Some(base.checked_add(second).ok_or_else(overflow)?),
                None => None,
            };
            branches.push((leaf, left, right));
        }

        // every sum is known before the tree is touched
        for &(leaf, left, right) in &branches {
            self.attach(leaf, Side::Left, left)?;
            if let Some(right) = right {
                self.attach(leaf, Side::Right, right)?;
            }
        }

        let leaf_count = branches.len() * values.len();
        debug!("branched {} leaves by {:?} into {}", branches.len(), values, leaf_count);
        Ok(leaf_count)
    }

    /// Pre-order traversal: node, then left subtree, then right subtree.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            pending: VecDeque::from([self.root()]),
        }
    }

    /// Leaf IDs in pre-order (left before right).
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.preorder()
            .filter(|(_, node)| node.is_leaf())
            .map(|(id, _)| id)
    }

    /// Values of the current leaves in pre-order.
    #[must_use]
    pub fn leaf_values(&self) -> Vec<i32> {
        self.leaves().map(|id| self.get(id).value).collect()
    }

    /// Number of current leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Value-only equivalence.
    ///
    /// Two trees are equivalent when their pre-order traversals have the same
    /// length and equal values position by position. Shape is not compared:
    /// a value hanging left in one tree may hang right in the other.
    #[must_use]
    pub fn is_equivalent(&self, other: &ScoreTree) -> bool {
        self.len() == other.len()
            && self
                .preorder()
                .zip(other.preorder())
                .all(|((_, a), (_, b))| a.value == b.value)
    }
}

impl TryFrom<Vec<ScoreNode>> for ScoreTree {
    type Error = GameError;

    fn try_from(nodes: Vec<ScoreNode>) -> Result<Self> {
        Self::from_nodes(nodes)
    }
}

impl From<ScoreTree> for Vec<ScoreNode> {
    fn from(tree: ScoreTree) -> Self {
        tree.nodes
    }
}

/// Iterative pre-order walk over a `ScoreTree`.
///
/// Children of the node just visited are pushed to the front of the work
/// queue, right first, so the left subtree is explored next.
pub struct Preorder<'a> {
    tree: &'a ScoreTree,
    pending: VecDeque<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (NodeId, &'a ScoreNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.pending.pop_front()?;
        let node = self.tree.get(id);
        for child in node.children().into_iter().rev() {
            self.pending.push_front(child);
        }
        Some((id, node))
    }
}
