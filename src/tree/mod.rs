//! Branching score tracking.
//!
//! A hand's possible totals are the leaves of a binary tree. Each card added
//! grows every leaf by the card's values: one child for most cards, two for
//! an ace (1 or 11). Equal totals reached along different paths stay separate
//! leaves.

pub mod node;
pub mod score_tree;

pub use node::{NodeId, ScoreNode};
pub use score_tree::{Preorder, ScoreTree};
