//! Priority-ordered selection.
//!
//! `MaxHeap` hands items back highest priority first. It is not tied to any
//! game type: anything implementing [`Prioritized`] can be queued, including
//! borrowed references, so a ranking can be drawn from live hands without
//! copying them.
//!
//! ## Example Usage
//!
//! ```
//! use rust_blackjack::heap::{MaxHeap, Prioritized};
//!
//! struct Bid(i32);
//!
//! impl Prioritized for Bid {
//!     type Priority = i32;
//!
//!     fn priority(&self) -> i32 {
//!         self.0
//!     }
//! }
//!
//! let mut heap = MaxHeap::from_items([Bid(3), Bid(9), Bid(4)]);
//! heap.insert(Bid(7));
//! assert_eq!(heap.remove_max().unwrap().0, 9);
//! assert_eq!(heap.peek_max().unwrap().0, 7);
//! ```

mod max_heap;

pub use max_heap::MaxHeap;

/// An item carrying a comparable priority.
///
/// Higher priorities leave a [`MaxHeap`] first. Equal priorities come out in
/// no particular order.
pub trait Prioritized {
    /// Priority type; compared with `Ord`.
    type Priority: Ord;

    /// Current priority of this item.
    fn priority(&self) -> Self::Priority;
}

impl<T: Prioritized + ?Sized> Prioritized for &T {
    type Priority = T::Priority;

    fn priority(&self) -> Self::Priority {
        (**self).priority()
    }
}
