//! Array-backed binary max-heap.
//!
//! The item at index `i` has children at `2i + 1` and `2i + 2`; every parent
//! has a priority at least as high as both children.

use super::Prioritized;
use crate::core::{GameError, Result, DEFAULT_HEAP_CAPACITY};

/// Binary max-heap over [`Prioritized`] items.
///
/// Capacity is tracked explicitly: it starts at the requested size and
/// doubles whenever an insert finds the heap full. A heap built with
/// [`MaxHeap::from_items`] starts with capacity equal to the input length.
#[derive(Clone, Debug)]
pub struct MaxHeap<T> {
    /// Heap-ordered items.
    items: Vec<T>,

    /// Slots available before the next doubling.
    capacity: usize,
}

impl<T: Prioritized> MaxHeap<T> {
    /// Create an empty heap with the default starting capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HEAP_CAPACITY)
    }

    /// Create an empty heap with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a heap from an arbitrary collection in linear time.
    ///
    /// Floyd's construction: sift down every non-leaf, starting from the last
    /// one and finishing at the root.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let capacity = items.len();
        let mut heap = Self { items, capacity };
        for i in (0..heap.items.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Number of items in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slots available before the heap next grows.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items in heap (array) order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Add an item, growing the backing store if it is full.
    pub fn insert(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.capacity = (self.capacity * 2).max(1);
            self.items.reserve_exact(self.capacity - self.items.len());
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Highest-priority item, without removing it.
    pub fn peek_max(&self) -> Result<&T> {
        self.items
            .first()
            .ok_or_else(|| GameError::empty("Cannot perform operation on empty MaxHeap"))
    }

    /// Remove and return the highest-priority item.
    ///
    /// The last item takes the root's place and sinks until both of its
    /// children rank no higher than it.
    pub fn remove_max(&mut self) -> Result<T> {
        let last = self
            .items
            .pop()
            .ok_or_else(|| GameError::empty("Cannot perform operation on empty MaxHeap"))?;
        if self.items.is_empty() {
            return Ok(last);
        }
        let top = std::mem::replace(&mut self.items[0], last);
        self.sift_down(0);
        Ok(top)
    }

    /// Drain the heap, highest priority first.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.remove_max() {
            sorted.push(item);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index].priority() <= self.items[parent].priority() {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child =
                if right < len && self.items[right].priority() > self.items[left].priority() {
                    right
                } else {
                    left
                };
            if self.items[child].priority() <= self.items[index].priority() {
                break;
            }
            self.items.swap(index, child);
            index = child;
        }
    }
}

impl<T: Prioritized> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Prioritized> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}
