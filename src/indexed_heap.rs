//! Indexed binary heap with insertion-rank tiebreak
//!
//! An array-backed binary min-heap. Each element carries its priority and a
//! rank taken from a counter owned by the heap, so that elements with equal
//! priority leave the heap in the order they entered it. The heap is a
//! *stable* min-priority queue, not merely a min-heap.
//!
//! # Layout
//!
//! Elements live in a vector interpreted as a complete binary tree: the
//! children of index `i` are `2i + 1` and `2i + 2`, its parent is
//! `(i - 1) / 2`. Keys (priority and rank) and values are kept in two
//! parallel vectors that are always swapped together.
//!
//! # Removal
//!
//! `pop` moves the last element to the root and sifts it down. When the
//! remaining count is even, the last internal node would have a single
//! child; a copy of the moved root's key is appended as a scratch right
//! child for the duration of the sift so every internal node visited has
//! two children. The scratch key never wins a comparison against the element
//! it was copied from, so it is still at the tail when the sift ends and is
//! dropped before `pop` returns. It only ever exists in the key vector,
//! which is why values never need to be cloned.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `clear`   | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use stable_heaps::PriorityQueue;
//! use stable_heaps::indexed_heap::IndexedHeap;
//!
//! let mut heap = IndexedHeap::new();
//! heap.push(5, 'a');
//! heap.push(1, 'b');
//! heap.push(3, 'c');
//! heap.push(1, 'd');
//! heap.push(2, 'e');
//!
//! let order: Vec<char> = std::iter::from_fn(|| heap.pop().ok()).collect();
//! assert_eq!(order, vec!['b', 'd', 'e', 'c', 'a']);
//! ```

use crate::rank::{Rank, RankCounter};
use crate::traits::{PriorityQueue, QueueError};

/// Ordering key of a heap slot: priority first, then insertion rank.
///
/// Field order matters: the derived `Ord` is lexicographic in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Key<P> {
    priority: P,
    rank: Rank,
}

/// A binary min-heap that serves equal priorities in insertion order
///
/// Cloning produces an independent heap with the same priorities, ranks and
/// array layout, so a clone drains in exactly the same order as the original.
#[derive(Debug, Clone)]
pub struct IndexedHeap<T, P: Ord> {
    /// Heap-ordered keys; one longer than `values` only inside `pop`
    keys: Vec<Key<P>>,
    /// Values, index-aligned with `keys`
    values: Vec<T>,
    ranks: RankCounter,
}

impl<T, P: Ord + Clone> PriorityQueue<T, P> for IndexedHeap<T, P> {
    fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            ranks: RankCounter::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn push(&mut self, priority: P, item: T) {
        let rank = self.ranks.next();
        self.keys.push(Key { priority, rank });
        self.values.push(item);
        self.sift_up(self.values.len() - 1);
    }

    fn peek(&self) -> Result<&T, QueueError> {
        self.values.first().ok_or(QueueError::empty("peek"))
    }

    fn peek_priority(&self) -> Result<&P, QueueError> {
        self.keys
            .first()
            .map(|key| &key.priority)
            .ok_or(QueueError::empty("peek_priority"))
    }

    fn pop(&mut self) -> Result<T, QueueError> {
        if self.values.is_empty() {
            return Err(QueueError::empty("pop"));
        }

        // The last live element overwrites the root.
        self.keys.swap_remove(0);
        let result = self.values.swap_remove(0);

        if !self.values.is_empty() {
            self.sift_down_from_root();
        }

        Ok(result)
    }

    fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }
}

impl<T, P: Ord + Clone> IndexedHeap<T, P> {
    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            ranks: RankCounter::new(),
        }
    }

    /// Iterates over (priority, item) pairs in storage order
    ///
    /// Storage order is heap order, not removal order; only the first pair is
    /// guaranteed to be the next one popped. Use
    /// [`drain_to_sequence`](crate::drain::drain_to_sequence) for removal order.
    pub fn iter(&self) -> impl Iterator<Item = (&P, &T)> {
        self.keys
            .iter()
            .map(|key| &key.priority)
            .zip(self.values.iter())
    }

    /// Checks the structural and ordering invariants of the heap
    ///
    /// Returns true when keys and values are index-aligned (the live region is
    /// a complete tree with no gaps) and every parent's (priority, rank) is
    /// lexicographically no greater than each of its children's.
    pub fn verify_heap_property(&self) -> bool {
        self.keys.len() == self.values.len()
            && (1..self.keys.len()).all(|child| self.keys[(child - 1) / 2] <= self.keys[child])
    }

    /// Move element at index up to maintain heap property
    ///
    /// Compares priorities only, with a strict `<`: an element never passes a
    /// parent of equal priority. A fresh element holds the largest rank, so
    /// stopping there is also correct in (priority, rank) order.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.keys[index].priority < self.keys[parent].priority {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Sift the root down, padding the tree to full pairs while doing so
    fn sift_down_from_root(&mut self) {
        let padded = self.values.len() % 2 == 0;
        if padded {
            let placeholder = self.keys[0].clone();
            self.keys.push(placeholder);
        }

        self.sift_down(0);

        if padded {
            self.keys.pop();
        }
        debug_assert_eq!(self.keys.len(), self.values.len());
    }

    /// Move element at index down to maintain heap property
    ///
    /// Only called with an odd number of keys, so any node with a left child
    /// also has a right child and the loop ends at the first node without one.
    fn sift_down(&mut self, mut index: usize) {
        debug_assert!(self.keys.len() % 2 == 1);
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if right >= self.keys.len() {
                break;
            }

            let current = &self.keys[index];
            if *current <= self.keys[left] && *current <= self.keys[right] {
                break;
            }

            // Smaller priority wins; on equal priority the smaller rank does.
            let child = if self.keys[right] < self.keys[left] {
                right
            } else {
                left
            };
            debug_assert!(
                child < self.values.len(),
                "scratch key promoted into live data"
            );

            self.swap(index, child);
            index = child;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.keys.swap(a, b);
        self.values.swap(a, b);
    }
}

impl<T, P: Ord + Clone> Default for IndexedHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord + Clone> Extend<(P, T)> for IndexedHeap<T, P> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, item) in iter {
            self.push(priority, item);
        }
    }
}

impl<T, P: Ord + Clone> FromIterator<(P, T)> for IndexedHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
