//! Stable priority queues and explicit-frontier graph traversal
//!
//! This crate provides two min-priority queues that serve equal priorities in
//! insertion order, plus graph traversal drivers built on explicit frontiers.
//!
//! # Features
//!
//! - **Indexed Heap**: binary heap with an insertion-rank tiebreak; O(log n) push and pop
//! - **Sorted List Queue**: sorted linked list in an arena; O(n) push, O(1) pop
//! - **Traversal**: depth-first (stack), breadth-first (queue) and best-first (heap) walks
//!
//! Both queues implement [`PriorityQueue`] and return [`QueueError::Empty`] when
//! asked to `pop` or `peek` an empty queue.
//!
//! # Example
//!
//! ```rust
//! use stable_heaps::indexed_heap::IndexedHeap;
//! use stable_heaps::{PriorityQueue, RealPriority};
//!
//! let mut heap = IndexedHeap::new();
//! heap.push(RealPriority::from(2.5), "later");
//! heap.push(RealPriority::from(-1.0), "first");
//! heap.push(RealPriority::from(2.5), "last");
//!
//! assert_eq!(heap.pop(), Ok("first"));
//! assert_eq!(heap.pop(), Ok("later"));
//! assert_eq!(heap.pop(), Ok("last"));
//! ```

pub mod drain;
pub mod indexed_heap;
pub mod rank;
pub mod sorted_list;
pub mod traits;
pub mod traversal;

// Re-export the main trait and error for convenience
pub use traits::{PriorityQueue, QueueError};

/// Totally ordered `f64` priority for real-valued keys
pub type RealPriority = ordered_float::OrderedFloat<f64>;
