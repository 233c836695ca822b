//! Common trait and error type for the priority queues in this crate
//!
//! [`PriorityQueue`] is the operation set shared by
//! [`IndexedHeap`](crate::indexed_heap::IndexedHeap) and
//! [`SortedListQueue`](crate::sorted_list::SortedListQueue). Generic code
//! (the drain helpers, the traversal frontiers and the law tests) is written
//! against this trait only.
//!
//! Both queues are *stable min-priority* queues: the element with the lowest
//! priority is served first, and elements sharing a priority are served in
//! the order they were pushed.

use thiserror::Error;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The operation needs at least one element but the queue is empty.
    ///
    /// The queue is left unchanged.
    #[error("{operation}: empty priority queue")]
    Empty {
        /// Name of the operation that was attempted
        operation: &'static str,
    },
}

impl QueueError {
    pub(crate) const fn empty(operation: &'static str) -> Self {
        QueueError::Empty { operation }
    }
}

/// Base trait for stable min-priority queues
///
/// Queues store (priority, item) pairs to separate the ordering key from the
/// data, like the rest of this crate. Unlike `std::collections::BinaryHeap`,
/// removal from an empty queue is an error rather than `None`, since it is a
/// precondition violation on the caller's side.
///
/// # Ordering contract
///
/// `pop` always returns an item with the globally minimal priority. Among
/// items sharing that priority, items come out in insertion order.
///
/// # Example
///
/// ```rust
/// use stable_heaps::PriorityQueue;
/// use stable_heaps::indexed_heap::IndexedHeap;
///
/// let mut queue = IndexedHeap::new();
/// queue.push(3, "three");
/// queue.push(1, "one");
/// queue.push(1, "uno");
///
/// assert_eq!(queue.peek(), Ok(&"one"));
/// assert_eq!(queue.pop(), Ok("one"));
/// assert_eq!(queue.pop(), Ok("uno"));
/// assert_eq!(queue.pop(), Ok("three"));
/// assert!(queue.pop().is_err());
/// ```
pub trait PriorityQueue<T, P: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// Never fails. Any priority is accepted, including duplicates.
    fn push(&mut self, priority: P, item: T);

    /// Returns the item that the next `pop` would return, without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    fn peek(&self) -> Result<&T, QueueError>;

    /// Returns the priority of the item that the next `pop` would return
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    fn peek_priority(&self) -> Result<&P, QueueError>;

    /// Removes and returns the item with minimal priority, oldest first among ties
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty. Nothing is mutated.
    fn pop(&mut self) -> Result<T, QueueError>;

    /// Removes all elements
    ///
    /// The default drains the queue one `pop` at a time.
    fn clear(&mut self) {
        while self.pop().is_ok() {}
    }
}
