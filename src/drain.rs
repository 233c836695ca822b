//! Removal-order views of a queue, for diagnostics
//!
//! [`drain_to_sequence`] deep-copies a queue and pops the copy until it is
//! empty, so the caller sees every item in the order `pop` would produce it
//! while the original stays untouched. The `Display` impls for both queue
//! types are built on it and print the items separated by single spaces.
//!
//! # Example
//!
//! ```rust
//! use stable_heaps::PriorityQueue;
//! use stable_heaps::drain::drain_to_sequence;
//! use stable_heaps::indexed_heap::IndexedHeap;
//!
//! let mut heap = IndexedHeap::new();
//! heap.push(2, "b");
//! heap.push(1, "a");
//!
//! assert_eq!(drain_to_sequence(&heap), vec!["a", "b"]);
//! assert_eq!(heap.to_string(), "a b");
//! assert_eq!(heap.len(), 2);
//! ```

use crate::indexed_heap::IndexedHeap;
use crate::sorted_list::SortedListQueue;
use crate::traits::PriorityQueue;
use std::fmt;

/// Returns every item of `queue` in removal order, leaving `queue` unchanged
pub fn drain_to_sequence<Q, T, P>(queue: &Q) -> Vec<T>
where
    Q: PriorityQueue<T, P> + Clone,
    P: Ord,
{
    let mut copy = queue.clone();
    let mut sequence = Vec::with_capacity(copy.len());
    while let Ok(item) = copy.pop() {
        sequence.push(item);
    }
    sequence
}

fn write_sequence<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl<T, P> fmt::Display for IndexedHeap<T, P>
where
    T: fmt::Display + Clone,
    P: Ord + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = drain_to_sequence::<_, T, P>(self);
        write_sequence(f, &items)
    }
}

impl<T, P> fmt::Display for SortedListQueue<T, P>
where
    T: fmt::Display,
    P: Ord,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The list is already in removal order; no copy needed.
        let items: Vec<&T> = self.iter().collect();
        write_sequence(f, &items)
    }
}
