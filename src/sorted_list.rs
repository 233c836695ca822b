//! Sorted linked-list priority queue
//!
//! The simple alternative to [`IndexedHeap`](crate::indexed_heap::IndexedHeap):
//! elements are kept in a singly linked list sorted by priority, so `pop` and
//! `peek` are O(1) and `push` walks the list to find its slot.
//!
//! Nodes live in a [`SlotMap`] arena and link to their successor by key,
//! so every node has exactly one owner (the arena) and a cloned queue is a
//! fully independent deep copy.
//!
//! A new element is placed *after* every element with the same priority,
//! which makes the list stable (FIFO among ties) without storing ranks.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(n)       |
//! | `pop`     | O(1)       |
//! | `peek`    | O(1)       |
//! | `clear`   | O(n)       |

use crate::traits::{PriorityQueue, QueueError};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Arena key for a list node
    struct NodeKey;
}

#[derive(Debug, Clone)]
struct ListNode<T, P> {
    priority: P,
    item: T,
    next: Option<NodeKey>,
}

/// A priority queue backed by a sorted singly linked list
///
/// # Example
///
/// ```rust
/// use stable_heaps::PriorityQueue;
/// use stable_heaps::sorted_list::SortedListQueue;
///
/// let mut queue = SortedListQueue::new();
/// queue.push(2, "b");
/// queue.push(1, "a");
/// queue.push(2, "c");
///
/// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// assert_eq!(queue.pop(), Ok("a"));
/// ```
#[derive(Debug, Clone)]
pub struct SortedListQueue<T, P: Ord> {
    nodes: SlotMap<NodeKey, ListNode<T, P>>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
}

impl<T, P: Ord> PriorityQueue<T, P> for SortedListQueue<T, P> {
    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, priority: P, item: T) {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            let key = self.nodes.insert(ListNode {
                priority,
                item,
                next: None,
            });
            self.head = Some(key);
            self.tail = Some(key);
            return;
        };

        if priority < self.nodes[head].priority {
            let key = self.nodes.insert(ListNode {
                priority,
                item,
                next: Some(head),
            });
            self.head = Some(key);
        } else if priority >= self.nodes[tail].priority {
            let key = self.nodes.insert(ListNode {
                priority,
                item,
                next: None,
            });
            self.nodes[tail].next = Some(key);
            self.tail = Some(key);
        } else {
            // The tail bounds the scan: some successor is always greater.
            let mut cursor = head;
            while let Some(next) = self.nodes[cursor].next {
                if priority < self.nodes[next].priority {
                    break;
                }
                cursor = next;
            }
            let next = self.nodes[cursor].next;
            let key = self.nodes.insert(ListNode {
                priority,
                item,
                next,
            });
            self.nodes[cursor].next = Some(key);
        }
    }

    fn peek(&self) -> Result<&T, QueueError> {
        self.head
            .map(|key| &self.nodes[key].item)
            .ok_or(QueueError::empty("peek"))
    }

    fn peek_priority(&self) -> Result<&P, QueueError> {
        self.head
            .map(|key| &self.nodes[key].priority)
            .ok_or(QueueError::empty("peek_priority"))
    }

    fn pop(&mut self) -> Result<T, QueueError> {
        let head = self.head.ok_or(QueueError::empty("pop"))?;
        let node = self
            .nodes
            .remove(head)
            .ok_or(QueueError::empty("pop"))?;

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.item)
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }
}

impl<T, P: Ord> SortedListQueue<T, P> {
    /// Creates an empty queue with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            head: None,
            tail: None,
        }
    }

    /// Iterates over the items in removal order without removing them
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

impl<T, P: Ord> Default for SortedListQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Extend<(P, T)> for SortedListQueue<T, P> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, item) in iter {
            self.push(priority, item);
        }
    }
}

impl<T, P: Ord> FromIterator<(P, T)> for SortedListQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Iterator over a [`SortedListQueue`] in removal order
pub struct Iter<'a, T, P> {
    nodes: &'a SlotMap<NodeKey, ListNode<T, P>>,
    cursor: Option<NodeKey>,
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut queue = SortedListQueue::new();
        assert!(queue.is_empty());

        queue.push(3, "three");
        queue.push(1, "one");
        queue.push(2, "two");

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Ok(&"one"));
        assert_eq!(queue.peek_priority(), Ok(&1));
        assert_eq!(queue.pop(), Ok("one"));
        assert_eq!(queue.pop(), Ok("two"));
        assert_eq!(queue.pop(), Ok("three"));
        assert_eq!(queue.pop(), Err(QueueError::Empty { operation: "pop" }));
        assert!(queue.head.is_none() && queue.tail.is_none());
    }

    #[test]
    fn test_insert_positions() {
        let mut queue = SortedListQueue::new();
        queue.push(5, 'a'); // first node
        queue.push(1, 'b'); // new head
        queue.push(9, 'c'); // new tail
        queue.push(3, 'd'); // middle
        queue.push(5, 'e'); // middle, behind the existing 5
        queue.push(1, 'f'); // equal to head, goes behind it

        assert_eq!(
            queue.iter().copied().collect::<Vec<_>>(),
            vec!['b', 'f', 'd', 'a', 'e', 'c']
        );
    }

    #[test]
    fn test_tail_tracks_after_pops() {
        let mut queue = SortedListQueue::new();
        queue.push(1, 1);
        assert_eq!(queue.pop(), Ok(1));
        queue.push(2, 2);
        queue.push(3, 3);
        assert_eq!(queue.tail.map(|key| queue.nodes[key].item), Some(3));
        assert_eq!(queue.pop(), Ok(2));
        assert_eq!(queue.pop(), Ok(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clone_independent() {
        let queue: SortedListQueue<&str, i32> = [(2, "x"), (1, "y")].into_iter().collect();
        let mut copy = queue.clone();
        copy.push(0, "z");
        assert_eq!(copy.pop(), Ok("z"));
        assert_eq!(copy.pop(), Ok("y"));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["y", "x"]);
    }

    #[test]
    fn test_clear() {
        let mut queue = SortedListQueue::with_capacity(8);
        queue.extend([(1, 'a'), (2, 'b')]);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.peek().is_err());
        queue.push(4, 'c');
        assert_eq!(queue.peek(), Ok(&'c'));
    }
}
