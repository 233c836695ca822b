//! Kani verification proofs for queue operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! The harnesses focus on the removal path of `IndexedHeap`, where the scratch
//! key is appended and discarded, and on the ordering contract shared with
//! `SortedListQueue`.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use stable_heaps::indexed_heap::IndexedHeap;
#[cfg(kani)]
use stable_heaps::sorted_list::SortedListQueue;
#[cfg(kani)]
use stable_heaps::PriorityQueue;

/// Proof that push always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_push_increments_len() {
    let mut heap: IndexedHeap<u8, u8> = IndexedHeap::new();
    heap.push(kani::any(), kani::any());
    let initial_len = heap.len();

    heap.push(kani::any(), kani::any());

    assert!(heap.len() == initial_len + 1);
    assert!(heap.verify_heap_property());
}

/// Proof that pop keeps the heap complete and ordered for every remaining count
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_pop_restores_invariants() {
    let mut heap: IndexedHeap<u8, u8> = IndexedHeap::new();
    let count: usize = kani::any();
    kani::assume(count >= 1 && count <= 5);

    for i in 0..count {
        let priority: u8 = kani::any();
        kani::assume(priority < 4);
        heap.push(priority, i as u8);
    }

    while heap.pop().is_ok() {
        assert!(heap.verify_heap_property());
    }
    assert!(heap.is_empty());
}

/// Proof that equal priorities leave in insertion order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_ties_are_fifo() {
    let mut heap: IndexedHeap<u8, u8> = IndexedHeap::new();
    let mut list: SortedListQueue<u8, u8> = SortedListQueue::new();

    for i in 0..4u8 {
        let priority: u8 = kani::any();
        kani::assume(priority < 2);
        heap.push(priority, i);
        list.push(priority, i);
    }

    while let Ok(item) = heap.pop() {
        assert!(list.pop() == Ok(item));
    }
    assert!(list.is_empty());
}

/// Proof that pop and peek on an empty queue fail without mutation
#[cfg(kani)]
#[kani::proof]
fn verify_empty_queue_errors() {
    let mut heap: IndexedHeap<u8, u8> = IndexedHeap::new();
    assert!(heap.peek().is_err());
    assert!(heap.pop().is_err());
    assert!(heap.len() == 0);
}
