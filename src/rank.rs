//! Insertion rank type and the counter that hands ranks out.
//!
//! # What a rank is
//!
//! Every element pushed into an [`IndexedHeap`](crate::indexed_heap::IndexedHeap)
//! is stamped with a rank taken from a counter owned by that heap. Ranks are
//! strictly increasing across pushes, so among elements with equal priority
//! the one with the smaller rank was inserted first. The heap uses the rank
//! only to break priority ties; it is not an identity.
//!
//! # Why a counter and not a clock?
//!
//! A clock tick is coarse: two pushes inside the same tick would receive the
//! same stamp and the FIFO order among equal priorities would silently depend
//! on timing. A plain counter is distinct for every push.
//!
//! # Why u64?
//!
//! At one push per nanosecond a `u64` counter lasts for more than 500 years.
//! [`checked_increment`] still panics rather than wrapping, since a wrapped
//! rank would reorder ties.

/// Type alias for an insertion rank.
pub type Rank = u64;

/// Largest rank the counter can hand out.
pub const MAX_RANK: Rank = u64::MAX;

/// Safely increment a rank value, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`.
///
/// # Example
///
/// ```rust
/// use stable_heaps::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: a u64 insertion counter was exhausted, \
         which would take centuries at one push per nanosecond",
    )
}

/// Monotonic source of insertion ranks.
///
/// Each call to [`next`](RankCounter::next) returns a rank strictly greater
/// than every rank returned before by the same counter.
///
/// # Example
///
/// ```rust
/// use stable_heaps::rank::RankCounter;
///
/// let mut counter = RankCounter::new();
/// let a = counter.next();
/// let b = counter.next();
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankCounter {
    next: Rank,
}

impl RankCounter {
    /// Creates a counter whose first rank is 0.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Hands out the next rank.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Rank {
        let rank = self.next;
        self.next = checked_increment(rank);
        rank
    }

    /// Number of ranks handed out so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_increment() {
        assert_eq!(checked_increment(0), 1);
        assert_eq!(checked_increment(127), 128);
        assert_eq!(checked_increment(MAX_RANK - 1), MAX_RANK);
    }

    #[test]
    #[should_panic(expected = "rank overflow")]
    fn test_checked_increment_overflow() {
        checked_increment(MAX_RANK);
    }

    #[test]
    fn test_counter_strictly_increasing() {
        let mut counter = RankCounter::new();
        let mut last = counter.next();
        for _ in 0..1000 {
            let rank = counter.next();
            assert!(rank > last);
            last = rank;
        }
        assert_eq!(counter.issued(), 1001);
    }

    #[test]
    fn test_cloned_counter_continues_independently() {
        let mut counter = RankCounter::new();
        counter.next();
        counter.next();

        let mut copy = counter.clone();
        assert_eq!(copy.next(), 2);
        assert_eq!(copy.next(), 3);
        assert_eq!(counter.next(), 2);
    }
}
