//! Rank (degree) type for Fibonacci heap nodes.
//!
//! A node's rank is the number of its direct children. The rank bound of a
//! Fibonacci heap guarantees that a node of rank `k` roots a tree with at
//! least `F(k + 2)` nodes, so the largest possible rank is about
//! `log_φ(n) ≈ 1.44 · log₂(n)`. Even a heap filling a 64-bit address space
//! stays below rank 93, which is why a `u8` is enough.

/// Type alias for node rank/degree.
pub type Rank = u8;

/// Maximum representable rank.
pub const MAX_RANK: Rank = u8::MAX;

/// Upper bound on the rank of any root in a heap holding `len` nodes.
///
/// Used to size the degree table during consolidation. The bound is
/// `⌊log_φ(len)⌋ + 2`, computed with integer Fibonacci numbers so no floating
/// point is involved.
///
/// # Example
///
/// ```rust
/// use keyed_fibonacci_heap::rank::max_rank_for;
///
/// assert_eq!(max_rank_for(0), 1);
/// assert!(max_rank_for(1_000_000) < 32);
/// ```
pub fn max_rank_for(len: usize) -> usize {
    // Smallest k with F(k + 2) > len bounds every rank by k - 1.
    let (mut a, mut b): (usize, usize) = (1, 1);
    let mut k = 0;
    while b <= len {
        k += 1;
        match a.checked_add(b) {
            Some(next) => {
                a = b;
                b = next;
            }
            None => break,
        }
    }
    k + 1
}

/// Fewest nodes a tree rooted at a node of rank `rank` may hold: `F(rank + 2)`.
///
/// Saturates at `usize::MAX` for ranks no real heap can reach.
///
/// # Example
///
/// ```rust
/// use keyed_fibonacci_heap::rank::min_tree_size;
///
/// assert_eq!(min_tree_size(0), 1);
/// assert_eq!(min_tree_size(3), 5);
/// ```
pub fn min_tree_size(rank: Rank) -> usize {
    // F(1) = F(2) = 1
    let (mut a, mut b): (usize, usize) = (1, 1);
    for _ in 0..rank {
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    b
}

/// Increment a rank, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`, which would mean the rank bound was broken.
///
/// # Example
///
/// ```rust
/// use keyed_fibonacci_heap::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1)
        .expect("rank overflow: a Fibonacci heap root cannot have 256 children")
}

/// Decrement a rank after a child was cut.
///
/// A parent that loses a child always had at least one, so reaching below
/// zero is a structural bug. Debug builds assert; release builds saturate.
///
/// # Example
///
/// ```rust
/// use keyed_fibonacci_heap::rank::{checked_decrement, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_decrement(rank), 4);
/// ```
#[inline]
pub fn checked_decrement(rank: Rank) -> Rank {
    debug_assert!(rank > 0, "rank underflow: cut from a childless node");
    rank.saturating_sub(1)
}
