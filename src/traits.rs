//! Common traits and errors for keyed priority queues
//!
//! A keyed priority queue addresses its entries by the element itself rather
//! than by an opaque handle. This is the shape graph algorithms want: a
//! shortest-path search pushes each discovered vertex once, lowers its
//! distance whenever a cheaper path shows up, and pops vertices in order.
//!
//! [`KeyedHeap`] is the fallible, value-returning interface used by such
//! consumers. [`FibonacciHeap`](crate::fibonacci::FibonacciHeap) additionally
//! offers fail-fast entry points that panic on precondition violations.

use std::fmt;
use std::hash::Hash;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap has no elements
    Empty,
    /// The element is already stored in the heap
    DuplicateElement,
    /// The element is not stored in the heap
    ElementNotFound,
    /// The new key would move the element away from the top of the heap
    KeyIncreased,
    /// The two heaps order their keys in opposite directions
    OrderMismatch,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::DuplicateElement => write!(f, "element is already in the heap"),
            HeapError::ElementNotFound => write!(f, "element is not in the heap"),
            HeapError::KeyIncreased => {
                write!(f, "new key is further from the top than the current key")
            }
            HeapError::OrderMismatch => write!(f, "heaps use different key orders"),
        }
    }
}

impl std::error::Error for HeapError {}

/// A priority queue whose entries are identified by unique elements
///
/// # Example
///
/// ```rust
/// use keyed_fibonacci_heap::{HeapError, KeyedHeap};
/// use keyed_fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap: FibonacciHeap<&str, u32> = KeyedHeap::new();
/// heap.try_push("a", 10).unwrap();
/// assert_eq!(heap.try_push("a", 3), Err(HeapError::DuplicateElement));
///
/// heap.try_decrease_key(&"a", 3).unwrap();
/// assert_eq!(KeyedHeap::peek(&heap), Some((&"a", &3)));
/// assert_eq!(KeyedHeap::pop(&mut heap), Some(("a", 3)));
/// ```
pub trait KeyedHeap<E: Eq + Hash, K: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if `element` is stored in the heap
    fn contains(&self, element: &E) -> bool;

    /// Returns the current key of `element`
    fn key_of(&self, element: &E) -> Option<&K>;

    /// Inserts `element` with the given key
    ///
    /// # Errors
    /// Returns `HeapError::DuplicateElement` if `element` is already present.
    fn try_push(&mut self, element: E, key: K) -> Result<(), HeapError>;

    /// Returns the top element and its key without removing it
    fn peek(&self) -> Option<(&E, &K)>;

    /// Removes and returns the top element and its key
    fn pop(&mut self) -> Option<(E, K)>;

    /// Moves `element` toward the top by replacing its key
    ///
    /// A key equal to the current one is accepted and changes nothing.
    ///
    /// # Errors
    /// - `HeapError::ElementNotFound` if `element` is not present
    /// - `HeapError::KeyIncreased` if `new_key` is further from the top
    fn try_decrease_key(&mut self, element: &E, new_key: K) -> Result<(), HeapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
        assert_eq!(
            HeapError::DuplicateElement.to_string(),
            "element is already in the heap"
        );
        assert_eq!(
            HeapError::ElementNotFound.to_string(),
            "element is not in the heap"
        );
        assert_eq!(
            HeapError::KeyIncreased.to_string(),
            "new key is further from the top than the current key"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(HeapError::OrderMismatch);
        assert_eq!(err.to_string(), "heaps use different key orders");
    }
}
