//! Stress tests that push FibonacciHeap through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use keyed_fibonacci_heap::{FibonacciHeap, HeapOrder, KeyedHeap};

/// Test massive numbers of inserts and pops
#[test]
fn test_massive_operations() {
    let mut heap = FibonacciHeap::new();

    for i in 0..10_000 {
        heap.push(i, i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Some((i, i)));
    }
    assert!(heap.is_empty());
}

/// Test many decrease_key operations
#[test]
fn test_many_decrease_keys() {
    let mut heap = FibonacciHeap::new();
    for i in 0..500 {
        heap.push(i, 10_000 + i);
    }
    // Build deep trees first so decreases cut.
    heap.push(-1, -1);
    assert_eq!(heap.extract_min(), (-1, -1));

    for i in (0..500).rev() {
        heap.decrease_key(&i, i);
    }
    assert!(heap.stats().cuts > 0);
    assert!(heap.verify_structure());

    for i in 0..500 {
        assert_eq!(heap.pop(), Some((i, i)));
    }
}

/// Test alternating insert and pop
#[test]
fn test_alternating_ops() {
    let mut heap = FibonacciHeap::new();

    for i in 0..2_000 {
        heap.push(i * 2, i);
        heap.push(i * 2 + 1, i + 1_000_000);
        let (_, key) = heap.extract_min();
        assert_eq!(key, i);
    }

    assert_eq!(heap.len(), 2_000);
    assert!(heap.verify_structure());
    let keys: Vec<i32> = heap.into_sorted_vec().into_iter().map(|(_, k)| k).collect();
    assert_eq!(keys, (1_000_000..1_002_000).collect::<Vec<_>>());
}

/// Test merge with large heaps
#[test]
fn test_large_merge() {
    let mut heap1 = FibonacciHeap::new();
    let mut heap2 = FibonacciHeap::new();

    for i in 0..5_000 {
        heap1.push(i * 2, i);
        heap2.push(i * 2 + 1, i + 1_000);
    }
    heap1.extract_min();
    heap2.extract_min();

    heap1.merge(heap2).unwrap();
    assert_eq!(heap1.len(), 9_998);
    assert!(heap1.verify_structure());

    let mut last = i32::MIN;
    while let Some((_, key)) = heap1.pop() {
        assert!(key >= last);
        last = key;
    }
}

/// Decrease a pseudo-random element to just below the current top, over and over
#[test]
fn test_repeated_decrease_to_top() {
    let mut heap = FibonacciHeap::new();
    for i in 0..3_000u64 {
        heap.push(i, 1_000_000 + i);
    }
    heap.extract_min();

    let mut state = 0x2545_f491_4f6c_dd1du64;
    for round in 0..1_000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let element = 1 + state % 2_999;
        let Some(&key) = heap.key_of(&element) else {
            continue;
        };
        let top = *heap.find_min().1;
        heap.decrease_key(&element, top.min(key).saturating_sub(1));
        assert_eq!(heap.find_min().0, &element);

        if round % 3 == 0 {
            heap.extract_min();
        }
    }

    assert!(heap.verify_structure());
    assert!(heap.verify_heap_property());
    assert!(heap.verify_rank_bound());
}

/// Keys that all compare equal still drain completely
#[test]
fn test_duplicate_keys() {
    let mut heap = FibonacciHeap::new();
    for i in 0..1_000 {
        heap.push(i, 7);
    }
    let mut drained: Vec<i32> = std::iter::from_fn(|| heap.pop().map(|(e, _)| e)).collect();
    drained.sort_unstable();
    assert_eq!(drained, (0..1_000).collect::<Vec<_>>());
}

/// Max-order heap under the generic trait
#[test]
fn test_max_order_through_trait() {
    fn drain<H: KeyedHeap<u32, u32>>(heap: &mut H) -> Vec<u32> {
        std::iter::from_fn(|| heap.pop().map(|(_, k)| k)).collect()
    }

    let mut heap = FibonacciHeap::with_order(HeapOrder::Max);
    for i in 0..1_000u32 {
        heap.push(i, (i * 7919) % 1_000);
    }
    let keys = drain(&mut heap);
    assert_eq!(keys, (0..1_000).rev().collect::<Vec<_>>());
}

/// Test with very large keys
#[test]
fn test_large_keys() {
    let mut heap = FibonacciHeap::new();
    heap.push(1, 1_000_000_000_000i64);
    heap.push(2, -1_000_000_000_000i64);
    heap.push(3, i64::MAX);
    heap.push(4, i64::MIN);

    assert_eq!(heap.pop(), Some((4, i64::MIN)));
    assert_eq!(heap.pop(), Some((2, -1_000_000_000_000)));
    assert_eq!(heap.pop(), Some((1, 1_000_000_000_000)));
    assert_eq!(heap.pop(), Some((3, i64::MAX)));
}
