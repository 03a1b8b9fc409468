//! Circular doubly linked sibling lists over the node arena.
//!
//! A [`SiblingList`] is just a head handle and a length; the ring itself is
//! threaded through the `prev`/`next` fields of the nodes. The same type is
//! used for the heap's root list and for every node's child list.
//!
//! # Circular layout
//!
//! - A single node points to itself (both `next` and `prev`)
//! - There is no tail pointer: the tail is `head.prev`
//! - Splicing two rings together is O(1)
//! - Iteration wraps around, so it is bounded by the stored length
//!
//! Every operation takes the arena explicitly. Removing a node that is not in
//! the list is a caller bug and is caught by debug assertions, which walk the
//! ring and so cost O(len) in debug builds.

use crate::config::HeapOrder;
use crate::node::{Arena, NodeKey};

/// A ring of sibling nodes identified by its head.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SiblingList {
    head: Option<NodeKey>,
    len: usize,
}

impl SiblingList {
    pub(crate) const fn new() -> Self {
        SiblingList { head: None, len: 0 }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The representative node of the ring, if any.
    #[cfg(test)]
    pub(crate) fn head(&self) -> Option<NodeKey> {
        self.head
    }

    /// Links an isolated node into the ring, just before the head.
    pub(crate) fn push<E, K>(&mut self, arena: &mut Arena<E, K>, node: NodeKey) {
        debug_assert!(
            arena[node].next == node && arena[node].prev == node,
            "node is already linked into a ring"
        );

        match self.head {
            None => self.head = Some(node),
            Some(head) => {
                let tail = arena[head].prev;
                arena[node].prev = tail;
                arena[node].next = head;
                arena[tail].next = node;
                arena[head].prev = node;
            }
        }
        self.len += 1;
    }

    /// Unlinks `node` from the ring and leaves it isolated.
    ///
    /// If `node` was the head, the head advances to its successor, or the
    /// list becomes empty.
    pub(crate) fn remove<E, K>(&mut self, arena: &mut Arena<E, K>, node: NodeKey) {
        let next = arena[node].next;
        let prev = arena[node].prev;

        debug_assert!(self.head.is_some(), "remove from an empty list");
        debug_assert!(self.contains(arena, node), "node is not in this list");

        if next == node {
            self.head = None;
        } else {
            arena[prev].next = next;
            arena[next].prev = prev;
            if self.head == Some(node) {
                self.head = Some(next);
            }
        }

        arena[node].next = node;
        arena[node].prev = node;
        self.len -= 1;
    }

    /// Splices every node of `other` into this ring in O(1).
    ///
    /// ```text
    /// Before:  ... <-> a_prev <-> a <-> ...      ... <-> b_prev <-> b <-> ...
    /// After:   ... <-> a_prev <-> b <-> ... <-> b_prev <-> a <-> ...
    /// ```
    pub(crate) fn concatenate<E, K>(&mut self, arena: &mut Arena<E, K>, other: SiblingList) {
        match (self.head, other.head) {
            (_, None) => {}
            (None, Some(_)) => *self = other,
            (Some(a), Some(b)) => {
                let a_prev = arena[a].prev;
                let b_prev = arena[b].prev;

                arena[a_prev].next = b;
                arena[b].prev = a_prev;

                arena[b_prev].next = a;
                arena[a].prev = b_prev;

                self.len += other.len;
            }
        }
    }

    /// Scans the ring for the node whose key comes first in `order`.
    ///
    /// Ties keep the earliest node in ring order. O(len).
    pub(crate) fn minimum<E, K: Ord>(&self, arena: &Arena<E, K>, order: HeapOrder) -> Option<NodeKey> {
        let mut iter = self.iter(arena);
        let mut best = iter.next()?;
        for candidate in iter {
            if order.precedes(&arena[candidate].key, &arena[best].key) {
                best = candidate;
            }
        }
        Some(best)
    }

    /// Returns true if `node` is a member of this ring. O(len).
    pub(crate) fn contains<E, K>(&self, arena: &Arena<E, K>, node: NodeKey) -> bool {
        self.iter(arena).any(|k| k == node)
    }

    /// Iterates the ring starting at the head.
    pub(crate) fn iter<'a, E, K>(&self, arena: &'a Arena<E, K>) -> Iter<'a, E, K> {
        Iter {
            arena,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Rewrites the head handle after the ring's nodes moved to another arena.
    pub(crate) fn remap(self, f: impl Fn(NodeKey) -> NodeKey) -> Self {
        SiblingList {
            head: self.head.map(f),
            len: self.len,
        }
    }

    /// Snapshot of the members in ring order, for loops that relink nodes.
    pub(crate) fn keys<E, K>(&self, arena: &Arena<E, K>) -> Vec<NodeKey> {
        self.iter(arena).collect()
    }
}

/// Iterator over the handles of one ring.
pub(crate) struct Iter<'a, E, K> {
    arena: &'a Arena<E, K>,
    next: Option<NodeKey>,
    remaining: usize,
}

impl<E, K> Iterator for Iter<'_, E, K> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = Some(self.arena[current].next);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use slotmap::SlotMap;

    fn arena_with(keys: &[i32]) -> (Arena<i32, i32>, Vec<NodeKey>) {
        let mut arena: Arena<i32, i32> = SlotMap::with_key();
        let handles = keys
            .iter()
            .map(|&k| arena.insert_with_key(|this| Node::new(this, k, k)))
            .collect();
        (arena, handles)
    }

    fn ring_values(list: &SiblingList, arena: &Arena<i32, i32>) -> Vec<i32> {
        list.iter(arena).map(|k| arena[k].key).collect()
    }

    #[test]
    fn test_push_single_is_circular() {
        let (mut arena, h) = arena_with(&[1]);
        let mut list = SiblingList::new();
        list.push(&mut arena, h[0]);

        assert_eq!(list.len(), 1);
        assert_eq!(list.head(), Some(h[0]));
        assert_eq!(arena[h[0]].next, h[0]);
        assert_eq!(arena[h[0]].prev, h[0]);
    }

    #[test]
    fn test_push_three_nodes() {
        let (mut arena, h) = arena_with(&[1, 2, 3]);
        let mut list = SiblingList::new();
        for &k in &h {
            list.push(&mut arena, k);
        }

        // 1 <-> 2 <-> 3 <-> 1
        assert_eq!(arena[h[0]].next, h[1]);
        assert_eq!(arena[h[1]].next, h[2]);
        assert_eq!(arena[h[2]].next, h[0]);
        assert_eq!(arena[h[0]].prev, h[2]);
        assert_eq!(ring_values(&list, &arena), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_middle() {
        let (mut arena, h) = arena_with(&[1, 2, 3]);
        let mut list = SiblingList::new();
        for &k in &h {
            list.push(&mut arena, k);
        }

        list.remove(&mut arena, h[1]);
        assert_eq!(list.len(), 2);
        assert_eq!(ring_values(&list, &arena), vec![1, 3]);
        assert_eq!(arena[h[1]].next, h[1]);
        assert_eq!(arena[h[1]].prev, h[1]);
    }

    #[test]
    fn test_remove_head_advances() {
        let (mut arena, h) = arena_with(&[1, 2]);
        let mut list = SiblingList::new();
        list.push(&mut arena, h[0]);
        list.push(&mut arena, h[1]);

        list.remove(&mut arena, h[0]);
        assert_eq!(list.head(), Some(h[1]));
        assert_eq!(arena[h[1]].next, h[1]);

        list.remove(&mut arena, h[1]);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "node is not in this list")]
    fn test_remove_absent_node_panics() {
        let (mut arena, h) = arena_with(&[1, 2]);
        let mut list = SiblingList::new();
        list.push(&mut arena, h[0]);
        list.remove(&mut arena, h[1]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "node is not in this list")]
    fn test_remove_node_of_other_ring_panics() {
        let (mut arena, h) = arena_with(&[1, 2, 3]);
        let mut a = SiblingList::new();
        let mut b = SiblingList::new();
        a.push(&mut arena, h[0]);
        b.push(&mut arena, h[1]);
        b.push(&mut arena, h[2]);
        a.remove(&mut arena, h[1]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "remove from an empty list")]
    fn test_remove_from_empty_panics() {
        let (mut arena, h) = arena_with(&[1]);
        let mut list = SiblingList::new();
        list.remove(&mut arena, h[0]);
    }

    #[test]
    fn test_concatenate() {
        let (mut arena, h) = arena_with(&[1, 2, 3, 4]);
        let mut a = SiblingList::new();
        let mut b = SiblingList::new();
        a.push(&mut arena, h[0]);
        a.push(&mut arena, h[1]);
        b.push(&mut arena, h[2]);
        b.push(&mut arena, h[3]);

        a.concatenate(&mut arena, b);
        assert_eq!(a.len(), 4);
        assert_eq!(ring_values(&a, &arena), vec![1, 2, 3, 4]);
        assert_eq!(arena[h[3]].next, h[0]);
        assert_eq!(arena[h[0]].prev, h[3]);
    }

    #[test]
    fn test_concatenate_with_empty() {
        let (mut arena, h) = arena_with(&[1]);
        let mut a = SiblingList::new();
        let mut b = SiblingList::new();
        b.push(&mut arena, h[0]);

        a.concatenate(&mut arena, b);
        assert_eq!(a, b);

        a.concatenate(&mut arena, SiblingList::new());
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_minimum() {
        let (mut arena, h) = arena_with(&[5, 2, 8, 2]);
        let mut list = SiblingList::new();
        assert_eq!(list.minimum(&arena, HeapOrder::Min), None);

        for &k in &h {
            list.push(&mut arena, k);
        }
        // First of the tied minima wins.
        assert_eq!(list.minimum(&arena, HeapOrder::Min), Some(h[1]));
        assert_eq!(list.minimum(&arena, HeapOrder::Max), Some(h[2]));
    }
}
