//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a priority queue with:
//! - O(1) amortized push and decrease_key
//! - O(log n) amortized extract_min
//!
//! The structure is a forest of heap-ordered trees whose roots form a circular
//! doubly linked list. Pushing only adds a one-node tree to that list; all
//! restructuring is deferred to extraction, which links roots of equal rank
//! until every root rank is distinct. Decreasing a key that breaks heap order
//! cuts the node out to the root list, and a parent that loses its second
//! child is cut as well (cascading cut).
//!
//! # Storage
//!
//! Nodes live in a [`slotmap`] arena and refer to each other by [`NodeKey`].
//! Parent handles are non-owning back-references. An identity map from element
//! to handle gives O(1) `contains` and `decrease_key` by element.
//!
//! # Example
//!
//! ```rust
//! use keyed_fibonacci_heap::fibonacci::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! heap.push("a", 5);
//! heap.push("b", 3);
//! heap.push("c", 8);
//! assert_eq!(heap.find_min(), (&"b", &3));
//!
//! heap.decrease_key(&"c", 1);
//! assert_eq!(heap.extract_min(), ("c", 1));
//! assert_eq!(heap.extract_min(), ("b", 3));
//! ```

use crate::config::{HeapConfig, HeapOrder};
use crate::node::{Arena, Node, NodeKey};
use crate::rank::{checked_decrement, checked_increment, max_rank_for, min_tree_size, Rank};
use crate::sibling_list::SiblingList;
use crate::stats::HeapStats;
use crate::traits::{HeapError, KeyedHeap};
use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::{SecondaryMap, SlotMap};
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// Panics with the operation name and the violated precondition.
#[cold]
#[track_caller]
fn precondition_failed(operation: &str, err: HeapError) -> ! {
    panic!("{operation}: {err}")
}

/// Fibonacci Heap keyed by element identity
///
/// Elements must be unique; they are cloned once on insertion to serve as
/// the identity-map key.
///
/// # Example
///
/// ```rust
/// use keyed_fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// heap.push("item", 5);
/// heap.decrease_key(&"item", 1);
/// assert_eq!(heap.find_min(), (&"item", &1));
/// ```
#[derive(Clone)]
pub struct FibonacciHeap<E, K> {
    arena: Arena<E, K>,
    roots: SiblingList,
    index: FxHashMap<E, NodeKey>,
    min: Option<NodeKey>,
    order: HeapOrder,
    stats: HeapStats,
}

impl<E: Eq + Hash + Clone, K: Ord> FibonacciHeap<E, K> {
    /// Creates an empty min-heap.
    pub fn new() -> Self {
        Self::with_config(HeapConfig::new())
    }

    /// Creates an empty heap ordered by `order`.
    pub fn with_order(order: HeapOrder) -> Self {
        Self::with_config(HeapConfig::new().order(order))
    }

    /// Creates an empty heap from a [`HeapConfig`].
    pub fn with_config(config: HeapConfig) -> Self {
        let capacity = config.get_capacity();
        Self {
            arena: SlotMap::with_capacity_and_key(capacity),
            roots: SiblingList::new(),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            min: None,
            order: config.get_order(),
            stats: HeapStats::default(),
        }
    }

    /// The direction this heap orders its keys in.
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Returns true if `element` is stored in the heap. O(1).
    pub fn contains(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    /// Returns the current key of `element`. O(1).
    pub fn key_of(&self, element: &E) -> Option<&K> {
        self.index.get(element).map(|&node| &self.arena[node].key)
    }

    /// Inserts `element` with `key`.
    ///
    /// # Panics
    /// Panics if `element` is already in the heap.
    ///
    /// # Time Complexity
    /// O(1)
    #[track_caller]
    pub fn push(&mut self, element: E, key: K) {
        if let Err(err) = self.try_push(element, key) {
            precondition_failed("push", err);
        }
    }

    /// Inserts `element` with `key`, rejecting duplicates.
    ///
    /// The new node becomes a one-node tree in the root list. No other node
    /// is touched.
    pub fn try_push(&mut self, element: E, key: K) -> Result<(), HeapError> {
        if self.index.contains_key(&element) {
            return Err(HeapError::DuplicateElement);
        }

        let node = self
            .arena
            .insert_with_key(|this| Node::new(this, element.clone(), key));
        self.index.insert(element, node);
        self.roots.push(&mut self.arena, node);
        self.offer_min(node);
        Ok(())
    }

    /// Returns the top element and its key, or `None` if empty. O(1).
    pub fn peek(&self) -> Option<(&E, &K)> {
        self.min.map(|min| {
            let node = &self.arena[min];
            (&node.element, &node.key)
        })
    }

    /// Returns the top element and its key.
    ///
    /// # Panics
    /// Panics if the heap is empty.
    #[track_caller]
    pub fn find_min(&self) -> (&E, &K) {
        match self.peek() {
            Some(top) => top,
            None => precondition_failed("find_min", HeapError::Empty),
        }
    }

    /// Removes and returns the top element and its key.
    ///
    /// # Panics
    /// Panics if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    #[track_caller]
    pub fn extract_min(&mut self) -> (E, K) {
        match self.pop() {
            Some(top) => top,
            None => precondition_failed("extract_min", HeapError::Empty),
        }
    }

    /// Removes and returns the top element and its key, or `None` if empty.
    pub fn pop(&mut self) -> Option<(E, K)> {
        let min = self.min?;

        // Promote every child of the minimum to a root.
        let children = std::mem::take(&mut self.arena[min].children);
        for child in children.keys(&self.arena) {
            let node = &mut self.arena[child];
            node.parent = None;
            node.marked = false;
        }
        self.roots.concatenate(&mut self.arena, children);

        self.roots.remove(&mut self.arena, min);
        let node = self.arena.remove(min)?;
        self.index.remove(&node.element);
        self.min = None;

        if !self.roots.is_empty() {
            self.consolidate();
        }

        Some((node.element, node.key))
    }

    /// Moves `element` toward the top by replacing its key.
    ///
    /// # Panics
    /// Panics if `element` is absent or `new_key` is further from the top
    /// than the current key.
    ///
    /// # Time Complexity
    /// O(1) amortized
    #[track_caller]
    pub fn decrease_key(&mut self, element: &E, new_key: K) {
        if let Err(err) = self.try_decrease_key(element, new_key) {
            precondition_failed("decrease_key", err);
        }
    }

    /// Moves `element` toward the top by replacing its key.
    ///
    /// An equal key is a no-op. If the node still respects its parent the key
    /// is updated in place; otherwise the node is cut to the root list and
    /// its ancestors are cascaded.
    pub fn try_decrease_key(&mut self, element: &E, new_key: K) -> Result<(), HeapError> {
        let node = *self.index.get(element).ok_or(HeapError::ElementNotFound)?;

        match self.order.compare(&new_key, &self.arena[node].key) {
            Ordering::Greater => return Err(HeapError::KeyIncreased),
            Ordering::Equal => return Ok(()),
            Ordering::Less => {}
        }
        self.arena[node].key = new_key;

        if let Some(parent) = self.arena[node].parent {
            if self.precedes(node, parent) {
                self.cut(node);
                self.cascading_cut(parent);
            }
        }

        // A child that kept its place cannot beat the minimum, so only roots
        // can win here.
        self.offer_min(node);
        Ok(())
    }

    /// Moves every element of `other` into this heap.
    ///
    /// Tree shapes, ranks and marks are preserved; the two root lists are
    /// spliced together. On error `other` is dropped and `self` is unchanged.
    ///
    /// # Errors
    /// - `HeapError::OrderMismatch` if the heaps order keys differently
    /// - `HeapError::DuplicateElement` if any element is in both heaps
    ///
    /// # Time Complexity
    /// O(m) where m is `other.len()`, since nodes move between arenas.
    pub fn merge(&mut self, other: Self) -> Result<(), HeapError> {
        if self.order != other.order {
            return Err(HeapError::OrderMismatch);
        }
        if other.index.keys().any(|element| self.index.contains_key(element)) {
            return Err(HeapError::DuplicateElement);
        }

        let FibonacciHeap {
            arena, roots, min, ..
        } = other;

        let mut moved: SecondaryMap<NodeKey, NodeKey> = SecondaryMap::with_capacity(arena.len());
        for (old, node) in arena {
            let element = node.element.clone();
            let new = self.arena.insert(node);
            self.index.insert(element, new);
            moved.insert(old, new);
        }

        let relocate = |key: NodeKey| moved[key];
        for &new in moved.values() {
            let node = &mut self.arena[new];
            node.prev = relocate(node.prev);
            node.next = relocate(node.next);
            node.parent = node.parent.map(relocate);
            node.children = node.children.remap(relocate);
        }

        self.roots.concatenate(&mut self.arena, roots.remap(relocate));
        if let Some(other_min) = min {
            self.offer_min(relocate(other_min));
        }
        Ok(())
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.index.clear();
        self.roots = SiblingList::new();
        self.min = None;
    }

    /// Iterates over all `(element, key)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, &K)> + '_ {
        self.arena.values().map(|node| (&node.element, &node.key))
    }

    /// Drains the heap in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<(E, K)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    /// Structural work counters accumulated since creation or the last reset.
    pub fn stats(&self) -> HeapStats {
        self.stats
    }

    /// Zeroes the structural work counters.
    pub fn reset_stats(&mut self) {
        self.stats = HeapStats::default();
    }

    /// Number of trees in the root list.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Ranks of the roots in root-list order.
    pub fn root_ranks(&self) -> Vec<Rank> {
        self.roots
            .iter(&self.arena)
            .map(|root| self.arena[root].rank)
            .collect()
    }

    /// Returns true if `element` is stored and marked.
    pub fn is_marked(&self, element: &E) -> bool {
        self.index
            .get(element)
            .is_some_and(|&node| self.arena[node].marked)
    }

    /// Verifies that no child comes before its parent in the heap order.
    pub fn verify_heap_property(&self) -> bool {
        self.arena.values().all(|node| match node.parent {
            Some(parent) => !self.order.precedes(&node.key, &self.arena[parent].key),
            None => true,
        })
    }

    /// Verifies that no two roots share a rank.
    ///
    /// This holds right after an extraction; pushes and cuts may add roots of
    /// any rank until the next consolidation.
    pub fn verify_unique_root_ranks(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.roots
            .iter(&self.arena)
            .all(|root| seen.insert(self.arena[root].rank))
    }

    /// Verifies that every node of rank `k` roots at least `F(k + 2)` nodes.
    ///
    /// This is the bound that keeps ranks logarithmic; cascading cuts exist
    /// to preserve it.
    pub fn verify_rank_bound(&self) -> bool {
        // Parents precede children in preorder, so a reverse sweep sees every
        // subtree complete before its root.
        let mut preorder = Vec::with_capacity(self.len());
        let mut stack = self.roots.keys(&self.arena);
        while let Some(key) = stack.pop() {
            preorder.push(key);
            stack.extend(self.arena[key].children.iter(&self.arena));
        }

        let mut sizes: SecondaryMap<NodeKey, usize> = SecondaryMap::with_capacity(preorder.len());
        for &key in preorder.iter().rev() {
            let node = &self.arena[key];
            let size = 1 + node
                .children
                .iter(&self.arena)
                .map(|child| sizes.get(child).copied().unwrap_or(0))
                .sum::<usize>();
            if size < min_tree_size(node.rank) {
                return false;
            }
            sizes.insert(key, size);
        }
        true
    }

    /// Verifies links, ranks, marks, the identity map and the cached minimum.
    pub fn verify_structure(&self) -> bool {
        if self.index.len() != self.arena.len() {
            return false;
        }
        let index_consistent = self.index.iter().all(|(element, &node)| {
            self.arena
                .get(node)
                .is_some_and(|n| n.element == *element)
        });
        if !index_consistent {
            return false;
        }

        match self.min {
            None => {
                if !self.roots.is_empty() || !self.arena.is_empty() {
                    return false;
                }
            }
            Some(min) => {
                if !self.arena[min].is_root() || !self.roots.contains(&self.arena, min) {
                    return false;
                }
                let beaten = self
                    .roots
                    .iter(&self.arena)
                    .any(|root| self.precedes(root, min));
                if beaten {
                    return false;
                }
            }
        }

        if !self.verify_ring(&self.roots, None) {
            return false;
        }

        // Walk every tree; each node must be reached exactly once.
        let mut visited = 0;
        let mut stack = self.roots.keys(&self.arena);
        while let Some(key) = stack.pop() {
            visited += 1;
            let node = &self.arena[key];
            if node.children.len() != usize::from(node.rank) {
                return false;
            }
            if !self.verify_ring(&node.children, Some(key)) {
                return false;
            }
            stack.extend(node.children.iter(&self.arena));
        }
        visited == self.arena.len()
    }

    /// Checks ring links and parent handles of one sibling list.
    fn verify_ring(&self, list: &SiblingList, parent: Option<NodeKey>) -> bool {
        list.iter(&self.arena).all(|key| {
            let node = &self.arena[key];
            let linked = self.arena[node.next].prev == key && self.arena[node.prev].next == key;
            let roots_unmarked = parent.is_some() || !node.marked;
            linked && roots_unmarked && node.parent == parent
        })
    }

    /// Returns true if node `a` belongs strictly above node `b`.
    #[inline]
    fn precedes(&self, a: NodeKey, b: NodeKey) -> bool {
        self.order.precedes(&self.arena[a].key, &self.arena[b].key)
    }

    /// Makes `node` the cached minimum if it beats the current one.
    #[inline]
    fn offer_min(&mut self, node: NodeKey) {
        match self.min {
            Some(min) if !self.precedes(node, min) => {}
            _ => self.min = Some(node),
        }
    }

    /// Links roots of equal rank until all root ranks differ, then rescans
    /// the root list for the minimum.
    fn consolidate(&mut self) {
        let roots = self.roots.keys(&self.arena);
        let roots_before = roots.len();

        let mut by_rank: SmallVec<[Option<NodeKey>; 64]> = smallvec![None; max_rank_for(self.len())];

        for root in roots {
            let mut x = root;
            let mut rank = usize::from(self.arena[x].rank);
            loop {
                if rank >= by_rank.len() {
                    by_rank.resize(rank + 1, None);
                }
                let Some(mut y) = by_rank[rank].take() else {
                    break;
                };
                if self.precedes(y, x) {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                rank += 1;
            }
            by_rank[rank] = Some(x);
        }

        self.min = self.roots.minimum(&self.arena, self.order);
        self.stats.consolidations += 1;
        debug!(
            roots_before,
            roots_after = self.roots.len(),
            max_rank = by_rank.len().saturating_sub(1),
            "consolidated root list"
        );
    }

    /// Makes root `child` a child of root `parent`.
    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        self.roots.remove(&mut self.arena, child);

        let mut children = self.arena[parent].children;
        children.push(&mut self.arena, child);
        let parent_node = &mut self.arena[parent];
        parent_node.children = children;
        parent_node.rank = checked_increment(parent_node.rank);
        let rank = parent_node.rank;

        let child_node = &mut self.arena[child];
        child_node.parent = Some(parent);
        child_node.marked = false;

        self.stats.links += 1;
        trace!(?child, ?parent, rank, "linked tree");
    }

    /// Detaches `node` from its parent and adds it to the root list.
    fn cut(&mut self, node: NodeKey) {
        let Some(parent) = self.arena[node].parent else {
            return;
        };

        let mut siblings = self.arena[parent].children;
        siblings.remove(&mut self.arena, node);
        let parent_node = &mut self.arena[parent];
        parent_node.children = siblings;
        parent_node.rank = checked_decrement(parent_node.rank);

        let cut_node = &mut self.arena[node];
        cut_node.parent = None;
        cut_node.marked = false;
        self.roots.push(&mut self.arena, node);

        self.stats.cuts += 1;
        trace!(?node, ?parent, "cut node to root list");
    }

    /// Walks up from a node that just lost a child, marking the first
    /// unmarked non-root and cutting every marked one on the way.
    fn cascading_cut(&mut self, start: NodeKey) {
        let mut current = start;
        while let Some(parent) = self.arena[current].parent {
            if !self.arena[current].marked {
                self.arena[current].marked = true;
                self.stats.marks += 1;
                return;
            }
            self.cut(current);
            self.stats.cascading_cuts += 1;
            current = parent;
        }
    }
}

impl<E: Eq + Hash + Clone, K: Ord> Default for FibonacciHeap<E, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Eq + Hash + Clone + fmt::Debug, K: Ord + fmt::Debug> fmt::Debug for FibonacciHeap<E, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.len())
            .field("order", &self.order)
            .field("roots", &self.roots.len())
            .field("top", &self.peek())
            .finish()
    }
}

impl<E: Eq + Hash + Clone, K: Ord> Extend<(E, K)> for FibonacciHeap<E, K> {
    /// Pushes every pair; panics on a duplicate element like [`FibonacciHeap::push`].
    fn extend<I: IntoIterator<Item = (E, K)>>(&mut self, iter: I) {
        for (element, key) in iter {
            self.push(element, key);
        }
    }
}

impl<E: Eq + Hash + Clone, K: Ord> FromIterator<(E, K)> for FibonacciHeap<E, K> {
    fn from_iter<I: IntoIterator<Item = (E, K)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<E: Eq + Hash + Clone, K: Ord> KeyedHeap<E, K> for FibonacciHeap<E, K> {
    fn new() -> Self {
        FibonacciHeap::new()
    }

    fn is_empty(&self) -> bool {
        FibonacciHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        FibonacciHeap::len(self)
    }

    fn contains(&self, element: &E) -> bool {
        FibonacciHeap::contains(self, element)
    }

    fn key_of(&self, element: &E) -> Option<&K> {
        FibonacciHeap::key_of(self, element)
    }

    fn try_push(&mut self, element: E, key: K) -> Result<(), HeapError> {
        FibonacciHeap::try_push(self, element, key)
    }

    fn peek(&self) -> Option<(&E, &K)> {
        FibonacciHeap::peek(self)
    }

    fn pop(&mut self) -> Option<(E, K)> {
        FibonacciHeap::pop(self)
    }

    fn try_decrease_key(&mut self, element: &E, new_key: K) -> Result<(), HeapError> {
        FibonacciHeap::try_decrease_key(self, element, new_key)
    }
}
