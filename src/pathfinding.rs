//! Dijkstra's shortest paths over any [`KeyedHeap`]
//!
//! This is the canonical consumer of a keyed heap: every discovered vertex is
//! pushed once, its tentative distance is lowered with `decrease_key` whenever
//! a cheaper path appears, and vertices are settled in extraction order.
//! Because the heap is addressed by the vertex itself, no side table of
//! handles is needed.
//!
//! # Example
//!
//! ```rust
//! use keyed_fibonacci_heap::pathfinding::{dijkstra, SearchNode};
//! use keyed_fibonacci_heap::fibonacci::FibonacciHeap;
//!
//! // Node carries its goal coordinates
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, Self::Cost)> {
//!         let step = |x, y| GridPos { x, y, goal_x: self.goal_x, goal_y: self.goal_y };
//!         vec![
//!             (step(self.x + 1, self.y), 1),
//!             (step(self.x - 1, self.y), 1),
//!             (step(self.x, self.y + 1), 1),
//!             (step(self.x, self.y - 1), 1),
//!         ]
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//! let (path, cost) = dijkstra::<_, FibonacciHeap<_, _>>(&start).unwrap();
//! assert_eq!(cost, 4); // Manhattan distance
//! assert_eq!(path.len(), 5);
//! ```

use crate::traits::KeyedHeap;
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Add;

/// Trait for types that can be used as edge and path costs.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default + fmt::Debug {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default + fmt::Debug {}

/// Trait for nodes in a search graph.
///
/// The node carries all context needed to generate its successors and to
/// recognise a goal.
pub trait SearchNode: Clone + Eq + Hash {
    /// The cost type for edge weights
    type Cost: Cost;

    /// Returns all successor nodes along with the cost to reach them.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Settled distances and the shortest-path tree found by a search.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N: SearchNode> {
    source: N,
    /// Nodes in the order they left the heap.
    settled: Vec<(N, N::Cost)>,
    distances: FxHashMap<N, N::Cost>,
    predecessors: FxHashMap<N, N>,
}

impl<N: SearchNode> ShortestPaths<N> {
    fn new(source: N) -> Self {
        ShortestPaths {
            source,
            settled: Vec::new(),
            distances: FxHashMap::default(),
            predecessors: FxHashMap::default(),
        }
    }

    /// The node the search started from.
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Final distance from the source, if `node` was settled.
    pub fn distance(&self, node: &N) -> Option<N::Cost> {
        self.distances.get(node).copied()
    }

    /// Number of settled nodes.
    pub fn len(&self) -> usize {
        self.settled.len()
    }

    /// Returns true if nothing was settled.
    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }

    /// Settled nodes with their distances, in extraction order.
    pub fn visit_order(&self) -> &[(N, N::Cost)] {
        &self.settled
    }

    /// Shortest path from the source to `target`, both inclusive.
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.distances.contains_key(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(prev) = self.predecessors.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    fn settle(&mut self, node: N, cost: N::Cost) {
        self.distances.insert(node.clone(), cost);
        self.settled.push((node, cost));
    }
}

/// Runs the search loop until `stop` accepts a settled node.
///
/// Returns the paths found so far and the node that stopped the search.
fn search<N, H>(start: &N, stop: impl Fn(&N, N::Cost) -> bool) -> (ShortestPaths<N>, Option<N>)
where
    N: SearchNode,
    H: KeyedHeap<N, N::Cost>,
{
    let mut heap = H::new();
    let mut paths = ShortestPaths::new(start.clone());
    if heap.try_push(start.clone(), N::Cost::default()).is_err() {
        return (paths, None);
    }

    while let Some((node, cost)) = heap.pop() {
        paths.settle(node.clone(), cost);
        if stop(&node, cost) {
            return (paths, Some(node));
        }

        for (next, edge_cost) in node.successors() {
            if paths.distances.contains_key(&next) {
                continue;
            }
            let candidate = cost + edge_cost;
            let improved = match heap.key_of(&next).copied() {
                None => heap.try_push(next.clone(), candidate).is_ok(),
                Some(current) if candidate < current => {
                    heap.try_decrease_key(&next, candidate).is_ok()
                }
                Some(_) => false,
            };
            if improved {
                paths.predecessors.insert(next, node.clone());
            }
        }
    }

    (paths, None)
}

/// Runs Dijkstra's algorithm from `start` until `is_goal()` returns true.
///
/// # Returns
/// - `Some((path, cost))` if a goal is reachable
/// - `None` if no goal is reachable
pub fn dijkstra<N, H>(start: &N) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    H: KeyedHeap<N, N::Cost>,
{
    let (paths, goal) = search::<N, H>(start, |node, _| node.is_goal());
    let goal = goal?;
    let cost = paths.distance(&goal)?;
    let path = paths.path_to(&goal)?;
    Some((path, cost))
}

/// Settles every node reachable from `start`, ignoring goals.
///
/// The graph reachable from `start` must be finite.
pub fn shortest_paths<N, H>(start: &N) -> ShortestPaths<N>
where
    N: SearchNode,
    H: KeyedHeap<N, N::Cost>,
{
    search::<N, H>(start, |_, _| false).0
}

/// Returns every node reachable from `start` within `max_cost`, in order of
/// increasing distance.
pub fn reachable_within<N, H>(start: &N, max_cost: N::Cost) -> Vec<(N, N::Cost)>
where
    N: SearchNode,
    H: KeyedHeap<N, N::Cost>,
{
    let (paths, _) = search::<N, H>(start, |_, cost| cost > max_cost);
    paths
        .settled
        .into_iter()
        .filter(|(_, cost)| *cost <= max_cost)
        .collect()
}
