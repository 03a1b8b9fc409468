//! Structural operation counters.
//!
//! The amortized bounds of a Fibonacci heap are stated in terms of how many
//! links, cuts and marks happen over a sequence of operations. [`HeapStats`]
//! records exactly those events so tests and benchmarks can observe them.

use std::fmt;

/// Running totals of structural work performed by a heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeapStats {
    /// Trees linked under another root during consolidation.
    pub links: u64,
    /// Nodes cut from their parent, including cascading cuts.
    pub cuts: u64,
    /// Cuts triggered by a marked ancestor losing a second child.
    pub cascading_cuts: u64,
    /// Nodes that became marked.
    pub marks: u64,
    /// Consolidation passes (one per extraction that leaves roots behind).
    pub consolidations: u64,
}

impl fmt::Display for HeapStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "links: {}, cuts: {} ({} cascading), marks: {}, consolidations: {}",
            self.links, self.cuts, self.cascading_cuts, self.marks, self.consolidations
        )
    }
}
