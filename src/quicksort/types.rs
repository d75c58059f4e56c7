//! Instrumentation types for quicksort runs.

use crate::pivot::Pivot;

/// Counters collected while sorting one range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortStats {
    /// Pivot comparisons: each partition of `[start, end)` compares the
    /// pivot against the other `end - start - 1` items.
    pub comparisons: u64,

    /// Number of partition steps performed.
    pub partitions: usize,

    /// Deepest partition nesting level (the first partition is level 1).
    ///
    /// This is the depth of the recursion tree, not the native stack depth:
    /// the driver only recurses into the smaller side, so the stack stays
    /// O(log n) even when this reaches `n - 1`.
    pub max_depth: usize,
}

/// Outcome of sorting one input with one pivot strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PivotReport {
    /// Strategy used.
    pub pivot: Pivot,

    /// Counters for the sort.
    pub stats: SortStats,
}
