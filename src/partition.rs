//! Three-way in-place partitioning.
//!
//! Rearranges a range `[start, end)` around a pivot value into three
//! contiguous zones:
//!
//! ```text
//! [    <    ][   ==   ][    >    ]
//! start      lo     hi           end
//! ```
//!
//! All items equal to the pivot end up in `[lo, hi]`, so runs of duplicate
//! keys are settled in one pass and never partitioned again. This keeps
//! quicksort linear-per-level on inputs with few distinct values.
//!
//! # Algorithm
//!
//! 1. Ask the strategy for a pivot index and swap it to `start`.
//! 2. Scan `(start, end)` once. Items `<= pivot` are swapped into the
//!    "less" zone; if such an item equals the pivot it is swapped again into
//!    an "equal" zone that grows from `start`:
//!
//!    ```text
//!    [  ==  ][  <  ][  >  ][   ?   ]
//!    start  eq     lt     j         end
//!    ```
//!
//! 3. Swap the equal zone from the front to sit right after the less zone.
//!
//! # Complexity
//! O(end - start) time excluding the strategy call, O(1) space

use crate::error::{Error, Result};
use crate::pivot::PivotStrategy;
use crate::range::check_range;
use std::ops::Range;

/// Bounds of the equal-to-pivot zone after a partition.
///
/// Everything in `[start, lo)` is less than the pivot, everything in
/// `[lo, hi]` equals it, and everything in `(hi, end)` is greater.
/// Always `start <= lo <= hi < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionResult {
    /// First index holding the pivot value.
    pub lo: usize,
    /// Last index holding the pivot value (inclusive).
    pub hi: usize,
}

impl PartitionResult {
    /// Number of items equal to the pivot.
    pub fn equal_len(&self) -> usize {
        self.hi - self.lo + 1
    }
}

/// Partitions `seq[range]` in place around a pivot chosen by `strategy`.
///
/// A single-element range returns `(start, start)` without consulting the
/// strategy.
///
/// # Errors
///
/// - [`Error::InvalidRange`] if the range does not fit in `seq`.
/// - [`Error::EmptyRange`] if the range has no elements.
///
/// Both are reported before anything is moved.
///
/// # Examples
///
/// ```
/// use u_partsel::partition;
/// use u_partsel::pivot::FirstPivot;
///
/// let mut data = vec![5, 5, 5, 5];
/// let part = partition(&mut data, 0..4, &mut FirstPivot).unwrap();
/// assert_eq!((part.lo, part.hi), (0, 3));
/// ```
pub fn partition<T: Ord, S: PivotStrategy>(
    seq: &mut [T],
    range: Range<usize>,
    strategy: &mut S,
) -> Result<PartitionResult> {
    check_range(&range, seq.len())?;
    if range.is_empty() {
        return Err(Error::EmptyRange { start: range.start });
    }
    Ok(partition_unchecked(seq, range.start, range.end, strategy))
}

/// Partition without range validation. Requires `start < end <= seq.len()`.
pub(crate) fn partition_unchecked<T: Ord, S: PivotStrategy>(
    seq: &mut [T],
    start: usize,
    end: usize,
    strategy: &mut S,
) -> PartitionResult {
    debug_assert!(start < end && end <= seq.len());

    if end - start == 1 {
        return PartitionResult { lo: start, hi: start };
    }

    let pivot_index = strategy.choose(seq, start, end);
    assert!(
        (start..end).contains(&pivot_index),
        "pivot strategy returned {pivot_index}, outside {start}..{end}"
    );
    seq.swap(start, pivot_index);

    // seq[start] holds the pivot value for the whole scan: the equal zone
    // only grows rightwards from it, so no swap below touches `start`.
    let mut eq = start;
    let mut lt = start;
    for j in start + 1..end {
        if seq[j] <= seq[start] {
            lt += 1;
            seq.swap(lt, j);
            if seq[lt] == seq[start] {
                eq += 1;
                seq.swap(eq, lt);
            }
        }
    }

    let eq_len = eq - start + 1;
    let lt_len = lt - eq;
    for off in 0..eq_len.min(lt_len) {
        seq.swap(start + off, lt - off);
    }

    let result = PartitionResult {
        lo: lt + 1 - eq_len,
        hi: lt,
    };
    log::trace!(
        "partition {start}..{end}: pivot at {pivot_index}, equal zone {}..={}",
        result.lo,
        result.hi
    );
    result
}
