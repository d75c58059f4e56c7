//! Quicksort driver.
//!
//! # Algorithm
//!
//! 1. Ranges shorter than 2 are sorted; stop.
//! 2. Partition `[start, end)` into `[start, lo)`, `[lo, hi]`, `(hi, end)`.
//! 3. Sort the smaller outer zone recursively, then continue the loop on
//!    the larger one.
//!
//! Recursing only into the smaller side bounds the native stack at
//! O(log n) frames for every strategy. The partition tree itself can still
//! be n levels deep (first-index pivot on sorted input); that depth is
//! reported in [`SortStats::max_depth`].

use super::config::QuicksortConfig;
use super::types::{PivotReport, SortStats};
use crate::error::Result;
use crate::partition::partition_unchecked;
use crate::pivot::{MedianOfThree, Pivot, PivotStrategy};
use crate::range::check_range;
use std::ops::Range;

/// Sorts `seq` in place with the median-of-three strategy.
///
/// # Examples
///
/// ```
/// let mut data = vec![3, 5, 7, 1, 9, 4, 6, 8];
/// u_partsel::sort(&mut data);
/// assert_eq!(data, vec![1, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn sort<T: Ord>(seq: &mut [T]) {
    sort_with(seq, &mut MedianOfThree);
}

/// Sorts `seq` in place with the given pivot strategy.
pub fn sort_with<T: Ord, S: PivotStrategy>(seq: &mut [T], strategy: &mut S) -> SortStats {
    let len = seq.len();
    let mut stats = SortStats::default();
    quicksort(seq, 0, len, 0, strategy, &mut stats);
    stats
}

/// Sorts `seq[range]` in place, leaving items outside the range untouched.
///
/// # Errors
///
/// [`Error::InvalidRange`](crate::Error::InvalidRange) if the range does not
/// fit in `seq`; nothing is moved in that case.
pub fn sort_range<T: Ord, S: PivotStrategy>(
    seq: &mut [T],
    range: Range<usize>,
    strategy: &mut S,
) -> Result<SortStats> {
    check_range(&range, seq.len())?;
    let mut stats = SortStats::default();
    quicksort(seq, range.start, range.end, 0, strategy, &mut stats);
    Ok(stats)
}

fn quicksort<T: Ord, S: PivotStrategy>(
    seq: &mut [T],
    mut start: usize,
    mut end: usize,
    mut depth: usize,
    strategy: &mut S,
    stats: &mut SortStats,
) {
    while end - start >= 2 {
        depth += 1;
        stats.partitions += 1;
        stats.comparisons += (end - start - 1) as u64;
        stats.max_depth = stats.max_depth.max(depth);

        let part = partition_unchecked(seq, start, end, strategy);
        let (less, greater) = (start..part.lo, part.hi + 1..end);

        if less.len() <= greater.len() {
            quicksort(seq, less.start, less.end, depth, strategy, stats);
            (start, end) = (greater.start, greater.end);
        } else {
            quicksort(seq, greater.start, greater.end, depth, strategy, stats);
            (start, end) = (less.start, less.end);
        }
    }
}

/// Runs quicksort from a [`QuicksortConfig`].
pub struct QuicksortRunner;

impl QuicksortRunner {
    /// Sorts the whole of `seq`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partsel::pivot::Pivot;
    /// use u_partsel::quicksort::{QuicksortConfig, QuicksortRunner};
    ///
    /// let mut data: Vec<u32> = (0..100).rev().collect();
    /// let config = QuicksortConfig::default().with_pivot(Pivot::Random).with_seed(1);
    /// let stats = QuicksortRunner::run(&mut data, &config);
    /// assert!(data.windows(2).all(|w| w[0] <= w[1]));
    /// assert!(stats.partitions > 0);
    /// ```
    pub fn run<T: Ord>(seq: &mut [T], config: &QuicksortConfig) -> SortStats {
        let mut strategy = config.pivot.build(config.seed);
        let stats = sort_with(seq, &mut strategy);
        log::debug!(
            "quicksort ({}) sorted {} items: {} comparisons, {} partitions, depth {}",
            config.pivot.name(),
            seq.len(),
            stats.comparisons,
            stats.partitions,
            stats.max_depth
        );
        stats
    }

    /// Sorts `seq[range]`.
    pub fn run_range<T: Ord>(
        seq: &mut [T],
        range: Range<usize>,
        config: &QuicksortConfig,
    ) -> Result<SortStats> {
        let mut strategy = config.pivot.build(config.seed);
        let stats = sort_range(seq, range.clone(), &mut strategy)?;
        log::debug!(
            "quicksort ({}) sorted range {:?}: {} comparisons, {} partitions, depth {}",
            config.pivot.name(),
            range,
            stats.comparisons,
            stats.partitions,
            stats.max_depth
        );
        Ok(stats)
    }

    /// Sorts a copy of `input` with every built-in strategy.
    ///
    /// Returns one report per entry of [`Pivot::ALL`], in that order. The
    /// comparison counts make the cost of each strategy on this input
    /// directly comparable.
    pub fn compare<T: Ord + Clone>(input: &[T], seed: Option<u64>) -> Vec<PivotReport> {
        Pivot::ALL
            .iter()
            .map(|&pivot| {
                let mut work = input.to_vec();
                let mut strategy = pivot.build(seed);
                let stats = sort_with(&mut work, &mut strategy);
                debug_assert!(work.windows(2).all(|w| w[0] <= w[1]));
                PivotReport { pivot, stats }
            })
            .collect()
    }
}
