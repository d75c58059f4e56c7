//! In-place partitioning, quicksort, and randomized selection.
//!
//! Provides one partition routine and two algorithms built on it:
//!
//! - **Partition**: three-way in-place partition of a range around a pivot
//!   into less / equal / greater zones. All copies of the pivot value are
//!   grouped, so duplicate-heavy input is handled in linear time per level.
//! - **Pivot strategies**: pluggable pivot choice behind the
//!   [`PivotStrategy`] trait: first index, last index, uniform random, and
//!   median-of-three.
//! - **Quicksort**: in-place sort with comparison/partition/depth counters
//!   for comparing strategies empirically.
//! - **Selection**: expected linear-time order statistic (k-th smallest)
//!   using random pivots.
//!
//! # Quick start
//!
//! ```
//! use u_partsel::pivot::RandomPivot;
//!
//! let mut data = vec![3, 5, 7, 1, 9, 4, 6, 8];
//! assert_eq!(u_partsel::select(&mut data, 4), Ok(&6));
//!
//! let stats = u_partsel::sort_with(&mut data, &mut RandomPivot::with_seed(42));
//! assert_eq!(data, vec![1, 3, 4, 5, 6, 7, 8, 9]);
//! assert!(stats.comparisons >= 7);
//! ```
//!
//! # Ownership
//!
//! Every operation borrows the caller's slice mutably for the duration of
//! the call and rearranges it in place. Nothing is allocated on the sort
//! path and no state outlives a call, apart from the RNG inside a
//! [`RandomPivot`](pivot::RandomPivot) the caller chooses to reuse.

pub mod error;
pub mod partition;
pub mod pivot;
pub mod quicksort;
pub mod random;
mod range;
pub mod selection;

pub use error::{Error, Result};
pub use partition::{partition, PartitionResult};
pub use pivot::PivotStrategy;
pub use quicksort::{sort, sort_range, sort_with};
pub use selection::select;
