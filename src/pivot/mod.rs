//! Pivot selection strategies.
//!
//! A pivot strategy picks the index in `[start, end)` whose value the
//! partition step arranges the range around. The choice decides how evenly
//! each partition splits, and therefore the running time of quicksort and
//! selection.
//!
//! # Strategies
//!
//! - [`FirstPivot`]: always `start`. Quadratic on sorted input.
//! - [`LastPivot`]: always `end - 1`. Quadratic on sorted input.
//! - [`RandomPivot`]: uniform over the range. Expected O(n log n) sort for
//!   every input order.
//! - [`MedianOfThree`]: median of the first, middle, and last items, which
//!   are left sorted relative to each other as a side effect.
//!
//! # References
//!
//! - Hoare (1962), "Quicksort", *The Computer Journal* 5(1)
//! - Sedgewick (1978), "Implementing Quicksort Programs", *CACM* 21(10)

mod strategies;
mod types;

pub use strategies::{AnyPivot, FirstPivot, LastPivot, MedianOfThree, Pivot, RandomPivot};
pub use types::PivotStrategy;
