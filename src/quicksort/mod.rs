//! Quicksort over the three-way partition.
//!
//! Sorts a range in place by partitioning it around a pivot and sorting
//! the less and greater zones. The equal zone is already in its final place
//! and is never revisited, so inputs with many duplicate keys stay fast.
//!
//! # Key Types
//!
//! - [`QuicksortConfig`]: pivot strategy and seed
//! - [`QuicksortRunner`]: config-driven entry points and strategy comparison
//! - [`SortStats`]: comparison, partition, and depth counters for one sort
//!
//! # References
//!
//! - Hoare (1962), "Quicksort", *The Computer Journal* 5(1)
//! - Bentley & McIlroy (1993), "Engineering a Sort Function",
//!   *Software: Practice and Experience* 23(11)

mod config;
mod runner;
mod types;

pub use config::QuicksortConfig;
pub use runner::{sort, sort_range, sort_with, QuicksortRunner};
pub use types::{PivotReport, SortStats};
