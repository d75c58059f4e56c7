//! Randomized order-statistic selection.
//!
//! Finds the item that would sit at a given rank if the range were sorted,
//! without sorting it. Each step partitions around a uniformly random pivot
//! and continues into the one zone that contains the rank.
//!
//! Expected O(n) time for every rank; worst case O(n^2) over unlucky pivot
//! draws. Items must be distinct, see [`DuplicatePolicy`].
//!
//! # References
//!
//! - Hoare (1961), "Algorithm 65: Find", *CACM* 4(7)
//! - Cormen et al. (2009), *Introduction to Algorithms*, 3rd ed., §9.2

mod config;
mod runner;

pub use config::{DuplicatePolicy, SelectionConfig};
pub use runner::{select, SelectionRunner};
