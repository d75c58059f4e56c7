//! Selection driver.
//!
//! # Algorithm
//!
//! 1. A range of one item is the answer.
//! 2. Partition around a random pivot; let `offset = lo - start`.
//! 3. `offset == rank`: the pivot is the answer. `offset > rank`: continue
//!    in `[start, lo)`. Otherwise continue in `(lo, end)` with
//!    `rank - offset - 1`.
//!
//! Each step shrinks the range, so the loop needs no recursion.

use super::config::{DuplicatePolicy, SelectionConfig};
use crate::error::{Error, Result};
use crate::partition::partition_unchecked;
use crate::pivot::RandomPivot;
use crate::range::check_range;
use std::cmp::Ordering;
use std::ops::Range;

/// Returns the `rank`-th smallest item (0-based) of `seq`.
///
/// Uses the default [`SelectionConfig`]: random seed, duplicates rejected.
/// `seq` is reordered.
///
/// # Examples
///
/// ```
/// let mut data = vec![3, 5, 7, 1, 9, 4, 6, 8];
/// assert_eq!(u_partsel::select(&mut data, 4), Ok(&6));
/// ```
pub fn select<T: Ord>(seq: &mut [T], rank: usize) -> Result<&T> {
    SelectionRunner::run(seq, rank, &SelectionConfig::default())
}

/// Runs randomized selection from a [`SelectionConfig`].
pub struct SelectionRunner;

impl SelectionRunner {
    /// Returns the `rank`-th smallest item of the whole of `seq`.
    pub fn run<'a, T: Ord>(
        seq: &'a mut [T],
        rank: usize,
        config: &SelectionConfig,
    ) -> Result<&'a T> {
        let len = seq.len();
        Self::run_range(seq, rank, 0..len, config)
    }

    /// Returns the `rank`-th smallest item of `seq[range]`.
    ///
    /// `rank` counts from `range.start`. Only items inside the range move.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRange`] if the range does not fit in `seq`.
    /// - [`Error::RankOutOfBounds`] if `rank >= range.len()`.
    /// - [`Error::PreconditionViolated`] under [`DuplicatePolicy::Reject`]
    ///   when a partition step finds items equal to its pivot. The range may
    ///   already be partly reordered at that point.
    ///
    /// The first two are reported before anything is moved.
    pub fn run_range<'a, T: Ord>(
        seq: &'a mut [T],
        rank: usize,
        range: Range<usize>,
        config: &SelectionConfig,
    ) -> Result<&'a T> {
        check_range(&range, seq.len())?;
        if rank >= range.len() {
            return Err(Error::RankOutOfBounds {
                rank,
                len: range.len(),
            });
        }

        let mut strategy = RandomPivot::from_seed(config.seed);
        let (mut start, mut end, mut rank) = (range.start, range.end, rank);
        let mut steps = 0usize;

        let index = loop {
            if end - start == 1 {
                break start;
            }

            let part = partition_unchecked(seq, start, end, &mut strategy);
            steps += 1;

            if part.hi > part.lo && config.duplicates == DuplicatePolicy::Reject {
                return Err(Error::PreconditionViolated(format!(
                    "{} items equal to the pivot in {start}..{end}; selection requires distinct items",
                    part.equal_len()
                )));
            }

            let offset = part.lo - start;
            match offset.cmp(&rank) {
                Ordering::Equal => break part.lo,
                Ordering::Greater => end = part.lo,
                Ordering::Less => {
                    rank -= offset + 1;
                    start = part.lo + 1;
                }
            }
        };

        log::debug!(
            "selection found rank in {:?} at index {index} after {steps} partitions",
            range
        );
        Ok(&seq[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{create_rng, shuffle};
    use rand::Rng;

    #[test]
    fn test_select_example() {
        let mut data = vec![3, 5, 7, 1, 9, 4, 6, 8];
        assert_eq!(select(&mut data, 4), Ok(&6));
    }

    #[test]
    fn test_every_rank() {
        let input = vec![3, 5, 7, 1, 9, 4, 6, 8];
        let mut sorted = input.clone();
        sorted.sort_unstable();

        for (rank, expected) in sorted.iter().enumerate() {
            let mut data = input.clone();
            let config = SelectionConfig::default().with_seed(rank as u64);
            let got = SelectionRunner::run(&mut data, rank, &config).unwrap();
            assert_eq!(got, expected, "rank {rank}");
        }
    }

    #[test]
    fn test_shuffled_permutations() {
        let mut rng = create_rng(42);
        let mut data: Vec<u32> = (0..1000).collect();
        let config = SelectionConfig::default().with_seed(42);

        for _ in 0..200 {
            shuffle(&mut data, &mut rng);
            let rank = rng.random_range(0..data.len());
            let got = *SelectionRunner::run(&mut data, rank, &config).unwrap();
            assert_eq!(got, rank as u32);
        }
    }

    #[test]
    fn test_single_item() {
        let mut data = vec![17];
        assert_eq!(select(&mut data, 0), Ok(&17));
    }

    #[test]
    fn test_range_rank_is_relative() {
        let mut data = vec![100, 40, 10, 30, 20, -100];
        let config = SelectionConfig::default().with_seed(1);
        let got = SelectionRunner::run_range(&mut data, 1, 1..5, &config).unwrap();
        assert_eq!(*got, 20);
        assert_eq!((data[0], data[5]), (100, -100));
    }

    #[test]
    fn test_rank_out_of_bounds_before_mutation() {
        let mut data = vec![3, 1, 2];
        assert_eq!(
            select(&mut data, 3),
            Err(Error::RankOutOfBounds { rank: 3, len: 3 })
        );
        assert_eq!(data, vec![3, 1, 2]);

        let mut empty: Vec<i32> = vec![];
        assert_eq!(
            select(&mut empty, 0),
            Err(Error::RankOutOfBounds { rank: 0, len: 0 })
        );
    }

    #[test]
    fn test_invalid_range() {
        let mut data = vec![3, 1, 2];
        let config = SelectionConfig::default();
        let result = SelectionRunner::run_range(&mut data, 0, 1..4, &config);
        assert!(matches!(result, Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut data = vec![5, 5, 5, 5];
        let result = select(&mut data, 1);
        assert!(matches!(result, Err(Error::PreconditionViolated(_))));
    }

    #[test]
    fn test_duplicates_never_give_wrong_answer() {
        let input = vec![2, 9, 4, 4, 7, 1, 4, 8, 3, 3];
        let mut sorted = input.clone();
        sorted.sort_unstable();

        for seed in 0..50 {
            for (rank, expected) in sorted.iter().enumerate() {
                let mut data = input.clone();
                let config = SelectionConfig::default().with_seed(seed);
                match SelectionRunner::run(&mut data, rank, &config) {
                    Ok(got) => assert_eq!(got, expected, "seed {seed} rank {rank}"),
                    Err(Error::PreconditionViolated(_)) => {}
                    Err(other) => panic!("unexpected error: {other}"),
                }
            }
        }
    }

    #[test]
    fn test_duplicates_assumed_runs_to_completion() {
        let mut data = vec![5, 5, 5, 5];
        let config = SelectionConfig::default()
            .with_seed(3)
            .with_duplicates(DuplicatePolicy::Assume);
        assert!(SelectionRunner::run(&mut data, 2, &config).is_ok());
    }
}
