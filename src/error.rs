//! Error types for partitioning, sorting, and selection.

use thiserror::Error;

/// Error variants for partition-based operations.
///
/// Range and rank errors are always detected before the sequence is
/// touched. [`Error::PreconditionViolated`] is raised mid-run, after some
/// elements may already have been rearranged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `start > end`, or `end` past the sequence length.
    #[error("invalid range {start}..{end} for sequence of length {len}")]
    InvalidRange {
        /// Requested range start.
        start: usize,
        /// Requested range end (exclusive).
        end: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// Partition was asked to operate on a zero-length range.
    #[error("cannot partition empty range at {start}")]
    EmptyRange {
        /// Start (and end) of the empty range.
        start: usize,
    },

    /// Selection rank outside `[0, len)`.
    #[error("rank {rank} out of bounds for range of length {len}")]
    RankOutOfBounds {
        /// Requested zero-based rank.
        rank: usize,
        /// Length of the range searched.
        len: usize,
    },

    /// Input broke a documented precondition (duplicate keys in selection).
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
}

/// A specialized Result type for partition-based operations.
pub type Result<T> = std::result::Result<T, Error>;
