//! Quicksort configuration.

use crate::pivot::Pivot;

/// Configuration for [`QuicksortRunner`](super::QuicksortRunner).
///
/// # Examples
///
/// ```
/// use u_partsel::pivot::Pivot;
/// use u_partsel::quicksort::QuicksortConfig;
///
/// let config = QuicksortConfig::default()
///     .with_pivot(Pivot::Random)
///     .with_seed(42);
/// assert_eq!(config.pivot, Pivot::Random);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuicksortConfig {
    /// Pivot strategy. Defaults to median-of-three.
    pub pivot: Pivot,

    /// Seed for [`Pivot::Random`] (None for random). Ignored by the
    /// deterministic strategies.
    pub seed: Option<u64>,
}

impl QuicksortConfig {
    /// Sets the pivot strategy.
    pub fn with_pivot(mut self, pivot: Pivot) -> Self {
        self.pivot = pivot;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
