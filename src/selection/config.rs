//! Selection configuration.

/// What selection does when it finds items equal to a pivot.
///
/// Selection is only defined for ranges of distinct items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicatePolicy {
    /// Fail with [`Error::PreconditionViolated`](crate::Error::PreconditionViolated)
    /// as soon as a partition step groups more than one item with its pivot.
    ///
    /// Duplicates that never meet a pivot on the search path go unnoticed,
    /// but they also cannot change the answer: every rank decision is then
    /// made on an exact pivot position.
    #[default]
    Reject,

    /// Skip the check. The returned item is unspecified when the range
    /// holds duplicates; callers must guarantee distinct items.
    Assume,
}

/// Configuration for [`SelectionRunner`](super::SelectionRunner).
///
/// # Examples
///
/// ```
/// use u_partsel::selection::{DuplicatePolicy, SelectionConfig};
///
/// let config = SelectionConfig::default()
///     .with_seed(7)
///     .with_duplicates(DuplicatePolicy::Assume);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionConfig {
    /// Seed for the random pivot (None for random).
    pub seed: Option<u64>,

    /// Handling of duplicate items.
    pub duplicates: DuplicatePolicy,
}

impl SelectionConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the duplicate policy.
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SelectionConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.duplicates, DuplicatePolicy::Reject);
    }
}
