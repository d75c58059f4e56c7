//! Built-in pivot strategies.

use super::types::PivotStrategy;
use crate::random::rng_from;
use rand::rngs::StdRng;
use rand::Rng;

/// Always picks the first index of the range.
///
/// Degrades to O(n^2) comparisons and O(n) partition depth on input that
/// is already sorted. Useful as a baseline when comparing strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPivot;

impl PivotStrategy for FirstPivot {
    fn choose<T: Ord>(&mut self, _seq: &mut [T], start: usize, _end: usize) -> usize {
        start
    }
}

/// Always picks the last index of the range (`end - 1`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LastPivot;

impl PivotStrategy for LastPivot {
    fn choose<T: Ord>(&mut self, _seq: &mut [T], _start: usize, end: usize) -> usize {
        end - 1
    }
}

/// Picks an index uniformly at random from the range.
///
/// Quicksort runs in expected O(n log n) time over the random choices,
/// whatever the input order.
///
/// # Examples
///
/// ```
/// use u_partsel::pivot::{PivotStrategy, RandomPivot};
///
/// let mut data = vec![4, 8, 15, 16, 23, 42];
/// let mut pivot = RandomPivot::with_seed(7);
/// let idx = pivot.choose(&mut data, 1, 4);
/// assert!((1..4).contains(&idx));
/// ```
#[derive(Debug, Clone)]
pub struct RandomPivot {
    rng: StdRng,
}

impl RandomPivot {
    /// Creates a strategy seeded from the thread RNG.
    pub fn new() -> Self {
        Self::from_seed(None)
    }

    /// Creates a strategy with a fixed seed for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_seed(Some(seed))
    }

    /// Creates a strategy from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self {
            rng: rng_from(seed),
        }
    }
}

impl Default for RandomPivot {
    fn default() -> Self {
        Self::new()
    }
}

impl PivotStrategy for RandomPivot {
    fn choose<T: Ord>(&mut self, _seq: &mut [T], start: usize, end: usize) -> usize {
        self.rng.random_range(start..end)
    }
}

/// Median of the first, middle, and last items of the range.
///
/// With `mid = start + (end - start) / 2` and `last = end - 1`, the three
/// sampled positions are swapped so that `seq[start] <= seq[mid] <= seq[last]`,
/// and `mid` is returned. This keeps sorted and reverse-sorted input at
/// O(n log n) without drawing random numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianOfThree;

impl PivotStrategy for MedianOfThree {
    fn choose<T: Ord>(&mut self, seq: &mut [T], start: usize, end: usize) -> usize {
        let mid = start + (end - start) / 2;
        let last = end - 1;

        if seq[start] > seq[mid] {
            seq.swap(start, mid);
        }
        if seq[mid] > seq[last] {
            seq.swap(mid, last);
            if seq[start] > seq[mid] {
                seq.swap(start, mid);
            }
        }

        mid
    }
}

/// Names a built-in pivot strategy.
///
/// Used by configs to pick a strategy without naming its type; see
/// [`Pivot::build`] for the runtime counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pivot {
    /// [`FirstPivot`].
    First,
    /// [`LastPivot`].
    Last,
    /// [`RandomPivot`].
    Random,
    /// [`MedianOfThree`].
    #[default]
    MedianOfThree,
}

impl Pivot {
    /// Every built-in strategy, in declaration order.
    pub const ALL: [Pivot; 4] = [
        Pivot::First,
        Pivot::Last,
        Pivot::Random,
        Pivot::MedianOfThree,
    ];

    /// Short lowercase name, for reports and logs.
    pub fn name(self) -> &'static str {
        match self {
            Pivot::First => "first",
            Pivot::Last => "last",
            Pivot::Random => "random",
            Pivot::MedianOfThree => "median_of_three",
        }
    }

    /// Instantiates the strategy. `seed` only affects [`Pivot::Random`].
    pub fn build(self, seed: Option<u64>) -> AnyPivot {
        match self {
            Pivot::First => AnyPivot::First(FirstPivot),
            Pivot::Last => AnyPivot::Last(LastPivot),
            Pivot::Random => AnyPivot::Random(RandomPivot::from_seed(seed)),
            Pivot::MedianOfThree => AnyPivot::MedianOfThree(MedianOfThree),
        }
    }
}

/// A built-in strategy chosen at runtime.
#[derive(Debug, Clone)]
pub enum AnyPivot {
    /// First index.
    First(FirstPivot),
    /// Last index.
    Last(LastPivot),
    /// Uniform random index.
    Random(RandomPivot),
    /// Median of three.
    MedianOfThree(MedianOfThree),
}

impl PivotStrategy for AnyPivot {
    fn choose<T: Ord>(&mut self, seq: &mut [T], start: usize, end: usize) -> usize {
        match self {
            AnyPivot::First(s) => s.choose(seq, start, end),
            AnyPivot::Last(s) => s.choose(seq, start, end),
            AnyPivot::Random(s) => s.choose(seq, start, end),
            AnyPivot::MedianOfThree(s) => s.choose(seq, start, end),
        }
    }
}
