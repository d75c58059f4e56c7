//! Core trait for pivot selection.

/// Chooses the pivot index for a partition step.
///
/// Implementations receive the whole sequence together with the half-open
/// range `[start, end)` under partition, and must return an index in that
/// range. They may reorder elements inside the range (median-of-three does)
/// but must never touch elements outside it.
///
/// The partition routine only calls `choose` for non-empty ranges, so
/// `start < end` always holds on entry.
///
/// # Examples
///
/// ```
/// use u_partsel::pivot::PivotStrategy;
///
/// /// Picks the largest element, which is a terrible pivot.
/// struct MaxPivot;
///
/// impl PivotStrategy for MaxPivot {
///     fn choose<T: Ord>(&mut self, seq: &mut [T], start: usize, end: usize) -> usize {
///         (start..end).max_by(|&a, &b| seq[a].cmp(&seq[b])).unwrap_or(start)
///     }
/// }
///
/// let mut data = vec![3, 1, 2];
/// u_partsel::sort_with(&mut data, &mut MaxPivot);
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub trait PivotStrategy {
    /// Returns an index in `[start, end)` to use as the pivot.
    fn choose<T: Ord>(&mut self, seq: &mut [T], start: usize, end: usize) -> usize;
}

impl<S: PivotStrategy> PivotStrategy for &mut S {
    fn choose<T: Ord>(&mut self, seq: &mut [T], start: usize, end: usize) -> usize {
        (**self).choose(seq, start, end)
    }
}
