//! Half-open range validation.

use crate::error::{Error, Result};
use std::ops::Range;

/// Checks that `range` lies within a sequence of length `len`.
///
/// Accepts empty ranges (`start == end`), including `len..len`.
pub fn check_range(range: &Range<usize>, len: usize) -> Result<()> {
    if range.start > range.end || range.end > len {
        return Err(Error::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}
