//! Inclusive integer ranges and static partitioning

use crate::ScanError;
use std::fmt;

/// Inclusive integer range `[start, end]`
///
/// Ranges built through [`Range::new`] always satisfy `start <= end`. Sub-ranges
/// produced by [`Range::partition`] may be empty (`start > end`) when the range
/// holds fewer integers than there are workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    /// Canonical empty range, handed to workers that have nothing to scan
    pub const EMPTY: Range = Range { start: 1, end: 0 };

    /// Create a range, rejecting `start > end`
    pub fn new(start: i64, end: i64) -> Result<Self, ScanError> {
        if start > end {
            return Err(ScanError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First integer in the range
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last integer in the range (inclusive)
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of integers covered
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (self.end as i128 - self.start as i128 + 1) as u64
        }
    }

    /// Whether the range covers no integers
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Iterate over every integer in the range in ascending order
    pub fn iter(&self) -> std::ops::RangeInclusive<i64> {
        self.start..=self.end
    }

    /// Split into exactly `worker_count` contiguous, non-overlapping sub-ranges.
    ///
    /// Every sub-range holds `len / worker_count` integers except the last, which
    /// runs to `end` and absorbs the remainder of the division. When the range
    /// holds fewer integers than there are workers the leading sub-ranges are
    /// [`Range::EMPTY`].
    pub fn partition(&self, worker_count: usize) -> Result<Vec<Range>, ScanError> {
        if worker_count == 0 {
            return Err(ScanError::InvalidWorkerCount);
        }

        let len = self.end as i128 - self.start as i128 + 1;
        let size = len / worker_count as i128;

        let parts = (0..worker_count)
            .map(|i| {
                let start = self.start as i128 + i as i128 * size;
                let end = if i == worker_count - 1 {
                    self.end as i128
                } else {
                    start + size - 1
                };
                if end < start {
                    return Range::EMPTY;
                }
                // Non-empty parts lie inside `self`, so both bounds fit in i64
                Range {
                    start: start as i64,
                    end: end as i64,
                }
            })
            .collect();

        Ok(parts)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = std::ops::RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
