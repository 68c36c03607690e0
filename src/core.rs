//! Core types and tuning constants for Fractalsort.
//!
//! This module defines:
//! - The partitioning tunables ([`SMALL_SORT_THRESHOLD`], [`PIVOT_SAMPLE_FACTOR`],
//!   [`PIVOT_OUTLIER_FRAC`]).
//! - HeapEntry: Internal bucket cursor used by the k-way merge.

/// Ranges at or below this length skip partitioning entirely and are sorted
/// with the small sort.
pub const SMALL_SORT_THRESHOLD: usize = 12;

/// Multiplier applied to the pivot count when sizing the random sample.
///
/// With the default of `2.0`, a range that needs `k` pivots draws `2k` sample
/// values, leaving room for outlier trimming.
pub const PIVOT_SAMPLE_FACTOR: f64 = 2.0;

/// Fraction of the sorted sample discarded from each end before pivots are
/// picked.
///
/// Trimming is skipped when it would leave fewer than `pivot_count` candidates.
pub const PIVOT_OUTLIER_FRAC: f64 = 0.15;

/// Cursor into one bucket during the k-way merge.
///
/// Ordered by the value it points at, then by bucket and offset so that ties
/// between buckets resolve the same way every time. At most one live entry per
/// non-exhausted bucket sits in the heap.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct HeapEntry<'a, T> {
    pub value: &'a T,
    pub bucket: usize,
    pub offset: usize,
}
