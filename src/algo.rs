//! Core sorting algorithms (fractal partitioning and the k-way merge).
//!
//! This module implements the full pipeline:
//! - **Small sort**: Bidirectional exchange sort used below
//!   [`SMALL_SORT_THRESHOLD`] and for sample/pivot arrays.
//! - **Pivot sampling**: Random sampling with outlier trimming.
//! - **Partitioning**: Threshold scan routing every element into one of
//!   `pivots + 1` buckets.
//! - **K-way merge**: Min-heap reassembly of the recursively sorted buckets.
//!
//! The main entry points are [`fractal_sort`] and [`fractal_sort_with`].

use crate::core::{HeapEntry, PIVOT_OUTLIER_FRAC, PIVOT_SAMPLE_FACTOR, SMALL_SORT_THRESHOLD};
use rand::Rng;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Sorts a slice in place into non-decreasing order.
///
/// Pivot samples are drawn from the thread-local generator. For a
/// reproducible run, use [`fractal_sort_with`] with a seeded generator.
///
/// The sort is unstable: equal elements keep no particular relative order.
///
/// # Arguments
///
/// * `data` - The slice to sort. Sub-ranges are sorted by sub-slicing
///   (`&mut data[start..=end]`).
///
/// # Examples
///
/// ```
/// use fractalsort::fractal_sort;
///
/// let mut data = vec![59, 35, 342, 7, 6, 560];
/// fractal_sort(&mut data);
///
/// assert_eq!(data, vec![6, 7, 35, 59, 342, 560]);
/// ```
pub fn fractal_sort<T: Ord + Clone>(data: &mut [T]) {
    let mut rng = rand::rng();
    fractal_sort_with(data, &mut rng);
}

/// Sorts a slice in place, drawing pivot samples from the given generator.
///
/// Behaves exactly like [`fractal_sort`]; the explicit generator makes the
/// recursion fully deterministic for a given seed and input, which is what
/// the test suite relies on to reproduce partitioning decisions.
///
/// Empty and single-element slices return immediately. Slices at or below
/// [`SMALL_SORT_THRESHOLD`] are handled by the small sort without touching
/// the generator.
///
/// # Examples
///
/// ```
/// use fractalsort::fractal_sort_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3];
/// fractal_sort_with(&mut data, &mut rng);
///
/// assert_eq!(data, vec![1, 1, 2, 3, 3, 3, 4, 5, 5, 5, 6, 7, 8, 9, 9, 9]);
/// ```
pub fn fractal_sort_with<T: Ord + Clone, R: Rng>(data: &mut [T], rng: &mut R) {
    if data.len() <= SMALL_SORT_THRESHOLD {
        small_sort(data);
        return;
    }

    let mut buckets = loop {
        let pivots = sample_pivots(data, rng);
        let buckets = partition_into_buckets(data, &pivots);
        if buckets.iter().all(|bucket| bucket.len() < data.len()) {
            break buckets;
        }
        // Every sampled pivot equals the range minimum, so the whole range
        // landed in the last bucket and the split made no progress. A
        // constant range is already sorted; anything else gets a fresh draw.
        if data.iter().all(|x| *x == data[0]) {
            return;
        }
    };

    for bucket in &mut buckets {
        if bucket.len() > 1 {
            fractal_sort_with(bucket, rng);
        }
    }

    let merged = merge_sorted_buckets(&buckets);
    for (slot, value) in data.iter_mut().zip(merged) {
        *slot = value;
    }
}

/// Merges independently sorted buckets into one sorted vector.
///
/// Maintains a min-heap holding one cursor per non-exhausted bucket.
/// Repeatedly pops the globally smallest value, appends it to the output,
/// and advances the popped bucket's cursor. Empty buckets are skipped;
/// ties between buckets resolve by bucket index.
///
/// Runs in `O(n log k)` for `n` total elements across `k` buckets.
///
/// # Arguments
///
/// * `buckets` - Bucket contents, each sorted non-decreasing.
///
/// # Returns
///
/// A vector containing every element of every bucket, sorted non-decreasing.
///
/// # Examples
///
/// ```
/// use fractalsort::merge_sorted_buckets;
///
/// let buckets = vec![vec![1, 4, 9], vec![2, 3], vec![], vec![0, 5]];
/// let merged = merge_sorted_buckets(&buckets);
///
/// assert_eq!(merged, vec![0, 1, 2, 3, 4, 5, 9]);
/// ```
pub fn merge_sorted_buckets<T: Ord + Clone>(buckets: &[Vec<T>]) -> Vec<T> {
    let total: usize = buckets.iter().map(Vec::len).sum();
    let mut heap = BinaryHeap::with_capacity(buckets.len());

    // Seed with the head of every non-empty bucket.
    for (bucket, values) in buckets.iter().enumerate() {
        if let Some(value) = values.first() {
            heap.push(Reverse(HeapEntry {
                value,
                bucket,
                offset: 0,
            }));
        }
    }

    let mut merged = Vec::with_capacity(total);
    while let Some(Reverse(entry)) = heap.pop() {
        merged.push(entry.value.clone());

        let offset = entry.offset + 1;
        if let Some(value) = buckets[entry.bucket].get(offset) {
            heap.push(Reverse(HeapEntry {
                value,
                bucket: entry.bucket,
                offset,
            }));
        }
    }

    merged
}

/// Bidirectional exchange sort over overlapping windows of three.
///
/// Repeats a forward and a backward sweep, applying up to three adjacent
/// compare-and-swaps per window, until a full double sweep performs no swap.
/// Every swap removes an inversion, so the loop terminates. Doubles as the
/// sorter for sample and pivot arrays, which stay near `sqrt(n)` in size.
fn small_sort<T: Ord>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    if data.len() == 2 {
        if data[0] > data[1] {
            data.swap(0, 1);
        }
        return;
    }

    let mut changed = true;
    while changed {
        changed = false;
        for i in 0..data.len() - 2 {
            changed |= fix_window(data, i);
        }
        for i in (0..data.len() - 2).rev() {
            changed |= fix_window(data, i);
        }
    }
}

/// Applies the three compare-and-swaps of the window at `i`; reports whether
/// any fired.
fn fix_window<T: Ord>(data: &mut [T], i: usize) -> bool {
    let mut swapped = false;
    if data[i] > data[i + 1] {
        data.swap(i, i + 1);
        swapped = true;
    }
    if data[i + 1] > data[i + 2] {
        data.swap(i + 1, i + 2);
        swapped = true;
    }
    if data[i] > data[i + 1] {
        data.swap(i, i + 1);
        swapped = true;
    }
    swapped
}

/// Draws a sorted pivot array for the given range.
///
/// 1. Draws `max(k, k * PIVOT_SAMPLE_FACTOR)` values uniformly at random with
///    replacement, where `k = max(2, sqrt(n))`; the source range is not
///    touched.
/// 2. Sorts the sample and discards [`PIVOT_OUTLIER_FRAC`] of it from each
///    end, unless trimming would leave fewer than `k` candidates.
/// 3. Picks `k` values from the survivors at a fixed stride.
///
/// The picked pivots are sorted once more before returning. Strided picks
/// from a sorted slice already arrive in order; the final sort pins the
/// non-decreasing invariant to this function instead of the picking rule.
fn sample_pivots<T: Ord + Clone, R: Rng>(data: &[T], rng: &mut R) -> Vec<T> {
    let pivot_count = data.len().isqrt().max(2);
    let sample_count = pivot_count.max((pivot_count as f64 * PIVOT_SAMPLE_FACTOR) as usize);

    let mut samples: Vec<T> = (0..sample_count)
        .map(|_| data[rng.random_range(0..data.len())].clone())
        .collect();
    small_sort(&mut samples);

    // Skip trimming entirely when the sample is too tight; a clamped cut
    // would leave too few candidates to pick distinct positions from.
    let cut = (PIVOT_OUTLIER_FRAC * sample_count as f64) as usize;
    let candidates = if 2 * cut < sample_count - pivot_count {
        &samples[cut..sample_count - cut]
    } else {
        &samples[..]
    };

    let step = (candidates.len() / pivot_count).max(1);
    let mut pivots: Vec<T> = (0..pivot_count)
        .map(|i| candidates[i * step].clone())
        .collect();
    small_sort(&mut pivots);

    pivots
}

/// Distributes a range into `pivots.len() + 1` buckets.
///
/// An element lands in the first bucket whose pivot exceeds it; elements
/// equal to a pivot are routed past it (`>=` advances the scan), so values
/// matching `pivot[b]` go to bucket `b + 1`. The consistent threshold scan
/// keeps every value in bucket `i` <= every value in bucket `j` for `i < j`,
/// which the merge depends on. Intra-bucket order is arbitrary.
fn partition_into_buckets<T: Ord + Clone>(data: &[T], pivots: &[T]) -> Vec<Vec<T>> {
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); pivots.len() + 1];

    for x in data {
        let mut b = 0;
        while b < pivots.len() && *x >= pivots[b] {
            b += 1;
        }
        buckets[b].push(x.clone());
    }

    buckets
}
