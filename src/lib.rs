//! # Fractalsort
//!
//! `fractalsort` is a comparison-based, in-place sorting library built around
//! recursive *multi-pivot, sample-based partitioning* and a *k-way min-heap
//! merge*, instead of the classical single- or dual-pivot schemes.
//!
//! Each recursion level draws a random sample from the range, trims the
//! extremes, derives roughly `sqrt(n)` pivots from the survivors, and fans the
//! range out into `pivots + 1` buckets. Buckets are sorted recursively and
//! reassembled with a heap-based k-way merge.
//!
//! ## Key Features
//!
//! - **Sample-Based Pivots**: Pivots are picked from a random sample of the
//!   range with the extreme values discarded, so a single outlier cannot drag
//!   a partition boundary toward one end.
//! - **Fractal Fan-Out**: Every level splits into `~sqrt(n)` buckets rather
//!   than two halves, keeping the recursion shallow on balanced input.
//! - **Heap-Based Merge**: Sorted buckets are recombined with a min-heap that
//!   holds at most one cursor per bucket, in `O(n log k)`.
//! - **Deterministic Replay**: [`fractal_sort_with`] accepts any [`rand::Rng`],
//!   so a seeded generator reproduces the exact same pivot draws run after run.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! [`fractal_sort`] sorts any slice of `Ord + Clone` values in place, drawing
//! pivot samples from the thread-local generator.
//!
//! ```rust
//! use fractalsort::fractal_sort;
//!
//! let mut data = vec![59, 35, 342, 7, 6, 560];
//! fractal_sort(&mut data);
//!
//! assert_eq!(data, vec![6, 7, 35, 59, 342, 560]);
//! ```
//!
//! ### Deterministic Sorting
//!
//! For reproducible runs (tests, benchmarks, debugging a bad partition), pass
//! a seeded generator to [`fractal_sort_with`].
//!
//! ```rust
//! use fractalsort::fractal_sort_with;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut data: Vec<u32> = (0..1000).rev().collect();
//! fractal_sort_with(&mut data, &mut rng);
//!
//! assert!(data.windows(2).all(|w| w[0] <= w[1]));
//! ```
//!
//! ### Sorting a Sub-Range
//!
//! The algorithm operates on whatever slice it is handed, so sorting a
//! contiguous index range is plain sub-slicing.
//!
//! ```rust
//! use fractalsort::fractal_sort;
//!
//! let mut data = vec![9, 8, 7, 6, 5];
//! fractal_sort(&mut data[1..=3]);
//!
//! assert_eq!(data, vec![9, 6, 7, 8, 5]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Partitioning**: O(n * k) comparisons per level against `k ~ sqrt(n)`
//!   pivots (a linear threshold scan per element).
//! - **Merge**: O(n log k) per level; every element passes through the heap
//!   exactly once.
//! - **Recursion Depth**: ~log log n on balanced input; randomized sampling
//!   makes sustained pathological splits unlikely but not impossible.
//! - **Memory Overhead**: Transient sample, pivot, and bucket vectors per
//!   recursion frame, O(n) auxiliary per level. The sort is in place only in
//!   the sense that the input slice receives the result; it is not in situ.
//!
//! Equal elements keep no particular relative order (the sort is unstable).

pub mod algo;
pub mod core;
pub use algo::{fractal_sort, fractal_sort_with, merge_sorted_buckets};

pub mod prelude {
    pub use crate::algo::{fractal_sort, fractal_sort_with, merge_sorted_buckets};
    pub use crate::core::{PIVOT_OUTLIER_FRAC, PIVOT_SAMPLE_FACTOR, SMALL_SORT_THRESHOLD};
}
