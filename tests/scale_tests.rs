use fractalsort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_100k() {
    let count = 100_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    fractal_sort(&mut input);
    let duration = start.elapsed();
    println!("Sorted 100k elements in {:?}", duration);

    assert_eq!(input.len(), count);
    for i in 0..count - 1 {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}

#[test]
#[ignore]
fn test_sort_1m() {
    // WARNING: The top partitioning level scans ~1000 pivots per element
    // (O(n * sqrt(n)) comparisons), so expect a multi-second run even in
    // release mode and much longer under the default test profile.
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    fractal_sort(&mut input);
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?}", duration);

    assert_eq!(input.len(), count);
    for i in 0..count - 1 {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}
