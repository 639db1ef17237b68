use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const NUM_SAMPLES: usize = 20;
pub const SEED: u64 = 0;

/// Input sizes for the quadratic sorts.
pub const SMALL_SIZES: [usize; 2] = [100, 1_000];
/// Input sizes for everything else.
pub const LARGE_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

pub fn random_values(n: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..n).map(|_| rng.random_range(0..1_000_000)).collect()
}

/// Returns the adjacency lists of a random graph with `n` nodes and
/// outdegree `d`.
pub fn random_arcs(n: usize, d: usize) -> Vec<(usize, Vec<usize>)> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..n)
        .map(|node| (node, (0..d).map(|_| rng.random_range(0..n)).collect()))
        .collect()
}
