#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use sgd_net::{Network, TrainingExample};

pub fn seeded_network(sizes: Vec<usize>, seed: u64) -> Network {
    Network::with_rng(sizes, &mut StdRng::seed_from_u64(seed)).unwrap()
}

/// The four points of logical AND.
pub fn and_set() -> Vec<TrainingExample> {
    vec![
        TrainingExample::new(vec![0.0, 0.0], vec![0.0]),
        TrainingExample::new(vec![0.0, 1.0], vec![0.0]),
        TrainingExample::new(vec![1.0, 0.0], vec![0.0]),
        TrainingExample::new(vec![1.0, 1.0], vec![1.0]),
    ]
}

pub fn assert_close(a: f64, b: f64, tol: f64, what: &str) {
    assert!((a - b).abs() < tol, "{}: {} vs {} (tolerance {})", what, a, b, tol);
}
