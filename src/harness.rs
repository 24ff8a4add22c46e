//! Test harness: generate reproducible input, time one engine, verify.
//!
//! Every run generates its own input and sorts a fresh copy of it, so no
//! buffer is shared between timed measurements.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use tracing::{debug, debug_span, info, warn};

use crate::config::{Algorithm, TestConfig, VALUE_UPPER_BOUND};

/// Result of timing and verifying one algorithm on one array
#[derive(Debug, Clone, PartialEq)]
pub struct TestOutcome {
    pub algorithm: Algorithm,
    pub size: usize,
    pub seed: u64,
    pub sorted: bool,
    pub elapsed: Duration,
}

/// Both engines run against the same generated input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossCheck {
    pub size: usize,
    pub seed: u64,
    /// Quicksort and radix sort produced identical sequences
    pub agree: bool,
    /// Both outputs are non-decreasing
    pub sorted: bool,
}

impl CrossCheck {
    pub fn passed(&self) -> bool {
        self.agree && self.sorted
    }
}

/// Every outcome and cross-check of a suite run
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteReport {
    pub outcomes: Vec<TestOutcome>,
    pub cross_checks: Vec<CrossCheck>,
}

impl SuiteReport {
    pub fn correctness(&self) -> bool {
        self.outcomes.iter().all(|o| o.sorted) && self.cross_checks.iter().all(CrossCheck::passed)
    }
}

pub fn generate_random_array(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..VALUE_UPPER_BOUND)).collect()
}

pub fn verify_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

pub fn run_test(config: &TestConfig, seed: u64) -> TestOutcome {
    let algorithm = config.algorithm();
    let size = config.size();
    let _span = debug_span!("run_test", algorithm = algorithm.name(), size, seed).entered();

    let original = generate_random_array(size, seed);
    debug!(len = original.len(), "generated input");

    // Original stays untouched for reproducibility
    let mut working = original.clone();

    let start = Instant::now();
    algorithm.sort(&mut working);
    let elapsed = start.elapsed();

    let sorted = verify_sorted(&working);
    debug!(sorted, "verified output");
    if sorted {
        info!(
            algorithm = algorithm.name(),
            size,
            elapsed_us = elapsed.as_micros() as u64,
            "sort completed"
        );
    } else {
        warn!(algorithm = algorithm.name(), size, "output is not in non-decreasing order");
    }

    TestOutcome {
        algorithm,
        size,
        seed,
        sorted,
        elapsed,
    }
}

pub fn cross_check(size: usize, seed: u64) -> CrossCheck {
    let original = generate_random_array(size, seed);

    let mut by_quicksort = original.clone();
    Algorithm::Quicksort.sort(&mut by_quicksort);

    let mut by_radix = original;
    Algorithm::RadixSort.sort(&mut by_radix);

    let agree = by_quicksort == by_radix;
    let sorted = verify_sorted(&by_quicksort) && verify_sorted(&by_radix);
    if !agree {
        warn!(size, seed, "quicksort and radix sort disagree");
    }

    CrossCheck {
        size,
        seed,
        agree,
        sorted,
    }
}

pub fn run_suite(configs: &[TestConfig], seed: u64) -> SuiteReport {
    let outcomes = configs.iter().map(|config| run_test(config, seed)).collect();

    let mut sizes: Vec<usize> = configs.iter().map(TestConfig::size).collect();
    sizes.sort_unstable();
    sizes.dedup();
    let cross_checks = sizes.into_iter().map(|size| cross_check(size, seed)).collect();

    SuiteReport {
        outcomes,
        cross_checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SEED, MAX_CAPACITY};

    #[test]
    fn generation_is_deterministic() {
        let a = generate_random_array(1024, DEFAULT_SEED);
        let b = generate_random_array(1024, DEFAULT_SEED);
        assert_eq!(a, b);
        assert_ne!(a, generate_random_array(1024, DEFAULT_SEED + 1));
    }

    #[test]
    fn generation_respects_size_and_range() {
        let data = generate_random_array(MAX_CAPACITY, 7);
        assert_eq!(data.len(), MAX_CAPACITY);
        assert!(data.iter().all(|&v| (0..VALUE_UPPER_BOUND).contains(&v)));
        assert!(generate_random_array(0, 7).is_empty());
    }

    #[test]
    fn verify_detects_order() {
        assert!(verify_sorted(&[]));
        assert!(verify_sorted(&[1]));
        assert!(verify_sorted(&[1, 1, 2, 3]));
        assert!(!verify_sorted(&[1, 3, 2]));
    }

    #[test]
    fn run_test_passes_for_both_algorithms() {
        for algorithm in Algorithm::ALL {
            let config = TestConfig::new(algorithm, MAX_CAPACITY).unwrap();
            let outcome = run_test(&config, DEFAULT_SEED);
            assert!(outcome.sorted, "{algorithm} failed");
            assert_eq!(outcome.size, MAX_CAPACITY);
            assert_eq!(outcome.algorithm, algorithm);
        }
    }

    #[test]
    fn single_element_run() {
        let config = TestConfig::new(Algorithm::RadixSort, 1).unwrap();
        assert!(run_test(&config, DEFAULT_SEED).sorted);
    }

    #[test]
    fn engines_agree_on_size_five() {
        let original = generate_random_array(5, DEFAULT_SEED);
        let check = cross_check(5, DEFAULT_SEED);
        assert!(check.passed());

        let mut expected = original;
        expected.sort_unstable();
        let mut by_quicksort = generate_random_array(5, DEFAULT_SEED);
        Algorithm::Quicksort.sort(&mut by_quicksort);
        assert_eq!(by_quicksort, expected);
    }

    #[test]
    fn suite_covers_every_config() {
        let configs: Vec<TestConfig> = [16, 300]
            .into_iter()
            .flat_map(|size| Algorithm::ALL.map(|a| TestConfig::new(a, size).unwrap()))
            .collect();
        let report = run_suite(&configs, DEFAULT_SEED);

        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(report.cross_checks.len(), 2);
        assert!(report.correctness());
    }
}
