//! Test configuration: algorithm selection, sizing limits and seeds.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;
use crate::quicksort::QuickSort;
use crate::radix::RadixSort;
use crate::Sorter;

/// Largest array a single run may request.
pub const MAX_CAPACITY: usize = 4096;

/// Seed used when none is given, so timings stay comparable across runs.
pub const DEFAULT_SEED: u64 = 42;

/// Generated values fall in `0..VALUE_UPPER_BOUND`.
pub const VALUE_UPPER_BOUND: i32 = 10_000;

/// Sizes exercised by `--suite`.
pub const REFERENCE_SIZES: [usize; 3] = [1024, 2048, 4096];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Quicksort,
    RadixSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Quicksort, Algorithm::RadixSort];

    /// Name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Quicksort => "quicksort",
            Algorithm::RadixSort => "radix",
        }
    }

    /// Human-readable label used in reports
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Quicksort => "Quicksort",
            Algorithm::RadixSort => "Radix Sort",
        }
    }

    /// Sort `data` with this algorithm's engine
    pub fn sort(self, data: &mut [i32]) {
        match self {
            Algorithm::Quicksort => QuickSort.sort(data),
            Algorithm::RadixSort => RadixSort.sort(data),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

/// A validated single-run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestConfig {
    algorithm: Algorithm,
    size: usize,
}

impl TestConfig {
    pub fn new(algorithm: Algorithm, size: usize) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_CAPACITY {
            return Err(ConfigError::SizeOutOfRange {
                size,
                max: MAX_CAPACITY,
            });
        }
        Ok(Self { algorithm, size })
    }

    /// Build a configuration from raw command-line words.
    ///
    /// The algorithm is checked first, matching the order a user reads them.
    pub fn parse(algorithm: &str, size: &str) -> Result<Self, ConfigError> {
        let algorithm: Algorithm = algorithm.parse()?;
        let size: usize = size
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidSize(size.to_string()))?;
        Self::new(algorithm, size)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Every algorithm at every reference size, smallest size first
pub fn reference_configs() -> Vec<TestConfig> {
    REFERENCE_SIZES
        .into_iter()
        .flat_map(|size| Algorithm::ALL.map(|algorithm| TestConfig { algorithm, size }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_algorithms() {
        assert_eq!("quicksort".parse::<Algorithm>(), Ok(Algorithm::Quicksort));
        assert_eq!("radix".parse::<Algorithm>(), Ok(Algorithm::RadixSort));
    }

    #[test]
    fn rejects_unknown_algorithm() {
        assert_eq!(
            "badalgo".parse::<Algorithm>(),
            Err(ConfigError::UnknownAlgorithm("badalgo".into()))
        );
        // Names are exact, not case-folded
        assert!("Quicksort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(Algorithm::Quicksort.label(), "Quicksort");
        assert_eq!(Algorithm::RadixSort.label(), "Radix Sort");
        assert_eq!(Algorithm::RadixSort.to_string(), "Radix Sort");
    }

    #[test]
    fn capacity_boundaries() {
        assert!(TestConfig::new(Algorithm::Quicksort, 1).is_ok());
        assert!(TestConfig::new(Algorithm::Quicksort, MAX_CAPACITY).is_ok());
        assert_eq!(
            TestConfig::new(Algorithm::RadixSort, MAX_CAPACITY + 1),
            Err(ConfigError::SizeOutOfRange {
                size: MAX_CAPACITY + 1,
                max: MAX_CAPACITY
            })
        );
        assert!(matches!(
            TestConfig::new(Algorithm::RadixSort, 0),
            Err(ConfigError::SizeOutOfRange { size: 0, .. })
        ));
    }

    #[test]
    fn parse_rejects_bad_sizes() {
        assert_eq!(
            TestConfig::parse("quicksort", "abc"),
            Err(ConfigError::InvalidSize("abc".into()))
        );
        assert_eq!(
            TestConfig::parse("quicksort", "-5"),
            Err(ConfigError::InvalidSize("-5".into()))
        );
        assert!(TestConfig::parse("quicksort", "0").is_err());
    }

    #[test]
    fn parse_checks_algorithm_first() {
        assert!(matches!(
            TestConfig::parse("bogo", "abc"),
            Err(ConfigError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn reference_configs_are_valid() {
        let configs = reference_configs();
        assert_eq!(configs.len(), REFERENCE_SIZES.len() * Algorithm::ALL.len());
        for config in configs {
            assert_eq!(TestConfig::new(config.algorithm(), config.size()), Ok(config));
        }
    }

    #[test]
    fn parse_valid() {
        let config = TestConfig::parse("radix", "2048").unwrap();
        assert_eq!(config.algorithm(), Algorithm::RadixSort);
        assert_eq!(config.size(), 2048);
    }
}
