//! Sorting Algorithm Benchmark
//!
//! Times and verifies an in-place quicksort and an LSD radix sort over
//! reproducible integer arrays.

pub mod cli;
pub mod config;
pub mod error;
pub mod harness;
pub mod quicksort;
pub mod radix;
pub mod report;

pub use config::{Algorithm, TestConfig};
pub use error::{ConfigError, Error, Result};

/// Trait for sorting implementations
pub trait Sorter {
    /// Sort the slice in-place in ascending order
    fn sort(&self, data: &mut [i32]);
}
