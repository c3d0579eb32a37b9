//! This crate compares ways of summing a large slice of integers:
//! a plain loop, a hand rolled static partition between threads,
//! rayon's parallel reduction and a sequential fold.
#![warn(clippy::all)]
#![deny(missing_docs)]

/// Type of the summed integers.
pub type Element = i32;

/// Summation algorithms.
pub(crate) mod algorithms;
pub use algorithms::partitioned::{partitioned_sum, partitioned_sum_with};
pub use algorithms::reduce::reduce_sum;
pub use algorithms::sequential::{accumulate_sum, serial_sum};
pub mod config;
pub use config::BenchConfig;
pub mod error;
pub use error::SumError;
pub mod input;
pub mod partition;
pub use partition::{Partition, Partitions};
pub mod strategy;
pub use strategy::Strategy;
pub mod timing;
pub use timing::{measure, run, Measurement, Report};
pub mod utils;
