//! Benchmark configuration.
use crate::error::SumError;
use crate::utils::{clamp_workers, hardware_parallelism};
use crate::Element;
use std::ops::RangeInclusive;

/// Number of elements summed by default.
pub const DEFAULT_LENGTH: usize = 10_000_000;
/// Smallest generated value by default.
pub const DEFAULT_MIN_VALUE: Element = -10;
/// Largest generated value by default.
pub const DEFAULT_MAX_VALUE: Element = 10;

/// What to generate and how many workers to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Input length.
    pub length: usize,
    /// Inclusive range of the generated values.
    pub values: RangeInclusive<Element>,
    /// Worker count. `None` stands for the hardware parallelism.
    pub workers: Option<usize>,
    /// Seed for reproducible inputs. `None` draws from the thread rng.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            length: DEFAULT_LENGTH,
            values: DEFAULT_MIN_VALUE..=DEFAULT_MAX_VALUE,
            workers: None,
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Change the input length.
    pub fn with_length(self, length: usize) -> Self {
        BenchConfig { length, ..self }
    }
    /// Change the range of generated values.
    pub fn with_values(self, values: RangeInclusive<Element>) -> Self {
        BenchConfig { values, ..self }
    }
    /// Fix the worker count instead of asking the hardware.
    pub fn with_workers(self, workers: usize) -> Self {
        BenchConfig {
            workers: Some(workers),
            ..self
        }
    }
    /// Make the generated input reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        BenchConfig {
            seed: Some(seed),
            ..self
        }
    }

    /// Resolve the worker count, never below 1.
    /// The hardware is queried at each call.
    pub fn worker_count(&self) -> usize {
        clamp_workers(self.workers.unwrap_or_else(hardware_parallelism))
    }

    /// Check we can generate an input.
    pub fn validate(&self) -> Result<(), SumError> {
        if self.values.is_empty() {
            Err(SumError::EmptyValueRange {
                min: *self.values.start(),
                max: *self.values.end(),
            })
        } else {
            Ok(())
        }
    }
}
