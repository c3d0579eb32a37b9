//! Errors raised while running summation strategies.
use crate::Element;
use thiserror::Error;

/// Everything that can go wrong in a benchmark run.
#[derive(Debug, Error)]
pub enum SumError {
    /// A dispatched worker panicked before writing its partial sum.
    #[error("worker {worker} panicked while summing its partition")]
    WorkerPanicked {
        /// Index of the first worker found panicking.
        worker: usize,
    },
    /// Random input can only be drawn from a non-empty range.
    #[error("empty value range {min}..={max}")]
    EmptyValueRange {
        /// Lower bound.
        min: Element,
        /// Upper bound.
        max: Element,
    },
    /// Rayon refused to build the pool for the library reduction.
    #[error("thread pool build failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
