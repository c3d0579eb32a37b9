//! All available summation strategies.
use crate::algorithms::{partitioned::partitioned_sum, reduce::reduce_sum, sequential};
use crate::error::SumError;
use crate::Element;
use std::fmt;

/// The four ways we know to sum a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Plain loop on the calling thread.
    Serial,
    /// Static split between a fixed number of threads.
    Partitioned,
    /// Rayon's parallel reduction on the current pool.
    Reduce,
    /// `Iterator::fold` on the calling thread.
    Accumulate,
}

impl Strategy {
    /// Every strategy, in the order they are benchmarked.
    pub const ALL: [Strategy; 4] = [
        Strategy::Serial,
        Strategy::Partitioned,
        Strategy::Reduce,
        Strategy::Accumulate,
    ];

    /// Sum `input`. Only `Partitioned` looks at `workers`.
    pub fn sum(self, input: &[Element], workers: usize) -> Result<i64, SumError> {
        match self {
            Strategy::Serial => Ok(sequential::serial_sum(input)),
            Strategy::Partitioned => partitioned_sum(input, workers),
            Strategy::Reduce => Ok(reduce_sum(input)),
            Strategy::Accumulate => Ok(sequential::accumulate_sum(input)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::Serial => "Serial",
            Strategy::Partitioned => "Parallel",
            Strategy::Reduce => "Reduce",
            Strategy::Accumulate => "Accumulate",
        };
        write!(f, "{}", name)
    }
}
