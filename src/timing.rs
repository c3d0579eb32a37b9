//! Time strategies and gather the results.
use crate::config::BenchConfig;
use crate::error::SumError;
use crate::input::{random_input, seeded_input};
use crate::strategy::Strategy;
use crate::Element;
use itertools::Itertools;
use log::{info, warn};
use std::fmt;

/// Outcome of running one strategy once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Which strategy ran.
    pub strategy: Strategy,
    /// Wall clock time in milliseconds.
    pub elapsed_ms: f64,
    /// What it computed.
    pub sum: i64,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} time in ms: {}", self.strategy, self.elapsed_ms)?;
        write!(f, "{} Sum: {}", self.strategy, self.sum)
    }
}

/// Run `strategy` on `input` and time it.
pub fn measure(
    strategy: Strategy,
    input: &[Element],
    workers: usize,
) -> Result<Measurement, SumError> {
    let start = time::precise_time_ns();
    let sum = strategy.sum(input, workers)?;
    let end = time::precise_time_ns();
    Ok(Measurement {
        strategy,
        elapsed_ms: ((end - start) as f64) / (1e6 as f64),
        sum,
    })
}

/// All measurements of a run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Input length.
    pub length: usize,
    /// Workers used by the parallel strategies.
    pub workers: usize,
    /// One entry per strategy, in `Strategy::ALL` order.
    pub measurements: Vec<Measurement>,
}

impl Report {
    /// Return the serial sum if it was measured.
    pub fn serial_sum(&self) -> Option<i64> {
        self.measurements
            .iter()
            .find(|m| m.strategy == Strategy::Serial)
            .map(|m| m.sum)
    }

    /// Did all strategies find the same sum ?
    pub fn agreeing(&self) -> bool {
        self.measurements.iter().map(|m| m.sum).all_equal()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.measurements.iter().format("\n\n"))
    }
}

/// Generate the input described by `config` and time every strategy on it.
pub fn run(config: &BenchConfig) -> Result<Report, SumError> {
    config.validate()?;
    let workers = config.worker_count();
    let input = match config.seed {
        Some(seed) => seeded_input(config.length, config.values.clone(), seed),
        None => random_input(config.length, config.values.clone()),
    };
    info!(
        "summing {} elements in {:?} with {} workers",
        config.length, config.values, workers
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;
    let measurements = Strategy::ALL
        .iter()
        .map(|&strategy| -> Result<Measurement, SumError> {
            let measurement = if strategy == Strategy::Reduce {
                pool.install(|| measure(strategy, &input, workers))
            } else {
                measure(strategy, &input, workers)
            }?;
            info!(
                "{}: {} in {:.3}ms",
                strategy, measurement.sum, measurement.elapsed_ms
            );
            Ok(measurement)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let report = Report {
        length: config.length,
        workers,
        measurements,
    };
    if !report.agreeing() {
        warn!(
            "strategies disagree: {}",
            report
                .measurements
                .iter()
                .map(|m| format!("{}={}", m.strategy, m.sum))
                .join(", ")
        );
    }
    Ok(report)
}
