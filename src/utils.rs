//! Utilities functions to ease life of end users.

/// Number of threads the host can run concurrently.
/// This is the default worker count.
pub fn hardware_parallelism() -> usize {
    num_cpus::get()
}

/// Never go below one worker, partitioning divides by the worker count.
pub fn clamp_workers(workers: usize) -> usize {
    workers.max(1)
}
