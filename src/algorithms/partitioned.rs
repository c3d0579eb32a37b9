//! Hand rolled partition and reduce.
//!
//! The input is cut statically into one contiguous partition per worker
//! (see `Partitions`). All partitions but the last are summed on scoped
//! threads, the last one on the calling thread. Once every worker has been
//! joined the partial sums are added sequentially.
use super::sequential::serial_sum;
use crate::error::SumError;
use crate::partition::{Partition, Partitions};
use crate::utils::clamp_workers;
use crate::Element;
use crossbeam::thread::{Scope, ScopedJoinHandle};
use log::debug;
use smallvec::{smallvec, SmallVec};

/// Partial sums and partitions stay on the stack up to this many workers.
const INLINE_WORKERS: usize = 32;

/// Sum `input` with `workers` threads (the calling one included).
/// A worker count of 0 is treated as 1.
pub fn partitioned_sum(input: &[Element], workers: usize) -> Result<i64, SumError> {
    partitioned_sum_with(input, workers, serial_sum)
}

/// Same as `partitioned_sum` but every partition is summed with `kernel`.
pub fn partitioned_sum_with<K>(input: &[Element], workers: usize, kernel: K) -> Result<i64, SumError>
where
    K: Fn(&[Element]) -> i64 + Sync,
{
    let workers = clamp_workers(workers);
    let partitions: SmallVec<[Partition; INLINE_WORKERS]> =
        Partitions::new(input.len(), workers).collect();
    let mut slots: SmallVec<[i64; INLINE_WORKERS]> = smallvec![0; workers];

    let (last_partition, dispatched) = partitions.split_last().expect("at least one worker");
    let (last_slot, worker_slots) = slots.split_last_mut().expect("at least one worker");
    let kernel = &kernel;

    let failed_worker = crossbeam::thread::scope(move |scope| {
        let handles: Vec<_> = dispatched
            .iter()
            .zip(worker_slots.iter_mut())
            .map(|(partition, slot)| {
                debug!(
                    "dispatching worker {} on {:?}",
                    partition.worker,
                    partition.range()
                );
                dispatch(scope, &input[partition.range()], slot, kernel)
            })
            .collect();

        *last_slot = kernel(&input[last_partition.range()]);

        // join everyone before looking at any result
        let mut failed_worker = None;
        for (worker, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && failed_worker.is_none() {
                failed_worker = Some(worker);
            }
        }
        failed_worker
    })
    // crossbeam only reports panics of threads nobody joined, all were joined above
    .expect("every worker joined");

    if let Some(worker) = failed_worker {
        return Err(SumError::WorkerPanicked { worker });
    }
    Ok(slots.iter().fold(0i64, |sum, &s| sum.wrapping_add(s)))
}

/// Start one worker on a read only view of its partition.
/// The worker is the only one writing to `slot`.
fn dispatch<'env, 'scope, K>(
    scope: &'scope Scope<'env>,
    view: &'env [Element],
    slot: &'env mut i64,
    kernel: &'env K,
) -> ScopedJoinHandle<'scope, ()>
where
    K: Fn(&[Element]) -> i64 + Sync,
{
    scope.spawn(move |_| {
        *slot = kernel(view);
    })
}
