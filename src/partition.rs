//! Static range partitioning.
//!
//! A sequence of length `L` is cut into `W` contiguous half-open ranges.
//! The first `W - 1` ranges all hold `L / W` elements and the last one
//! absorbs whatever the truncated division left over, so it may be up to
//! `W - 1` elements longer than the others.
use crate::utils::clamp_workers;
use std::iter::FusedIterator;
use std::ops::Range;

/// The half-open range of the input assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Index of the worker owning this range.
    pub worker: usize,
    /// First index (inclusive).
    pub start: usize,
    /// Last index (exclusive).
    pub end: usize,
}

impl Partition {
    /// Return the covered indices.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
    /// Number of elements in the partition.
    pub fn len(&self) -> usize {
        self.end - self.start
    }
    /// Leading partitions are empty whenever there are more workers than elements.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Iterator on all partitions of `[0, length)`, in worker order.
#[derive(Debug, Clone)]
pub struct Partitions {
    length: usize,
    workers: usize,
    elements_per_worker: usize,
    front: usize,
    back: usize,
}

impl Partitions {
    /// Split `length` elements between `workers` workers.
    /// A worker count of 0 is treated as 1.
    pub fn new(length: usize, workers: usize) -> Self {
        let workers = clamp_workers(workers);
        Partitions {
            length,
            workers,
            elements_per_worker: length / workers,
            front: 0,
            back: workers,
        }
    }

    /// Size of every partition but the last one.
    pub fn elements_per_worker(&self) -> usize {
        self.elements_per_worker
    }

    /// Number of workers, after clamping.
    pub fn workers(&self) -> usize {
        self.workers
    }

    fn nth_partition(&self, worker: usize) -> Partition {
        let start = worker * self.elements_per_worker;
        let end = if worker + 1 == self.workers {
            self.length
        } else {
            start + self.elements_per_worker
        };
        Partition { worker, start, end }
    }
}

impl Iterator for Partitions {
    type Item = Partition;
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            let partition = self.nth_partition(self.front);
            self.front += 1;
            Some(partition)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Partitions {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            self.back -= 1;
            Some(self.nth_partition(self.back))
        }
    }
}

impl ExactSizeIterator for Partitions {}
impl FusedIterator for Partitions {}
