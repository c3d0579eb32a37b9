//! Library provided parallel reduction.
use crate::Element;
use rayon::prelude::*;

/// Parallel reduction with rayon on the current thread pool.
/// Like `accumulate_sum`, partial results have the width of the elements.
pub fn reduce_sum(input: &[Element]) -> i64 {
    i64::from(
        input
            .par_iter()
            .cloned()
            .reduce(|| 0, |left_sum, right_sum| left_sum.wrapping_add(right_sum)),
    )
}
