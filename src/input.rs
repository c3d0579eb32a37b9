//! Random inputs.
use crate::Element;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// `length` integers drawn uniformly in `values`.
/// Panics if `values` is empty, see `BenchConfig::validate`.
pub fn random_input(length: usize, values: RangeInclusive<Element>) -> Vec<Element> {
    generate(&mut rand::thread_rng(), length, values)
}

/// Same as `random_input` but reproducible.
pub fn seeded_input(length: usize, values: RangeInclusive<Element>, seed: u64) -> Vec<Element> {
    generate(&mut StdRng::seed_from_u64(seed), length, values)
}

fn generate<R: Rng>(rng: &mut R, length: usize, values: RangeInclusive<Element>) -> Vec<Element> {
    rng.sample_iter(Uniform::from(values)).take(length).collect()
}
