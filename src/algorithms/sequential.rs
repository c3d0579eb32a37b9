//! Single threaded summations.
use crate::Element;

/// Sum with a loop and a 64 bits accumulator.
/// Overflow wraps around silently.
pub fn serial_sum(input: &[Element]) -> i64 {
    let mut sum: i64 = 0;
    for &e in input {
        sum = sum.wrapping_add(i64::from(e));
    }
    sum
}

/// Sum through `Iterator::fold`.
/// The accumulator has the width of the elements, so large inputs
/// may wrap around where `serial_sum` would not.
pub fn accumulate_sum(input: &[Element]) -> i64 {
    i64::from(input.iter().fold(0, |acc: Element, &e| acc.wrapping_add(e)))
}
