use crate::{KernelError, Result};

/// Sums a sequence. An empty sequence sums to zero.
pub fn sum_sequence(data: &[i64]) -> Result<i64> {
    data.iter()
        .try_fold(0_i64, |total, &value| total.checked_add(value))
        .ok_or(KernelError::overflow("sum"))
}

/// Counts how many elements of `data` equal `target`.
pub fn count_occurrences<T: PartialEq>(data: &[T], target: &T) -> usize {
    data.iter().filter(|&value| value == target).count()
}

/// Counts how many times `target` occurs in `data`.
pub fn count_char(data: &[char], target: char) -> usize {
    count_occurrences(data, &target)
}
