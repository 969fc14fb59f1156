//! Bounded increment of a sequence tail.

use crate::IncrementError;

/// Increments every element from `index` to the end of `sequence` by one.
///
/// Elements before `index` are left untouched and the length never changes.
///
/// - `index == 0` is a no-op.
/// - `index == sequence.len()` is a no-op (the tail is empty).
/// - `index > sequence.len()` is rejected and `sequence` is left unchanged.
///
/// Arithmetic wraps, so `i64::MAX` becomes `i64::MIN`.
///
/// # Errors
///
/// Returns [`IncrementError::IndexOutOfRange`] if `index` exceeds the
/// sequence length.
///
/// # Examples
///
/// ```
/// use stepup::increment_from;
///
/// let mut seq = [0, 1, 2, 3, 4];
/// increment_from(&mut seq, 2).unwrap();
/// assert_eq!(seq, [0, 1, 3, 4, 5]);
/// ```
pub fn increment_from(sequence: &mut [i64], index: usize) -> Result<(), IncrementError> {
    let len = sequence.len();

    // Strict comparison: index == len names the empty tail.
    if index > len {
        tracing::warn!(index, len, "start index past end of sequence");
        return Err(IncrementError::IndexOutOfRange { index, len });
    }

    if index == 0 {
        return Ok(());
    }

    bump_tail(&mut sequence[index..]);

    tracing::debug!(index, len, touched = len - index, "incremented sequence tail");
    Ok(())
}

/// Returning form of [`increment_from`]: produces a new vector and leaves
/// `sequence` untouched.
///
/// # Errors
///
/// Returns [`IncrementError::IndexOutOfRange`] if `index` exceeds the
/// sequence length.
pub fn incremented_from(sequence: &[i64], index: usize) -> Result<Vec<i64>, IncrementError> {
    let mut out = sequence.to_vec();
    increment_from(&mut out, index)?;
    Ok(out)
}

/// Adds one to every element of `tail`.
pub(crate) fn bump_tail(tail: &mut [i64]) {
    for value in tail {
        *value = value.wrapping_add(1);
    }
}
