//! Increment error types.

/// Errors from a bounded increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IncrementError {
    /// The start index lies past the end of the sequence.
    ///
    /// `index == len` is not an error: it names the empty tail.
    #[error("index {index} is larger than sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
