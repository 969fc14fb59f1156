//! # stepup: Bounded increments over integer sequences
//!
//! This crate increments the tail of an integer sequence in place:
//!
//! - **[`increment_from`]**: add one to every element from a start index to
//!   the end, rejecting indices past the end
//! - **[`incremented_from`]**: the same, returning a new vector
//! - **[`cascade`]**: run the increment at every index in ascending order
//!
//! # Boundaries
//!
//! ```text
//!   index:   0     1     2     3     4     5 (= len)   6
//!          ┌─────┬─────┬─────┬─────┬─────┐
//!   seq:   │  0  │  1  │  2  │  3  │  4  │
//!          └─────┴─────┴─────┴─────┴─────┘
//!   from 0 → no-op
//!   from 2 →             +1    +1    +1
//!   from 5 → no-op (empty tail)
//!   from 6 → IndexOutOfRange
//! ```
//!
//! # Example
//!
//! ```
//! use stepup::{increment_from, IncrementError};
//!
//! let mut seq = [0, 1, 2, 3, 4];
//!
//! increment_from(&mut seq, 5).unwrap();
//! assert_eq!(seq, [0, 1, 2, 3, 4]);
//!
//! let err = increment_from(&mut seq, 6).unwrap_err();
//! assert_eq!(err, IncrementError::IndexOutOfRange { index: 6, len: 5 });
//! ```

mod cascade;
mod error;
mod ext;
mod increment;

pub use cascade::cascade;
pub use error::IncrementError;
pub use ext::SequenceExt;
pub use increment::{increment_from, incremented_from};
