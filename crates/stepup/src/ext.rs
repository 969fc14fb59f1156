//! Method-call access to the increments for [`Sequence`].

use stepup_types::{Sequence, StartIndex};

use crate::IncrementError;

/// Extension methods that run the slice operations on a [`Sequence`].
///
/// ```
/// use stepup::SequenceExt;
/// use stepup_types::{Sequence, StartIndex};
///
/// let mut seq = Sequence::from(vec![0, 1, 2, 3, 4]);
/// seq.increment_from(StartIndex::new(2)).unwrap();
/// assert_eq!(seq.to_string(), "0 1 3 4 5");
/// ```
pub trait SequenceExt {
    /// See [`increment_from`](crate::increment_from).
    fn increment_from(&mut self, index: StartIndex) -> Result<(), IncrementError>;

    /// See [`cascade`](crate::cascade).
    fn cascade(&mut self);
}

impl SequenceExt for Sequence {
    fn increment_from(&mut self, index: StartIndex) -> Result<(), IncrementError> {
        crate::increment_from(self.as_mut_slice(), index.as_usize())
    }

    fn cascade(&mut self) {
        crate::cascade(self.as_mut_slice());
    }
}
