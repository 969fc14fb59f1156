//! Applying the bounded increment at every index in turn.

use crate::increment::bump_tail;

/// Has the effect of calling [`increment_from`](crate::increment_from) at
/// each index of `sequence`, from `0` up to `len - 1`.
///
/// Every index in that range is in bounds, so the range check is skipped
/// and the tails are bumped directly. One summary event is logged rather
/// than one per index. The element
/// at position `p` ends up `p` larger than it started: index `0` is the
/// no-op, and each index `1..=p` touches it once.
///
/// ```
/// let mut seq = [0, 1, 2, 3, 4];
/// stepup::cascade(&mut seq);
/// assert_eq!(seq, [0, 2, 4, 6, 8]);
/// ```
pub fn cascade(sequence: &mut [i64]) {
    let len = sequence.len();

    for index in 1..len {
        bump_tail(&mut sequence[index..]);
    }

    tracing::debug!(len, "cascaded increments over sequence");
}
