//! # stepup-types: Core types for `stepup`
//!
//! This crate contains the value types shared across the workspace:
//! - The integer sequence being mutated ([`Sequence`])
//! - The zero-based offset an increment starts from ([`StartIndex`])
//! - Text parsing failures ([`ParseSequenceError`])

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

// ============================================================================
// StartIndex - Copy (cheap usize value)
// ============================================================================

/// Zero-based offset of the first element an increment touches.
///
/// Any `usize` is a representable index; whether it is *valid* depends on
/// the length of the sequence it is applied to, so range checking happens
/// at the call site rather than here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct StartIndex(usize);

impl StartIndex {
    pub const ZERO: StartIndex = StartIndex(0);

    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index as a `usize` for slicing.
    pub fn as_usize(&self) -> usize {
        self.0
    }

    /// Returns true for index zero, which never touches any element.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Display for StartIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StartIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<StartIndex> for usize {
    fn from(index: StartIndex) -> Self {
        index.0
    }
}

// ============================================================================
// Sequence - Owned, growable buffer of integers
// ============================================================================

/// An ordered, indexable collection of integers.
///
/// `Display` renders the elements space-separated (`"0 1 2"`), and
/// `FromStr` accepts integers separated by any mix of whitespace and commas.
///
/// # Examples
///
/// ```
/// # use stepup_types::Sequence;
/// let seq: Sequence = "0, 1 2,3".parse().unwrap();
/// assert_eq!(seq.as_slice(), &[0, 1, 2, 3]);
/// assert_eq!(seq.to_string(), "0 1 2 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Sequence(Vec<i64>);

impl Sequence {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }

    /// Joins the elements with an arbitrary separator.
    ///
    /// ```
    /// # use stepup_types::Sequence;
    /// let seq = Sequence::from(vec![3, 4, 5]);
    /// assert_eq!(seq.join(","), "3,4,5");
    /// ```
    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.join(" "))
    }
}

impl FromStr for Sequence {
    type Err = ParseSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| {
                token.parse::<i64>().map_err(|_| ParseSequenceError {
                    token: token.to_string(),
                    position,
                })
            })
            .collect()
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl From<Sequence> for Vec<i64> {
    fn from(seq: Sequence) -> Self {
        seq.0
    }
}

impl FromIterator<i64> for Sequence {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[i64]> for Sequence {
    fn as_ref(&self) -> &[i64] {
        &self.0
    }
}

impl AsMut<[i64]> for Sequence {
    fn as_mut(&mut self) -> &mut [i64] {
        &mut self.0
    }
}

/// Error returned when text cannot be parsed into a [`Sequence`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid integer {token:?} at position {position}")]
pub struct ParseSequenceError {
    /// The offending token, as written.
    pub token: String,
    /// Zero-based position of the token among the parsed values.
    pub position: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("", &[]; "empty")]
    #[test_case(" , ,", &[]; "separators only")]
    #[test_case("0 1 2 3 4", &[0, 1, 2, 3, 4]; "spaces")]
    #[test_case("0,1,2", &[0, 1, 2]; "commas")]
    #[test_case("  -3,\t7 ,8\n", &[-3, 7, 8]; "mixed separators")]
    fn parse_accepts_separated_integers(input: &str, expected: &[i64]) {
        let seq: Sequence = input.parse().unwrap();
        assert_eq!(seq.as_slice(), expected);
    }

    #[test]
    fn parse_reports_bad_token_and_position() {
        let err = "1 2 x 4".parse::<Sequence>().unwrap_err();
        assert_eq!(err.token, "x");
        assert_eq!(err.position, 2);
        assert_eq!(err.to_string(), "invalid integer \"x\" at position 2");
    }

    #[test]
    fn display_is_space_separated() {
        assert_eq!(Sequence::from(vec![0, 1, 3, 4, 5]).to_string(), "0 1 3 4 5");
        assert_eq!(Sequence::default().to_string(), "");
    }

    #[test]
    fn serializes_as_plain_array() {
        let seq = Sequence::from(vec![1, 2, 3]);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "[1,2,3]");

        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }

    #[test]
    fn start_index_conversions() {
        let index = StartIndex::from(4);
        assert_eq!(index.as_usize(), 4);
        assert_eq!(usize::from(index), 4);
        assert_eq!(index.to_string(), "4");
        assert!(StartIndex::ZERO.is_zero());
        assert!(!index.is_zero());
    }

    proptest! {
        /// Property: Display output parses back to the same sequence
        #[test]
        fn prop_display_parses_back(values in prop::collection::vec(any::<i64>(), 0..32)) {
            let seq = Sequence::from(values);
            let reparsed: Sequence = seq.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, seq);
        }
    }
}
