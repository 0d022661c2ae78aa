//! Levenshtein (edit) distance, scalar form
//!
//! Computes only the final cost, so it runs on the rolling representation of
//! the alignment matrix:
//! - Two rows sized to the shorter operand, O(min(m,n)) memory
//! - Optional threshold: the rows shrink to a diagonal band and the
//!   computation stops once the bound is provably exceeded
//! - Elements compared with `PartialEq`, no normalization
//!
//! For per-operation counts see [`detailed`](super::detailed).

use super::matrix::{bounded_cost, rolling_cost, CostModel};
use super::SequenceMetric;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Outcome of a possibly bounded distance computation.
///
/// `ExceedsThreshold` is distinct from every valid distance; check for it
/// before treating the value as a true distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distance {
    /// The exact edit distance
    Exact(usize),
    /// The distance is greater than the configured threshold
    ExceedsThreshold,
}

impl Distance {
    /// The exact distance, or `None` past the threshold.
    #[must_use]
    pub fn value(self) -> Option<usize> {
        match self {
            Distance::Exact(d) => Some(d),
            Distance::ExceedsThreshold => None,
        }
    }

    #[must_use]
    pub fn is_exceeded(self) -> bool {
        matches!(self, Distance::ExceedsThreshold)
    }
}

impl From<Option<usize>> for Distance {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Distance::ExceedsThreshold, Distance::Exact)
    }
}

impl PartialEq<usize> for Distance {
    fn eq(&self, other: &usize) -> bool {
        matches!(self, Distance::Exact(d) if d == other)
    }
}

/// Levenshtein distance calculator with optional early termination
///
/// Holds only its threshold, so a single instance can be shared freely.
///
/// # Complexity
/// - Time: O(m*n) where m and n are sequence lengths
/// - Space: O(min(m,n)) using the rolling two-row matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevenshteinDistance {
    threshold: Option<usize>,
}

impl LevenshteinDistance {
    /// Unbounded: always computes the exact distance.
    #[must_use]
    pub fn new() -> Self {
        Self { threshold: None }
    }

    /// Bounded: distances above `threshold` come back as
    /// [`Distance::ExceedsThreshold`].
    #[must_use]
    pub fn with_threshold(threshold: usize) -> Self {
        Self {
            threshold: Some(threshold),
        }
    }

    #[must_use]
    pub fn threshold(&self) -> Option<usize> {
        self.threshold
    }
}

impl<T: PartialEq> SequenceMetric<T> for LevenshteinDistance {
    type Output = Distance;

    fn compare(&self, left: &[T], right: &[T]) -> Distance {
        match self.threshold {
            Some(max_d) => levenshtein_seq_bounded(left, right, max_d).into(),
            None => Distance::Exact(levenshtein_seq(left, right)),
        }
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Levenshtein distance between two element sequences.
///
/// # Example
/// ```
/// use editwise::algorithms::levenshtein::levenshtein_seq;
///
/// assert_eq!(levenshtein_seq(&[1, 2, 3], &[1, 3]), 1);
/// ```
#[inline]
#[must_use]
pub fn levenshtein_seq<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    rolling_cost(a, b, CostModel::Levenshtein, <T as PartialEq>::eq)
}

/// Levenshtein distance between two element sequences, bounded by
/// `max_distance`.
///
/// Returns `None` if the distance exceeds `max_distance`.
#[inline]
#[must_use]
pub fn levenshtein_seq_bounded<T: PartialEq>(
    a: &[T],
    b: &[T],
    max_distance: usize,
) -> Option<usize> {
    bounded_cost(a, b, max_distance, <T as PartialEq>::eq)
}

/// Levenshtein distance between two strings, compared by `char`.
///
/// # Example
/// ```
/// use editwise::algorithms::levenshtein::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abcd"), 4);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    levenshtein_seq(&a_chars, &b_chars)
}

/// Levenshtein distance between two strings with a max threshold.
///
/// Returns `None` if distance exceeds `max_distance` (early termination).
///
/// # Example
/// ```
/// use editwise::algorithms::levenshtein::levenshtein_bounded;
///
/// // Within threshold - returns actual distance
/// assert_eq!(levenshtein_bounded("abc", "abd", 2), Some(1));
///
/// // Exceeds threshold - returns None
/// assert_eq!(levenshtein_bounded("abcdef", "ghijkl", 3), None);
/// ```
#[inline]
#[must_use]
pub fn levenshtein_bounded(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    if a == b {
        return Some(0);
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    levenshtein_seq_bounded(&a_chars, &b_chars, max_distance)
}

/// Normalized similarity (0.0 to 1.0): `1 - distance / max_len`.
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let dist = levenshtein(a, b);
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        1.0 - (dist as f64 / max_len as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::TextMetric;
    use crate::error::SimilarityError;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
        assert_eq!(levenshtein("test", "testing"), 3);
    }

    #[test]
    fn test_regular_values() {
        assert_eq!(levenshtein("a", "b"), 1);
        assert_eq!(levenshtein("qwerty", "erty"), 2);
        assert_eq!(levenshtein("erty", "qwerty"), 2);
        assert_eq!(levenshtein("aaa", "bbb"), 3);
        assert_eq!(levenshtein("abc", "cde"), 3);
        assert_eq!(levenshtein("testing", "test"), 3);
        assert_eq!(levenshtein("ab", "ba"), 2);
        assert_eq!(levenshtein("intention", "execution"), 5);
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(levenshtein("Test", "test"), 1);
    }

    #[test]
    fn test_generic_elements() {
        let a = ["the", "quick", "brown", "fox"];
        let b = ["the", "slow", "brown", "fox", "jumps"];
        assert_eq!(levenshtein_seq(&a, &b), 2);
        assert_eq!(levenshtein_seq::<u8>(&[], &[]), 0);
    }

    #[test]
    fn test_levenshtein_bounded() {
        assert_eq!(levenshtein_bounded("abcdef", "ghijkl", 3), None);
        assert_eq!(levenshtein_bounded("abc", "abd", 2), Some(1));
        assert_eq!(levenshtein_bounded("abc", "abc", 0), Some(0));
        assert_eq!(levenshtein_bounded("kitten", "sitting", 3), Some(3));
        assert_eq!(levenshtein_bounded("kitten", "sitting", 2), None);
    }

    #[test]
    fn test_metric_unbounded() {
        let lev = LevenshteinDistance::new();
        assert_eq!(lev.threshold(), None);
        assert_eq!(lev.apply_text(Some("kitten"), Some("sitting")), Ok(Distance::Exact(3)));
        assert_eq!(lev.apply_text(Some(""), Some("a")), Ok(Distance::Exact(1)));
        assert_eq!(lev.apply_text(Some("a"), Some("")), Ok(Distance::Exact(1)));
        assert_eq!(SequenceMetric::<char>::name(&lev), "levenshtein");
    }

    #[test]
    fn test_metric_threshold_sentinel() {
        let lev = LevenshteinDistance::with_threshold(2);
        let within = lev.compare_text("abc", "abd");
        assert_eq!(within, 1);
        assert_eq!(within.value(), Some(1));

        let over = lev.compare_text("abc", "xyz");
        assert!(over.is_exceeded());
        assert_eq!(over.value(), None);
        assert_ne!(over, Distance::Exact(3));
    }

    #[test]
    fn test_metric_rejects_absent_operands() {
        let lev = LevenshteinDistance::new();
        assert!(matches!(
            lev.apply_text(None, Some("test")),
            Err(SimilarityError::InvalidArgument(_))
        ));
        assert!(matches!(
            lev.apply_text(Some("test"), None),
            Err(SimilarityError::InvalidArgument(_))
        ));
        assert!(lev.apply(None::<&[u8]>, Some(&b"abc"[..])).is_err());
    }

    #[test]
    fn test_long_repeated_blocks() {
        let word1 = "abcabc".repeat(999);
        let word3 = "defdef".repeat(999);
        assert_eq!(levenshtein(&word1, &word1), 0);
        assert_eq!(levenshtein(&word1, &word3), 5994);
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("abc", "abc"), 1.0);
        assert_eq!(levenshtein_similarity("abc", "xyz"), 0.0);
        assert!((levenshtein_similarity("abcd", "abce") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_config_serde() {
        let lev = LevenshteinDistance::with_threshold(4);
        let json = serde_json::to_string(&lev).unwrap();
        let back: LevenshteinDistance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lev);
    }
}
