//! Longest Common Subsequence (LCS) implementation
//!
//! Finds the longest subsequence present in both sequences, in order but not
//! necessarily contiguous.
//!
//! # Complexity
//! - Time: O(m*n) for both length and reconstruction
//! - Space: O(min(m,n)) for length (rolling rows), O(m*n) for reconstruction
//!
//! # Reconstruction tie-break
//!
//! The backtrace moves diagonally on a match, otherwise toward the strictly
//! greater of the up/left neighbours, and up (dropping an element of the
//! left operand) when they are equal. When several longest subsequences
//! exist this decides which one is returned.
//!
//! # LCS distance
//!
//! [`LcsDistance`] is `len(a) + len(b) - 2 * lcs_length(a, b)`: the edit
//! distance when only insertions and deletions are allowed. It is not the
//! Levenshtein distance.

use super::matrix::{rolling_cost, AlignmentMatrix, CostModel};
use super::SequenceMetric;
use crate::error::{require, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// LCS calculator; as a metric it yields the subsequence length.
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestCommonSubsequence;

impl LongestCommonSubsequence {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The longest common subsequence itself, rejecting absent operands.
    pub fn reconstruct<T: PartialEq + Clone>(
        &self,
        left: Option<&[T]>,
        right: Option<&[T]>,
    ) -> Result<Vec<T>> {
        let left = require(left, "left sequence")?;
        let right = require(right, "right sequence")?;
        Ok(lcs_seq(left, right))
    }

    /// The longest common subsequence of two strings, rejecting absent
    /// operands.
    pub fn longest_common_subsequence(
        &self,
        left: Option<&str>,
        right: Option<&str>,
    ) -> Result<String> {
        let left = require(left, "left text")?;
        let right = require(right, "right text")?;
        Ok(lcs_string(left, right))
    }
}

impl<T: PartialEq> SequenceMetric<T> for LongestCommonSubsequence {
    type Output = usize;

    fn compare(&self, left: &[T], right: &[T]) -> usize {
        lcs_length_seq(left, right)
    }

    fn name(&self) -> &'static str {
        "lcs"
    }
}

/// Insert/delete-only edit distance derived from the LCS length.
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcsDistance;

impl LcsDistance {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: PartialEq> SequenceMetric<T> for LcsDistance {
    type Output = usize;

    fn compare(&self, left: &[T], right: &[T]) -> usize {
        lcs_distance_seq(left, right)
    }

    fn name(&self) -> &'static str {
        "lcs_distance"
    }
}

/// Length of the LCS of two element sequences.
#[must_use]
pub fn lcs_length_seq<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    rolling_cost(a, b, CostModel::CommonSubsequence, <T as PartialEq>::eq)
}

/// The LCS of two element sequences (full matrix plus backtrace).
#[must_use]
pub fn lcs_seq<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let dp = AlignmentMatrix::build(a, b, CostModel::CommonSubsequence, <T as PartialEq>::eq);

    let mut lcs = Vec::with_capacity(dp.final_cost());
    let mut i = a.len();
    let mut j = b.len();

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            lcs.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp.get(i - 1, j) >= dp.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    lcs.reverse();
    lcs
}

/// `len(a) + len(b) - 2 * lcs_length(a, b)`
#[must_use]
pub fn lcs_distance_seq<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.len() + b.len() - 2 * lcs_length_seq(a, b)
}

/// Calculate the length of the Longest Common Subsequence.
///
/// # Example
/// ```
/// use editwise::algorithms::lcs::lcs_length;
///
/// assert_eq!(lcs_length("abcdef", "defghi"), 3);
/// ```
#[must_use]
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    lcs_length_seq(&a_chars, &b_chars)
}

/// Get the actual LCS string (not just length).
///
/// # Example
/// ```
/// use editwise::algorithms::lcs::lcs_string;
///
/// assert_eq!(lcs_string("abcdef", "defghi"), "def");
/// assert_eq!(lcs_string("", "test"), "");
/// ```
#[must_use]
pub fn lcs_string(a: &str, b: &str) -> String {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    lcs_seq(&a_chars, &b_chars).into_iter().collect()
}

/// Insert/delete-only edit distance between two strings.
#[must_use]
pub fn lcs_distance(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    lcs_distance_seq(&a_chars, &b_chars)
}

/// Calculate LCS-based similarity (0.0 to 1.0).
/// Uses the formula: 2 * LCS_length / (len(a) + len(b))
#[must_use]
pub fn lcs_similarity(a: &str, b: &str) -> f64 {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }
    (2.0 * lcs_length_seq(&a_chars, &b_chars) as f64) / total as f64
}
