//! Jaccard similarity over element sets
//!
//! `|A ∩ B| / |A ∪ B|` where A and B are the sets of distinct elements of
//! each sequence. Order and multiplicity are ignored.

use super::SequenceMetric;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Jaccard similarity calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JaccardSimilarity;

impl JaccardSimilarity {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Hash + Eq> SequenceMetric<T> for JaccardSimilarity {
    type Output = f64;

    fn compare(&self, left: &[T], right: &[T]) -> f64 {
        jaccard_seq(left, right)
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

/// Jaccard similarity of the element sets of two sequences.
///
/// Two empty sequences are identical (`1.0`); one empty side gives `0.0`.
#[must_use]
pub fn jaccard_seq<T: Hash + Eq>(a: &[T], b: &[T]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: AHashSet<&T> = a.iter().collect();
    let set_b: AHashSet<&T> = b.iter().collect();
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    intersection as f64 / union as f64
}

/// Jaccard similarity of the character sets of two strings.
///
/// # Example
/// ```
/// use editwise::algorithms::jaccard::jaccard_similarity;
///
/// assert_eq!(jaccard_similarity("abc", "acb"), 1.0);
/// assert_eq!(jaccard_similarity("test", "testing"), 0.5);
/// ```
#[must_use]
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    jaccard_seq(&a_chars, &b_chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::TextMetric;

    #[test]
    fn test_absent_operands() {
        let jac = JaccardSimilarity::new();
        assert!(jac.apply_text(None, Some("test")).is_err());
        assert!(jac.apply_text(Some("test"), None).is_err());
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(jaccard_similarity("", ""), 1.0);
        assert_eq!(jaccard_similarity("", "abc"), 0.0);
    }

    #[test]
    fn test_identical_and_disjoint() {
        assert_eq!(jaccard_similarity("abcd", "abcd"), 1.0);
        assert_eq!(jaccard_similarity("testing", "testing"), 1.0);
        assert_eq!(jaccard_similarity("testing", "qwry"), 0.0);
        assert_eq!(jaccard_similarity("abcd", "efgh"), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        assert_eq!(jaccard_similarity("abc", "acb"), 1.0);
        assert_eq!(jaccard_similarity("test", "testing"), 0.5);
        // {h,a,m,b,u,r,g,e} vs {p,i,z,a}: one shared of eleven
        assert!((jaccard_similarity("hamburger", "pizza") - 1.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_metric_on_tokens() {
        let jac = JaccardSimilarity::new();
        let a = ["red", "green", "blue"];
        let b = ["green", "blue", "yellow"];
        assert_eq!(jac.compare(&a[..], &b[..]), 0.5);
    }
}
