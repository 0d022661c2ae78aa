//! Cosine similarity implementation
//!
//! Treats inputs as term-frequency vectors and computes the cosine of the
//! angle between them. No alignment is involved.
//!
//! # Complexity
//! - Time: O(m+n) for building frequency maps and computing similarity
//! - Space: O(unique_tokens) for frequency maps

use crate::error::{require, Result, SimilarityError};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Builds a frequency map from an iterator of items.
///
/// Counts occurrences of each unique item for constructing
/// term frequency vectors used in cosine similarity calculation.
fn build_frequency_map<T, I>(iter: I) -> AHashMap<T, usize>
where
    T: Hash + Eq,
    I: Iterator<Item = T>,
{
    let mut map = AHashMap::new();
    for item in iter {
        *map.entry(item).or_insert(0) += 1;
    }
    map
}

/// Word-token frequencies of `text`.
///
/// A token is a maximal run of ASCII letters, ASCII digits or `_`. Any other
/// character, accented letters included, separates tokens. Tokens are
/// case-sensitive.
pub fn term_frequencies(text: &str) -> AHashMap<&str, usize> {
    build_frequency_map(
        text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|t| !t.is_empty()),
    )
}

/// Cosine similarity of two frequency vectors.
///
/// The dot product runs over the keys both vectors share. Returns `0.0`
/// when either vector has zero magnitude, so two empty vectors are `0.0`.
/// Absent vectors are rejected.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use editwise::algorithms::cosine::cosine_similarity;
///
/// let v: HashMap<&str, usize> = [("a", 1), ("b", 2)].into_iter().collect();
/// let sim = cosine_similarity(Some(&v), Some(&v)).unwrap();
/// assert!((sim - 1.0).abs() < 1e-9);
/// ```
pub fn cosine_similarity<K, S>(
    left: Option<&HashMap<K, usize, S>>,
    right: Option<&HashMap<K, usize, S>>,
) -> Result<f64>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    let left = require(left, "left vector")?;
    let right = require(right, "right vector")?;
    Ok(cosine_from_maps(left, right))
}

fn cosine_from_maps<K, S>(map_a: &HashMap<K, usize, S>, map_b: &HashMap<K, usize, S>) -> f64
where
    K: Hash + Eq,
    S: BuildHasher,
{
    let mut dot_product = 0.0f64;
    let mut magnitude_a = 0.0f64;
    let mut magnitude_b = 0.0f64;

    for (key, &count_a) in map_a {
        let count_a = count_a as f64;
        magnitude_a += count_a * count_a;

        if let Some(&count_b) = map_b.get(key) {
            dot_product += count_a * count_b as f64;
        }
    }

    for &count_b in map_b.values() {
        let count_b = count_b as f64;
        magnitude_b += count_b * count_b;
    }

    if magnitude_a <= 0.0 || magnitude_b <= 0.0 {
        return 0.0;
    }
    dot_product / (magnitude_a * magnitude_b).sqrt()
}

/// Cosine distance between two texts: `1 - cosine_similarity` of their
/// word-token frequencies.
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosineDistance;

impl CosineDistance {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Blank (empty or whitespace-only) texts are rejected along with
    /// absent ones.
    pub fn apply(&self, left: Option<&str>, right: Option<&str>) -> Result<f64> {
        let left = require(left, "left text")?;
        let right = require(right, "right text")?;
        if left.trim().is_empty() || right.trim().is_empty() {
            return Err(SimilarityError::invalid("invalid text: blank input"));
        }
        Ok(cosine_distance(left, right))
    }

    pub fn name(&self) -> &'static str {
        "cosine_distance"
    }
}

/// `1 - cosine similarity` of the word-token frequencies of two texts.
#[must_use]
pub fn cosine_distance(a: &str, b: &str) -> f64 {
    let map_a = term_frequencies(a);
    let map_b = term_frequencies(b);
    1.0 - cosine_from_maps(&*map_a, &*map_b)
}
