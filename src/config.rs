//! Metric selection as data
//!
//! [`MetricConfig`] names a metric together with its parameters so the
//! choice can live in a config file or travel over the wire. Evaluating a
//! config on two strings yields a [`Score`], whose variant depends on the
//! metric.

use crate::algorithms::{
    CosineDistance, Distance, JaccardSimilarity, LcsDistance, LevenshteinDetailedDistance,
    LevenshteinDistance, LevenshteinResult, LongestCommonSubsequence, TextMetric,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A metric and its parameters
///
/// # Example
/// ```rust
/// use editwise::config::{MetricConfig, Score};
/// use editwise::algorithms::Distance;
///
/// let config = MetricConfig::Levenshtein { threshold: Some(2) };
/// assert_eq!(
///     config.evaluate(Some("kitten"), Some("sitting")).unwrap(),
///     Score::Distance(Distance::ExceedsThreshold),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricConfig {
    /// Scalar edit distance
    ///
    /// `threshold: None` computes the exact distance; `Some(k)` reports any
    /// distance above `k` as exceeded.
    Levenshtein {
        #[serde(default)]
        threshold: Option<usize>,
    },

    /// Edit distance with insert/delete/substitute counts
    LevenshteinDetailed,

    /// Length of the longest common subsequence
    LongestCommonSubsequence,

    /// Insert/delete-only distance, `len(a) + len(b) - 2 * lcs`
    LcsDistance,

    /// Character-set Jaccard similarity
    Jaccard,

    /// `1 - cosine` of word-token frequencies. Rejects blank text.
    CosineDistance,
}

impl Default for MetricConfig {
    fn default() -> Self {
        MetricConfig::Levenshtein { threshold: None }
    }
}

/// Result of evaluating a [`MetricConfig`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Score {
    /// From `Levenshtein`
    Distance(Distance),
    /// From `LevenshteinDetailed`
    Detailed(LevenshteinResult),
    /// From `LongestCommonSubsequence` and `LcsDistance`
    Count(usize),
    /// From `Jaccard` and `CosineDistance`
    Ratio(f64),
}

impl MetricConfig {
    /// Evaluate the configured metric on two strings.
    ///
    /// Absent operands fail with `InvalidArgument`, as does blank text for
    /// `CosineDistance`.
    pub fn evaluate(&self, left: Option<&str>, right: Option<&str>) -> Result<Score> {
        match self {
            MetricConfig::Levenshtein { threshold } => {
                let metric = match threshold {
                    Some(t) => LevenshteinDistance::with_threshold(*t),
                    None => LevenshteinDistance::new(),
                };
                metric.apply_text(left, right).map(Score::Distance)
            }
            MetricConfig::LevenshteinDetailed => LevenshteinDetailedDistance::new()
                .apply_text(left, right)
                .map(Score::Detailed),
            MetricConfig::LongestCommonSubsequence => LongestCommonSubsequence::new()
                .apply_text(left, right)
                .map(Score::Count),
            MetricConfig::LcsDistance => {
                LcsDistance::new().apply_text(left, right).map(Score::Count)
            }
            MetricConfig::Jaccard => JaccardSimilarity::new()
                .apply_text(left, right)
                .map(Score::Ratio),
            MetricConfig::CosineDistance => {
                CosineDistance::new().apply(left, right).map(Score::Ratio)
            }
        }
    }

    /// Name of the configured metric, as reported by the metric itself
    pub fn name(&self) -> &'static str {
        match self {
            MetricConfig::Levenshtein { .. } => "levenshtein",
            MetricConfig::LevenshteinDetailed => "levenshtein_detailed",
            MetricConfig::LongestCommonSubsequence => "lcs",
            MetricConfig::LcsDistance => "lcs_distance",
            MetricConfig::Jaccard => "jaccard",
            MetricConfig::CosineDistance => CosineDistance::new().name(),
        }
    }
}
