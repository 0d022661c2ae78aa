//! editwise - Sequence alignment metrics
//!
//! Edit distance and common-subsequence algorithms over arbitrary element
//! sequences, with optional Python bindings.
//!
//! # Features
//! - Levenshtein distance: exact, threshold-bounded, and with per-operation counts
//! - Longest common subsequence: length, reconstruction, LCS distance
//! - Edit scripts with visitor-based consumption
//! - Cosine and Jaccard similarity as collaborator metrics
//! - Parallel batch evaluation
//!
//! Every metric takes its operands as `Option`s at the checked entry points
//! ([`SequenceMetric::apply`], [`TextMetric::apply_text`]): an absent operand
//! is an [`SimilarityError::InvalidArgument`], never a panic. The `compare`
//! and free-function forms take present slices and cannot fail.
//!
//! # Example
//! ```
//! use editwise::{levenshtein_detailed, lcs_string, Distance, LevenshteinDistance, TextMetric};
//!
//! let bounded = LevenshteinDistance::with_threshold(2);
//! assert_eq!(bounded.apply_text(Some("kitten"), Some("sitting")), Ok(Distance::ExceedsThreshold));
//! assert_eq!(levenshtein_detailed("kitten", "sitting").substitute_count(), 2);
//! assert_eq!(lcs_string("ABCDGH", "AEDFHR"), "ADH");
//! ```

pub mod algorithms;
pub mod batch;
pub mod config;
pub mod diff;
pub mod error;

// Python extension module (enabled with python feature)
#[cfg(feature = "python")]
mod python;

pub use algorithms::{
    cosine_distance, cosine_similarity, jaccard_similarity, lcs_distance,
    lcs_length, lcs_string, levenshtein, levenshtein_bounded, levenshtein_detailed, AlignmentMatrix,
    CosineDistance, CostModel, Distance, EditDistanceFrom, JaccardSimilarity, LcsDistance,
    LevenshteinDetailedDistance, LevenshteinDistance, LevenshteinResult, LongestCommonSubsequence,
    SequenceMetric, TextMetric,
};
pub use batch::distances_from;
pub use config::{MetricConfig, Score};
pub use diff::{
    edit_script, edit_script_text, CommandCounter, CommandKind, CommandVisitor, EditCommand,
    EditScript, ScriptApplier,
};
pub use error::{Result, SimilarityError};
