//! Core sequence alignment algorithms
//!
//! Each algorithm is implemented as a standalone function for composability,
//! plus a trait-based interface ([`SequenceMetric`]) that carries the shared
//! absent-operand policy.

pub mod cosine;
pub mod detailed;
pub mod from;
pub mod jaccard;
pub mod lcs;
pub mod levenshtein;
pub mod matrix;

pub use cosine::*;
pub use detailed::*;
pub use from::*;
pub use jaccard::*;
pub use lcs::*;
pub use levenshtein::*;
pub use matrix::{AlignmentMatrix, CostModel};

use crate::error::{require, Result};
use smallvec::SmallVec;

/// A function from two sequences to a result of a declared type.
///
/// Implementations provide [`compare`](SequenceMetric::compare) over present
/// operands; [`apply`](SequenceMetric::apply) adds the shared failure policy:
/// an absent operand is rejected with `InvalidArgument` before any work is
/// done. Metrics hold configuration only, so one instance can be shared
/// across threads.
pub trait SequenceMetric<T>: Send + Sync {
    type Output;

    /// Evaluate the metric on two present sequences.
    fn compare(&self, left: &[T], right: &[T]) -> Self::Output;

    /// Evaluate the metric, rejecting absent operands.
    fn apply(&self, left: Option<&[T]>, right: Option<&[T]>) -> Result<Self::Output> {
        let left = require(left, "left sequence")?;
        let right = require(right, "right sequence")?;
        Ok(self.compare(left, right))
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// String entry points for metrics over `char` sequences.
///
/// Strings are compared by Unicode scalar value. Callers that need grapheme
/// clusters or case folding tokenize/normalize first and use the slice API.
pub trait TextMetric: SequenceMetric<char> {
    /// Evaluate on two present strings.
    fn compare_text(&self, left: &str, right: &str) -> Self::Output {
        let a: SmallVec<[char; 64]> = left.chars().collect();
        let b: SmallVec<[char; 64]> = right.chars().collect();
        self.compare(&a, &b)
    }

    /// Evaluate on two strings, rejecting absent operands.
    fn apply_text(&self, left: Option<&str>, right: Option<&str>) -> Result<Self::Output> {
        let left = require(left, "left text")?;
        let right = require(right, "right text")?;
        Ok(self.compare_text(left, right))
    }
}

impl<M: SequenceMetric<char> + ?Sized> TextMetric for M {}
