//! Levenshtein distance with per-operation counts
//!
//! Unlike the scalar form, this needs the whole alignment matrix: the counts
//! come from walking the optimal path back from `(m, n)` to `(0, 0)`.
//!
//! # Complexity
//! - Time: O(m*n) to fill, O(m+n) to backtrace
//! - Space: O(m*n). This is the price of the detail; use
//!   [`levenshtein`](super::levenshtein) when only the distance is needed.
//!
//! # Tie-breaking
//!
//! Equal elements are always kept (free diagonal move). Otherwise the first
//! predecessor that explains the cell wins, in the order substitution,
//! deletion, insertion. Several optimal alignments can exist; this order
//! fixes which one is reported, and with it the operation counts.

use super::matrix::{AlignmentMatrix, CostModel};
use super::SequenceMetric;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One move of the backtrace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Diagonal, elements equal
    Keep,
    /// Diagonal, elements differ
    Substitute,
    /// Up: drop `a[i-1]`
    Delete,
    /// Left: add `b[j-1]`
    Insert,
}

/// Walk the optimal Levenshtein alignment of `a` into `b` from the terminal
/// cell back to the origin.
///
/// `on_step` receives each move together with the `(i, j)` cell it leaves,
/// so the elements involved are `a[i-1]` and/or `b[j-1]`. Moves arrive in
/// reverse application order.
pub(crate) fn backtrace<T, F>(a: &[T], b: &[T], mut on_step: F) -> usize
where
    T: PartialEq,
    F: FnMut(Step, usize, usize),
{
    let matrix = AlignmentMatrix::build(a, b, CostModel::Levenshtein, <T as PartialEq>::eq);
    let (mut i, mut j) = (a.len(), b.len());

    while i > 0 || j > 0 {
        let here = matrix.get(i, j);
        let step = if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            Step::Keep
        } else if i > 0 && j > 0 && matrix.get(i - 1, j - 1) + 1 == here {
            Step::Substitute
        } else if i > 0 && matrix.get(i - 1, j) + 1 == here {
            Step::Delete
        } else {
            debug_assert!(j > 0 && matrix.get(i, j - 1) + 1 == here);
            Step::Insert
        };

        on_step(step, i, j);

        match step {
            Step::Keep | Step::Substitute => {
                i -= 1;
                j -= 1;
            }
            Step::Delete => i -= 1,
            Step::Insert => j -= 1,
        }
    }

    matrix.final_cost()
}

/// Distance plus the number of each operation on one optimal path.
///
/// Invariant: `insert_count + delete_count + substitute_count == distance`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevenshteinResult {
    distance: usize,
    insert_count: usize,
    delete_count: usize,
    substitute_count: usize,
}

impl LevenshteinResult {
    pub fn distance(&self) -> usize {
        self.distance
    }

    pub fn insert_count(&self) -> usize {
        self.insert_count
    }

    pub fn delete_count(&self) -> usize {
        self.delete_count
    }

    pub fn substitute_count(&self) -> usize {
        self.substitute_count
    }
}

impl fmt::Display for LevenshteinResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distance: {}, Insert: {}, Delete: {}, Substitute: {}",
            self.distance, self.insert_count, self.delete_count, self.substitute_count
        )
    }
}

/// Levenshtein distance calculator that reports operation counts
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevenshteinDetailedDistance;

impl LevenshteinDetailedDistance {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: PartialEq> SequenceMetric<T> for LevenshteinDetailedDistance {
    type Output = LevenshteinResult;

    fn compare(&self, left: &[T], right: &[T]) -> LevenshteinResult {
        levenshtein_detailed_seq(left, right)
    }

    fn name(&self) -> &'static str {
        "levenshtein_detailed"
    }
}

/// Detailed Levenshtein distance between two element sequences.
#[must_use]
pub fn levenshtein_detailed_seq<T: PartialEq>(a: &[T], b: &[T]) -> LevenshteinResult {
    let mut result = LevenshteinResult::default();
    let distance = backtrace(a, b, |step, _, _| match step {
        Step::Keep => {}
        Step::Substitute => result.substitute_count += 1,
        Step::Delete => result.delete_count += 1,
        Step::Insert => result.insert_count += 1,
    });
    result.distance = distance;
    debug_assert_eq!(
        result.insert_count + result.delete_count + result.substitute_count,
        result.distance
    );
    result
}

/// Detailed Levenshtein distance between two strings, compared by `char`.
///
/// # Example
/// ```
/// use editwise::algorithms::detailed::levenshtein_detailed;
///
/// let result = levenshtein_detailed("kitten", "sitting");
/// assert_eq!(result.distance(), 3);
/// assert_eq!(result.insert_count(), 1);
/// assert_eq!(result.substitute_count(), 2);
/// ```
#[must_use]
pub fn levenshtein_detailed(a: &str, b: &str) -> LevenshteinResult {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    levenshtein_detailed_seq(&a_chars, &b_chars)
}
