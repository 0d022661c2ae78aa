//! One query against many candidates
//!
//! Metrics hold configuration only and are `Send + Sync`, so a single
//! instance is shared across rayon workers. Small batches stay on the
//! calling thread.

use crate::algorithms::SequenceMetric;
use crate::error::{require, Result};
use tracing::debug;

/// Minimum batch size for parallel processing.
///
/// Below this the thread pool coordination costs more than the comparisons
/// it spreads out.
pub const PARALLEL_THRESHOLD: usize = 100;

/// `metric(query, candidate)` for every candidate, in candidate order.
///
/// An absent query or any absent candidate fails the whole batch with
/// `InvalidArgument`; the check happens before any distance is computed.
///
/// # Example
/// ```rust
/// use editwise::algorithms::{Distance, LevenshteinDistance};
/// use editwise::batch::distances_from;
///
/// let query: Vec<char> = "test".chars().collect();
/// let a: Vec<char> = "text".chars().collect();
/// let b: Vec<char> = "tent".chars().collect();
/// let out = distances_from(
///     &LevenshteinDistance::new(),
///     Some(&query[..]),
///     &[Some(&a[..]), Some(&b[..])],
/// )
/// .unwrap();
/// assert_eq!(out, vec![Distance::Exact(1), Distance::Exact(1)]);
/// ```
pub fn distances_from<M, T>(
    metric: &M,
    query: Option<&[T]>,
    candidates: &[Option<&[T]>],
) -> Result<Vec<M::Output>>
where
    M: SequenceMetric<T>,
    M::Output: Send,
    T: Sync,
{
    let query = require(query, "query")?;
    let candidates = candidates
        .iter()
        .map(|c| require(*c, "candidate"))
        .collect::<Result<Vec<&[T]>>>()?;

    if candidates.len() >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        debug!(metric = metric.name(), candidates = candidates.len(), "parallel batch");
        Ok(candidates
            .par_iter()
            .map(|c| metric.compare(query, c))
            .collect())
    } else {
        debug!(metric = metric.name(), candidates = candidates.len(), "sequential batch");
        Ok(candidates
            .iter()
            .map(|c| metric.compare(query, c))
            .collect())
    }
}

/// [`distances_from`] over strings, compared by `char`.
pub fn text_distances_from<M>(
    metric: &M,
    query: Option<&str>,
    candidates: &[Option<&str>],
) -> Result<Vec<M::Output>>
where
    M: SequenceMetric<char>,
    M::Output: Send,
{
    let query: Vec<char> = require(query, "query")?.chars().collect();
    let owned = candidates
        .iter()
        .map(|c| require(*c, "candidate").map(|s| s.chars().collect::<Vec<char>>()))
        .collect::<Result<Vec<_>>>()?;
    let borrowed: Vec<Option<&[char]>> = owned.iter().map(|c| Some(c.as_slice())).collect();
    distances_from(metric, Some(&query[..]), &borrowed)
}
