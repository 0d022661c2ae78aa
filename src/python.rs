//! Python bindings, built with the `python` feature.
//!
//! Python `None` maps onto an absent operand, so passing `None` raises
//! `InvalidArgumentError` (a `ValueError` subclass) exactly where the Rust
//! API returns `SimilarityError::InvalidArgument`.

use crate::algorithms::{
    CosineDistance, Distance, JaccardSimilarity, LcsDistance, LevenshteinDetailedDistance,
    LevenshteinDistance, LongestCommonSubsequence, TextMetric,
};
use crate::batch;
use crate::error::SimilarityError;
use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

create_exception!(editwise, InvalidArgumentError, PyValueError);

impl From<SimilarityError> for PyErr {
    fn from(err: SimilarityError) -> PyErr {
        InvalidArgumentError::new_err(err.to_string())
    }
}

fn levenshtein_metric(threshold: Option<usize>) -> LevenshteinDistance {
    match threshold {
        Some(t) => LevenshteinDistance::with_threshold(t),
        None => LevenshteinDistance::new(),
    }
}

/// Compute Levenshtein (edit) distance between two strings.
///
/// # Arguments
/// * `threshold` - Optional bound. Returns `None` if the distance exceeds it.
#[pyfunction]
#[pyo3(signature = (a, b, threshold=None))]
fn levenshtein(a: Option<&str>, b: Option<&str>, threshold: Option<usize>) -> PyResult<Option<usize>> {
    let distance = levenshtein_metric(threshold).apply_text(a, b)?;
    Ok(distance.value())
}

/// Levenshtein distance with operation counts.
///
/// Returns `(distance, insert_count, delete_count, substitute_count)`.
#[pyfunction]
#[pyo3(signature = (a, b))]
fn levenshtein_detailed(
    a: Option<&str>,
    b: Option<&str>,
) -> PyResult<(usize, usize, usize, usize)> {
    let r = LevenshteinDetailedDistance::new().apply_text(a, b)?;
    Ok((
        r.distance(),
        r.insert_count(),
        r.delete_count(),
        r.substitute_count(),
    ))
}

/// Length of the longest common subsequence.
#[pyfunction]
#[pyo3(signature = (a, b))]
fn lcs_length(a: Option<&str>, b: Option<&str>) -> PyResult<usize> {
    Ok(LongestCommonSubsequence::new().apply_text(a, b)?)
}

/// The longest common subsequence itself.
#[pyfunction]
#[pyo3(signature = (a, b))]
fn longest_common_subsequence(a: Option<&str>, b: Option<&str>) -> PyResult<String> {
    Ok(LongestCommonSubsequence::new().longest_common_subsequence(a, b)?)
}

/// Insert/delete-only distance: `len(a) + len(b) - 2 * lcs_length(a, b)`.
#[pyfunction]
#[pyo3(signature = (a, b))]
fn lcs_distance(a: Option<&str>, b: Option<&str>) -> PyResult<usize> {
    Ok(LcsDistance::new().apply_text(a, b)?)
}

/// Jaccard similarity of the character sets (0.0 to 1.0).
#[pyfunction]
#[pyo3(signature = (a, b))]
fn jaccard_similarity(a: Option<&str>, b: Option<&str>) -> PyResult<f64> {
    Ok(JaccardSimilarity::new().apply_text(a, b)?)
}

/// Cosine distance of word-token frequencies. Blank text raises.
#[pyfunction]
#[pyo3(signature = (a, b))]
fn cosine_distance(a: Option<&str>, b: Option<&str>) -> PyResult<f64> {
    Ok(CosineDistance::new().apply(a, b)?)
}

/// Levenshtein distance from `query` to every candidate, in order.
///
/// Releases the GIL; large batches run in parallel.
#[pyfunction]
#[pyo3(signature = (query, candidates, threshold=None))]
fn levenshtein_batch(
    py: Python<'_>,
    query: Option<&str>,
    candidates: Vec<Option<String>>,
    threshold: Option<usize>,
) -> PyResult<Vec<Option<usize>>> {
    let metric = levenshtein_metric(threshold);
    let distances = py.allow_threads(|| {
        let refs: Vec<Option<&str>> = candidates.iter().map(|c| c.as_deref()).collect();
        batch::text_distances_from(&metric, query, &refs)
    })?;
    Ok(distances.into_iter().map(Distance::value).collect())
}

/// Edit script from `a` to `b` as `(kind, char)` pairs, kind being
/// `"insert"`, `"delete"` or `"keep"`.
#[pyfunction]
#[pyo3(signature = (a, b))]
fn edit_script(a: Option<&str>, b: Option<&str>) -> PyResult<Vec<(&'static str, char)>> {
    let a = a.ok_or_else(|| InvalidArgumentError::new_err("left text must not be absent"))?;
    let b = b.ok_or_else(|| InvalidArgumentError::new_err("right text must not be absent"))?;
    Ok(crate::diff::edit_script_text(a, b)
        .into_iter()
        .map(|cmd| {
            let kind = match cmd.kind() {
                crate::diff::CommandKind::Insert => "insert",
                crate::diff::CommandKind::Delete => "delete",
                crate::diff::CommandKind::Keep => "keep",
            };
            (kind, *cmd.element())
        })
        .collect())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add(
        "InvalidArgumentError",
        m.py().get_type_bound::<InvalidArgumentError>(),
    )?;

    m.add_function(wrap_pyfunction!(levenshtein, m)?)?;
    m.add_function(wrap_pyfunction!(levenshtein_detailed, m)?)?;
    m.add_function(wrap_pyfunction!(lcs_length, m)?)?;
    m.add_function(wrap_pyfunction!(longest_common_subsequence, m)?)?;
    m.add_function(wrap_pyfunction!(lcs_distance, m)?)?;
    m.add_function(wrap_pyfunction!(jaccard_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(cosine_distance, m)?)?;
    m.add_function(wrap_pyfunction!(levenshtein_batch, m)?)?;
    m.add_function(wrap_pyfunction!(edit_script, m)?)?;

    m.add("PARALLEL_THRESHOLD", batch::PARALLEL_THRESHOLD)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
