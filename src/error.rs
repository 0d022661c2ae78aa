//! Error type shared by every metric.
//!
//! Only contract violations are errors: an absent operand or an absent
//! configuration object. They are detected before any matrix is built.
//! A bounded distance that runs past its threshold is a normal result
//! (`Distance::ExceedsThreshold`), not an error.

use thiserror::Error;

/// Errors returned by metric construction and evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// A required operand or collaborator was absent
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SimilarityError>;

impl SimilarityError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        SimilarityError::InvalidArgument(what.into())
    }
}

/// Unwrap a required operand, naming it in the error when absent.
#[inline]
pub(crate) fn require<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| SimilarityError::invalid(format!("{} must not be absent", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_names_operand() {
        let err = require::<&str>(None, "left").unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: left must not be absent");
        assert_eq!(require(Some(3), "right"), Ok(3));
    }
}
