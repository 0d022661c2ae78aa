//! A metric with its left operand fixed
//!
//! Useful when one sequence is compared against many: bind it once, then
//! call [`EditDistanceFrom::apply`] for each candidate.

use super::SequenceMetric;
use crate::error::{require, Result};
use smallvec::SmallVec;
use std::marker::PhantomData;

/// Binds a [`SequenceMetric`] and a left operand.
///
/// The metric is checked at construction. The left operand is checked on
/// every call, so a binding with an absent left side can be built and only
/// fails when applied.
#[derive(Debug, Clone)]
pub struct EditDistanceFrom<M, T> {
    metric: M,
    left: Option<Vec<T>>,
    _elem: PhantomData<fn(&T)>,
}

impl<M, T> EditDistanceFrom<M, T>
where
    M: SequenceMetric<T>,
{
    /// Bind `metric` to `left`. An absent metric is rejected.
    pub fn new(metric: Option<M>, left: Option<Vec<T>>) -> Result<Self> {
        let metric = require(metric, "metric")?;
        Ok(Self {
            metric,
            left,
            _elem: PhantomData,
        })
    }

    /// `metric(left, right)`; an absent left or right operand is rejected.
    pub fn apply(&self, right: Option<&[T]>) -> Result<M::Output> {
        self.metric.apply(self.left.as_deref(), right)
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn left(&self) -> Option<&[T]> {
        self.left.as_deref()
    }
}

impl<M> EditDistanceFrom<M, char>
where
    M: SequenceMetric<char>,
{
    /// Bind `metric` to the characters of `left`.
    pub fn text(metric: Option<M>, left: Option<&str>) -> Result<Self> {
        Self::new(metric, left.map(|s| s.chars().collect()))
    }

    /// Apply to the characters of `right`.
    pub fn apply_text(&self, right: Option<&str>) -> Result<M::Output> {
        let right = require(right, "right text")?;
        let chars: SmallVec<[char; 64]> = right.chars().collect();
        self.apply(Some(&chars[..]))
    }
}
