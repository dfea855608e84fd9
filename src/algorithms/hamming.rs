//! Hamming distance implementation
//!
//! Counts positions where elements differ. Only defined for sequences of
//! equal length; anything else is a [`MetricError::LengthMismatch`].
//!
//! # Complexity
//! - Time: O(n) where n is the sequence length
//! - Space: O(1)

use super::comparer::{ElementComparer, NaturalEquality};
use super::FallibleMetricDistance;
use crate::error::{MetricError, Result};
use std::hash::Hash;

/// Hamming distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FallibleMetricDistance for Hamming {
    fn distance_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> Result<usize>
    where
        C: ElementComparer<T> + ?Sized,
    {
        hamming_by(source, target, comparer)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Count the positions at which `source` and `target` differ.
///
/// # Errors
/// [`MetricError::LengthMismatch`] when the lengths differ.
pub fn hamming_by<T, C>(source: &[T], target: &[T], comparer: &C) -> Result<usize>
where
    C: ElementComparer<T> + ?Sized,
{
    if source.len() != target.len() {
        log::debug!(
            "hamming: refusing sequences of length {} and {}",
            source.len(),
            target.len()
        );
        return Err(MetricError::LengthMismatch {
            source_len: source.len(),
            target_len: target.len(),
        });
    }

    Ok(source
        .iter()
        .zip(target.iter())
        .filter(|(a, b)| !comparer.equals(a, b))
        .count())
}

/// [`hamming_by`] with natural equality.
///
/// # Errors
/// [`MetricError::LengthMismatch`] when the lengths differ.
pub fn hamming<T: Eq + Hash>(source: &[T], target: &[T]) -> Result<usize> {
    hamming_by(source, target, &NaturalEquality)
}

/// Hamming distance where every element of the longer sequence past the end
/// of the shorter one counts as a mismatch.
#[must_use]
pub fn hamming_padded_by<T, C>(source: &[T], target: &[T], comparer: &C) -> usize
where
    C: ElementComparer<T> + ?Sized,
{
    let overhang = source.len().abs_diff(target.len());
    let mismatches = source
        .iter()
        .zip(target.iter())
        .filter(|(a, b)| !comparer.equals(a, b))
        .count();
    mismatches + overhang
}
