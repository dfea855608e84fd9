//! Sequence comparison algorithms
//!
//! Each algorithm is implemented as a pair of standalone functions (`foo_by`
//! taking an explicit [`ElementComparer`], `foo` using natural equality) plus a
//! stateless calculator struct implementing one of the capability traits below.
//!
//! | Trait                      | Result                       | Triangle inequality |
//! |----------------------------|------------------------------|---------------------|
//! | [`MetricDistance`]         | edit distance                | yes (OSA excepted)  |
//! | [`FallibleMetricDistance`] | edit distance or error       | yes                 |
//! | [`MetricLength`]           | common length, metric-derived| yes (indel distance)|
//! | [`MeasuredLength`]         | common length                | no                  |
//! | [`NormalizedDistance`]     | coefficient in `[0, 1]`      | not guaranteed      |

pub mod affix;
pub mod comparer;
pub mod damerau;
pub mod frequency;
pub mod hamming;
pub mod lcs;
pub mod levenshtein;
pub mod most_freq_k;
pub mod set_similarity;

pub use affix::*;
pub use comparer::{ByKey, CaseInsensitive, ElementComparer, NaturalEquality};
pub use damerau::*;
pub use frequency::*;
pub use hamming::*;
pub use lcs::*;
pub use levenshtein::*;
pub use most_freq_k::*;
pub use set_similarity::*;

use crate::error::Result;
use std::hash::Hash;

/// `len / max_len`, with two empty sequences counting as a perfect match.
#[inline]
pub(crate) fn length_ratio(len: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        1.0
    } else {
        len as f64 / max_len as f64
    }
}

/// Simple matching coefficient for a distance over sequences whose longer
/// side has `max_len` elements.
#[inline]
pub(crate) fn coefficient_from_distance(dist: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        1.0
    } else {
        1.0 - (dist as f64 / max_len as f64)
    }
}

/// Integer distance obeying the metric axioms.
///
/// Provides the simple matching coefficient (`1 - d / max(len)`) and distance
/// (`1 - coefficient`) for every implementer.
pub trait MetricDistance: Send + Sync {
    fn distance_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> usize
    where
        C: ElementComparer<T> + ?Sized;

    fn distance<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> usize {
        self.distance_by(source, target, &NaturalEquality)
    }

    fn simple_matching_coefficient_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> f64
    where
        C: ElementComparer<T> + ?Sized,
    {
        let dist = self.distance_by(source, target, comparer);
        coefficient_from_distance(dist, source.len().max(target.len()))
    }

    fn simple_matching_coefficient<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> f64 {
        self.simple_matching_coefficient_by(source, target, &NaturalEquality)
    }

    fn simple_matching_distance_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> f64
    where
        C: ElementComparer<T> + ?Sized,
    {
        1.0 - self.simple_matching_coefficient_by(source, target, comparer)
    }

    fn simple_matching_distance<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> f64 {
        self.simple_matching_distance_by(source, target, &NaturalEquality)
    }

    /// Whether `d(a, c) <= d(a, b) + d(b, c)` holds for every input.
    fn obeys_triangle_inequality(&self) -> bool {
        true
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Metric distance that is undefined for some inputs.
///
/// Hamming distance needs equal lengths, so it reports
/// [`MetricError::LengthMismatch`](crate::MetricError::LengthMismatch) instead
/// of a number.
pub trait FallibleMetricDistance: Send + Sync {
    fn distance_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> Result<usize>
    where
        C: ElementComparer<T> + ?Sized;

    fn distance<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> Result<usize> {
        self.distance_by(source, target, &NaturalEquality)
    }

    fn simple_matching_coefficient_by<T, C>(
        &self,
        source: &[T],
        target: &[T],
        comparer: &C,
    ) -> Result<f64>
    where
        C: ElementComparer<T> + ?Sized,
    {
        let dist = self.distance_by(source, target, comparer)?;
        Ok(coefficient_from_distance(dist, source.len().max(target.len())))
    }

    fn simple_matching_coefficient<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> Result<f64> {
        self.simple_matching_coefficient_by(source, target, &NaturalEquality)
    }

    fn simple_matching_distance_by<T, C>(
        &self,
        source: &[T],
        target: &[T],
        comparer: &C,
    ) -> Result<f64>
    where
        C: ElementComparer<T> + ?Sized,
    {
        self.simple_matching_coefficient_by(source, target, comparer)
            .map(|coefficient| 1.0 - coefficient)
    }

    fn simple_matching_distance<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> Result<f64> {
        self.simple_matching_distance_by(source, target, &NaturalEquality)
    }

    fn name(&self) -> &'static str;
}

/// Common length from which a metric is derived.
///
/// The derived distance `len(source) + len(target) - 2 * length` is the
/// insert/delete-only edit distance.
pub trait MetricLength: Send + Sync {
    fn length_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> usize
    where
        C: ElementComparer<T> + ?Sized;

    fn length<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> usize {
        self.length_by(source, target, &NaturalEquality)
    }

    fn distance_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> usize
    where
        C: ElementComparer<T> + ?Sized,
    {
        source.len() + target.len() - 2 * self.length_by(source, target, comparer)
    }

    fn distance<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> usize {
        self.distance_by(source, target, &NaturalEquality)
    }

    /// `length / max(len)`
    fn simple_matching_coefficient_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> f64
    where
        C: ElementComparer<T> + ?Sized,
    {
        let len = self.length_by(source, target, comparer);
        length_ratio(len, source.len().max(target.len()))
    }

    fn simple_matching_coefficient<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> f64 {
        self.simple_matching_coefficient_by(source, target, &NaturalEquality)
    }

    fn simple_matching_distance_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> f64
    where
        C: ElementComparer<T> + ?Sized,
    {
        1.0 - self.simple_matching_coefficient_by(source, target, comparer)
    }

    fn simple_matching_distance<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> f64 {
        self.simple_matching_distance_by(source, target, &NaturalEquality)
    }

    fn name(&self) -> &'static str;
}

/// Common length with no metric behind it.
pub trait MeasuredLength: Send + Sync {
    fn length_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> usize
    where
        C: ElementComparer<T> + ?Sized;

    fn length<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> usize {
        self.length_by(source, target, &NaturalEquality)
    }

    /// `length / max(len)`, a similarity score only
    fn length_ratio_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> f64
    where
        C: ElementComparer<T> + ?Sized,
    {
        let len = self.length_by(source, target, comparer);
        length_ratio(len, source.len().max(target.len()))
    }

    fn name(&self) -> &'static str;
}

/// Coefficient in `[0, 1]` (1.0 = identical) and its complement.
pub trait NormalizedDistance: Send + Sync {
    fn coefficient_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> f64
    where
        C: ElementComparer<T> + ?Sized;

    fn coefficient<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> f64 {
        self.coefficient_by(source, target, &NaturalEquality)
    }

    fn normalized_distance_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> f64
    where
        C: ElementComparer<T> + ?Sized,
    {
        1.0 - self.coefficient_by(source, target, comparer)
    }

    fn normalized_distance<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> f64 {
        self.normalized_distance_by(source, target, &NaturalEquality)
    }

    fn name(&self) -> &'static str;
}
