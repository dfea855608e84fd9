//! Most Frequent K hashing
//!
//! Each sequence is reduced to its `k` most frequent elements with their
//! counts (the "hash"); the similarity of two hashes is accumulated over the
//! elements they share and the distance is `max_distance - similarity`.
//!
//! This is a cheap heuristic, not a metric: it ignores order entirely and does
//! not satisfy the triangle inequality.

use super::comparer::{ElementComparer, NaturalEquality};
use super::frequency::FrequencyProfile;
use crate::error::{MetricError, Result};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// How a pair of matching hash entries contributes to the similarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MostFreqKPolicy {
    /// Add the count once when both counts are equal, nothing otherwise.
    #[default]
    OnlyOneFrequencyWhenEqual,
    /// Always add both counts.
    SumOfBothFrequencies,
}

/// Most Frequent K distance calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostFreqK {
    /// Number of most frequent elements kept per sequence
    pub k: usize,
    /// Upper bound of the distance range
    pub max_distance: usize,
    #[serde(default)]
    pub policy: MostFreqKPolicy,
}

impl Default for MostFreqK {
    fn default() -> Self {
        Self {
            k: 2,
            max_distance: 10,
            policy: MostFreqKPolicy::default(),
        }
    }
}

impl MostFreqK {
    #[must_use]
    pub fn new(k: usize, max_distance: usize) -> Self {
        Self {
            k,
            max_distance,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: MostFreqKPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// # Errors
    /// [`MetricError::InvalidArgument`] when `k` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(MetricError::InvalidArgument(
                "most_freq_k: k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Similarity of the two top-k hashes.
    ///
    /// # Errors
    /// [`MetricError::InvalidArgument`] when `k` is zero.
    pub fn similarity_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> Result<usize>
    where
        C: ElementComparer<T> + ?Sized,
    {
        let source_hash = most_freq_k_hash_by(source, self.k, comparer)?;
        let target_hash = most_freq_k_hash_by(target, self.k, comparer)?;
        Ok(hash_similarity(&source_hash, &target_hash, self.policy, comparer))
    }

    /// `max_distance - similarity`, floored at zero.
    ///
    /// # Errors
    /// [`MetricError::InvalidArgument`] when `k` is zero.
    pub fn distance_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> Result<usize>
    where
        C: ElementComparer<T> + ?Sized,
    {
        let similarity = self.similarity_by(source, target, comparer)?;
        Ok(self.max_distance.saturating_sub(similarity))
    }

    /// # Errors
    /// [`MetricError::InvalidArgument`] when `k` is zero.
    pub fn distance<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> Result<usize> {
        self.distance_by(source, target, &NaturalEquality)
    }

    pub fn name(&self) -> &'static str {
        "most_freq_k"
    }
}

/// The `k` most frequent elements of `sequence` with their counts, most
/// frequent first and ties in order of first occurrence.
///
/// # Errors
/// [`MetricError::InvalidArgument`] when `k` is zero.
pub fn most_freq_k_hash_by<'a, T, C>(
    sequence: &'a [T],
    k: usize,
    comparer: &C,
) -> Result<Vec<(&'a T, usize)>>
where
    C: ElementComparer<T> + ?Sized,
{
    if k == 0 {
        return Err(MetricError::InvalidArgument(
            "most_freq_k: k must be at least 1".to_string(),
        ));
    }
    Ok(FrequencyProfile::build(sequence, comparer).top_k(k))
}

/// Accumulate the similarity of two hashes under `policy`.
#[must_use]
pub fn hash_similarity<T, C>(
    source: &[(&T, usize)],
    target: &[(&T, usize)],
    policy: MostFreqKPolicy,
    comparer: &C,
) -> usize
where
    C: ElementComparer<T> + ?Sized,
{
    let mut similarity = 0;
    for &(item, count) in source {
        for &(other, other_count) in target {
            if !comparer.equals(item, other) {
                continue;
            }
            similarity += match policy {
                MostFreqKPolicy::OnlyOneFrequencyWhenEqual if count == other_count => count,
                MostFreqKPolicy::OnlyOneFrequencyWhenEqual => 0,
                MostFreqKPolicy::SumOfBothFrequencies => count + other_count,
            };
        }
    }
    similarity
}

/// Render a character hash the usual way, e.g. `"r2e2"`.
#[must_use]
pub fn format_char_hash(hash: &[(&char, usize)]) -> String {
    hash.iter()
        .map(|(c, count)| format!("{c}{count}"))
        .collect()
}
