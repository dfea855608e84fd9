//! Frequency profiles (histograms) of sequences
//!
//! The set-based metrics only look at how often each distinct element occurs.
//! Building a profile costs a pass over the sequence, so callers comparing one
//! sequence against many can build its profile once and reuse it.

use super::comparer::{ElementComparer, Keyed};
use ahash::AHashMap;

/// Distinct elements of a sequence with their occurrence counts, in order of
/// first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyProfile<'a, T> {
    entries: Vec<(&'a T, usize)>,
    total: usize,
}

impl<'a, T> FrequencyProfile<'a, T> {
    /// Group the elements of `sequence` under `comparer` and count them.
    #[must_use]
    pub fn build<C>(sequence: &'a [T], comparer: &C) -> Self
    where
        C: ElementComparer<T> + ?Sized,
    {
        let mut slots: AHashMap<Keyed<'_, T, C>, usize> = AHashMap::new();
        let mut entries: Vec<(&'a T, usize)> = Vec::new();

        for item in sequence {
            let slot = *slots.entry(Keyed::new(item, comparer)).or_insert_with(|| {
                entries.push((item, 0));
                entries.len() - 1
            });
            entries[slot].1 += 1;
        }

        Self {
            entries,
            total: sequence.len(),
        }
    }

    /// `(element, count)` pairs in order of first occurrence.
    #[must_use]
    pub fn entries(&self) -> &[(&'a T, usize)] {
        &self.entries
    }

    /// Number of elements in the profiled sequence.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct elements.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The `k` most frequent elements, most frequent first. Ties keep the
    /// order of first occurrence.
    #[must_use]
    pub fn top_k(&self, k: usize) -> Vec<(&'a T, usize)> {
        let mut ranked = self.entries.clone();
        // stable sort keeps first-occurrence order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }

    /// Count pairs `(self_count, other_count)` for every element present in
    /// both profiles.
    pub fn shared_counts<C>(&self, other: &FrequencyProfile<'_, T>, comparer: &C) -> Vec<(usize, usize)>
    where
        C: ElementComparer<T> + ?Sized,
    {
        let lookup: AHashMap<Keyed<'_, T, C>, usize> = other
            .entries
            .iter()
            .map(|&(item, count)| (Keyed::new(item, comparer), count))
            .collect();

        self.entries
            .iter()
            .filter_map(|&(item, count)| {
                lookup
                    .get(&Keyed::new(item, comparer))
                    .map(|&other_count| (count, other_count))
            })
            .collect()
    }
}
