//! Levenshtein (edit) distance implementation
//!
//! Insertions, deletions and substitutions each cost one. The table only ever
//! looks at a 2x2 neighbourhood, so the common affixes are trimmed first and
//! the recurrence runs over two rolling rows sized by the shorter remainder.
//!
//! # Complexity
//! - Time: O(m*n) over the trimmed sequences
//! - Space: O(min(m, n))

use super::affix::trim_common_affixes;
use super::comparer::{ElementComparer, NaturalEquality};
use super::MetricDistance;
use smallvec::SmallVec;
use std::hash::Hash;

type Row = SmallVec<[usize; 64]>;

/// Levenshtein distance calculator with optional early termination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    /// Maximum distance to compute (for early termination)
    pub max_distance: Option<usize>,
}

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self { max_distance: None }
    }

    #[must_use]
    pub fn with_max_distance(max_distance: usize) -> Self {
        Self {
            max_distance: Some(max_distance),
        }
    }

    /// Compute distance with proper Option semantics.
    /// Returns `None` if distance exceeds max_distance threshold.
    #[must_use]
    pub fn compute_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> Option<usize>
    where
        C: ElementComparer<T> + ?Sized,
    {
        match self.max_distance {
            Some(max_d) => levenshtein_bounded_by(source, target, max_d, comparer),
            None => Some(levenshtein_by(source, target, comparer)),
        }
    }
}

impl MetricDistance for Levenshtein {
    fn distance_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> usize
    where
        C: ElementComparer<T> + ?Sized,
    {
        // Past the threshold report max_distance + 1 ("greater than")
        match self.max_distance {
            Some(max_d) => levenshtein_bounded_by(source, target, max_d, comparer)
                .unwrap_or(max_d.saturating_add(1)),
            None => levenshtein_by(source, target, comparer),
        }
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Levenshtein distance under `comparer`.
#[must_use]
pub fn levenshtein_by<T, C>(source: &[T], target: &[T], comparer: &C) -> usize
where
    C: ElementComparer<T> + ?Sized,
{
    let view = trim_common_affixes(source, target, comparer);
    dp_distance(view.source, view.target, comparer, None).unwrap_or(0)
}

/// Levenshtein distance with natural equality.
///
/// ```
/// use fuzzyseq::algorithms::levenshtein;
/// use fuzzyseq::text::chars;
///
/// assert_eq!(levenshtein(&chars("kitten"), &chars("sitting")), 3);
/// ```
#[inline]
#[must_use]
pub fn levenshtein<T: Eq + Hash>(source: &[T], target: &[T]) -> usize {
    levenshtein_by(source, target, &NaturalEquality)
}

/// Levenshtein distance, giving up as soon as it must exceed `max_distance`.
///
/// Returns `None` if the distance is greater than `max_distance`.
#[must_use]
pub fn levenshtein_bounded_by<T, C>(
    source: &[T],
    target: &[T],
    max_distance: usize,
    comparer: &C,
) -> Option<usize>
where
    C: ElementComparer<T> + ?Sized,
{
    let view = trim_common_affixes(source, target, comparer);
    dp_distance(view.source, view.target, comparer, Some(max_distance))
}

/// Two-row Wagner-Fischer over already trimmed input.
fn dp_distance<T, C>(a: &[T], b: &[T], comparer: &C, max_distance: Option<usize>) -> Option<usize>
where
    C: ElementComparer<T> + ?Sized,
{
    // Shorter sequence on the column axis
    let (source, target) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let m = source.len();
    let n = target.len();

    if let Some(max_d) = max_distance {
        if m - n > max_d {
            return None;
        }
    }
    if n == 0 {
        return Some(m);
    }

    let mut prev: Row = (0..=n).collect();
    let mut curr: Row = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        let mut row_min = i;

        for j in 1..=n {
            let cost = usize::from(!comparer.equals(&source[i - 1], &target[j - 1]));
            let cell = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
            curr[j] = cell;
            row_min = row_min.min(cell);
        }

        if let Some(max_d) = max_distance {
            if row_min > max_d {
                return None;
            }
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let result = prev[n];
    match max_distance {
        Some(max_d) if result > max_d => None,
        _ => Some(result),
    }
}

/// Plain full-table Levenshtein with no trimming, used to cross-check the
/// trimmed implementation.
#[cfg(test)]
pub(crate) fn levenshtein_untrimmed<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        d[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }
    d[a.len()][b.len()]
}
