//! Damerau-Levenshtein distance implementation
//!
//! Extends Levenshtein with transpositions. Two variants:
//!
//! - **True (unrestricted) Damerau-Levenshtein**: a transposition may have
//!   other edits between the swapped elements. Full `(m+2)x(n+2)` matrix plus
//!   a last-seen-row dictionary. A metric.
//! - **Optimal String Alignment** (restricted): adjacent swaps only and no
//!   substring is edited twice. Three rolling rows. Never smaller than the true
//!   distance and does NOT satisfy the triangle inequality:
//!   `osa("CA", "ABC") = 3` while `osa("CA", "AC") + osa("AC", "ABC") = 2`.
//!
//! Both trim the common affixes before building their tables.
//!
//! # String Length Limits
//!
//! The true variant allocates O(m*n). `damerau_levenshtein_checked_by` refuses
//! trimmed inputs longer than [`MAX_QUADRATIC_SEQUENCE_LENGTH`] instead.

use super::affix::trim_common_affixes;
use super::comparer::{ElementComparer, Keyed, NaturalEquality};
use super::MetricDistance;
use crate::error::{MetricError, Result};
use ahash::AHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

/// Maximum trimmed sequence length accepted by the checked O(m*n) entry point.
pub const MAX_QUADRATIC_SEQUENCE_LENGTH: usize = 10_000;

type Row = SmallVec<[usize; 64]>;

/// True Damerau-Levenshtein distance calculator
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(m*n)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein;

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetricDistance for DamerauLevenshtein {
    fn distance_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> usize
    where
        C: ElementComparer<T> + ?Sized,
    {
        damerau_levenshtein_by(source, target, comparer)
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}

/// Optimal String Alignment calculator (restricted Damerau-Levenshtein)
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(n) with three rolling rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimalStringAlignment {
    /// Maximum distance for early termination
    pub max_distance: Option<usize>,
}

impl OptimalStringAlignment {
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

    /// Returns `None` if distance exceeds the max_distance threshold.
    #[must_use]
    pub fn compute_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> Option<usize>
    where
        C: ElementComparer<T> + ?Sized,
    {
        let view = trim_common_affixes(source, target, comparer);
        osa_rows(view.source, view.target, comparer, self.max_distance)
    }
}

impl MetricDistance for OptimalStringAlignment {
    fn distance_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> usize
    where
        C: ElementComparer<T> + ?Sized,
    {
        match self.max_distance {
            Some(max_d) => self
                .compute_by(source, target, comparer)
                .unwrap_or(max_d.saturating_add(1)),
            None => optimal_string_alignment_by(source, target, comparer),
        }
    }

    fn obeys_triangle_inequality(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "optimal_string_alignment"
    }
}

/// True Damerau-Levenshtein distance under `comparer`.
#[must_use]
pub fn damerau_levenshtein_by<T, C>(source: &[T], target: &[T], comparer: &C) -> usize
where
    C: ElementComparer<T> + ?Sized,
{
    let view = trim_common_affixes(source, target, comparer);
    full_matrix(view.source, view.target, comparer)
}

/// True Damerau-Levenshtein distance with natural equality.
///
/// ```
/// use fuzzyseq::algorithms::damerau_levenshtein;
/// use fuzzyseq::text::chars;
///
/// assert_eq!(damerau_levenshtein(&chars("ca"), &chars("ac")), 1);
/// assert_eq!(damerau_levenshtein(&chars("ca"), &chars("abc")), 2);
/// ```
#[inline]
#[must_use]
pub fn damerau_levenshtein<T: Eq + Hash>(source: &[T], target: &[T]) -> usize {
    damerau_levenshtein_by(source, target, &NaturalEquality)
}

/// True Damerau-Levenshtein with an explicit limit on the matrix size.
///
/// # Errors
///
/// Returns [`MetricError::SequenceTooLong`] if either sequence still exceeds
/// [`MAX_QUADRATIC_SEQUENCE_LENGTH`] elements after affix trimming.
pub fn damerau_levenshtein_checked_by<T, C>(
    source: &[T],
    target: &[T],
    comparer: &C,
) -> Result<usize>
where
    C: ElementComparer<T> + ?Sized,
{
    let view = trim_common_affixes(source, target, comparer);
    let m = view.source.len();
    let n = view.target.len();

    if m > MAX_QUADRATIC_SEQUENCE_LENGTH || n > MAX_QUADRATIC_SEQUENCE_LENGTH {
        log::debug!("damerau_levenshtein: {}x{} matrix refused", m + 2, n + 2);
        return Err(MetricError::SequenceTooLong {
            source_len: m,
            target_len: n,
            max_length: MAX_QUADRATIC_SEQUENCE_LENGTH,
        });
    }

    Ok(full_matrix(view.source, view.target, comparer))
}

/// Lowrance-Wagner matrix over already trimmed input.
fn full_matrix<T, C>(a: &[T], b: &[T], comparer: &C) -> usize
where
    C: ElementComparer<T> + ?Sized,
{
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Border value larger than any real distance
    let max_dist = m + n;
    let width = n + 2;
    let idx = |i: usize, j: usize| i * width + j;

    // Last source row (1-based) in which each element was seen; absent = 0
    let mut last_row: AHashMap<Keyed<'_, T, C>, usize> = AHashMap::with_capacity(m.min(64));

    let mut d = vec![0usize; (m + 2) * width];

    d[idx(0, 0)] = max_dist;
    for i in 0..=m {
        d[idx(i + 1, 0)] = max_dist;
        d[idx(i + 1, 1)] = i;
    }
    for j in 0..=n {
        d[idx(0, j + 1)] = max_dist;
        d[idx(1, j + 1)] = j;
    }

    for i in 1..=m {
        // Last column in this row where source[i - 1] matched
        let mut db = 0usize;

        for j in 1..=n {
            let k = last_row
                .get(&Keyed::new(&b[j - 1], comparer))
                .copied()
                .unwrap_or(0);
            let l = db;

            let cost = if comparer.equals(&a[i - 1], &b[j - 1]) {
                db = j;
                0
            } else {
                1
            };

            d[idx(i + 1, j + 1)] = (d[idx(i, j)] + cost) // substitution
                .min(d[idx(i + 1, j)] + 1) // insertion
                .min(d[idx(i, j + 1)] + 1) // deletion
                .min(d[idx(k, l)] + (i - k - 1) + 1 + (j - l - 1)); // transposition
        }

        last_row.insert(Keyed::new(&a[i - 1], comparer), i);
    }

    d[idx(m + 1, n + 1)]
}

/// Optimal String Alignment distance under `comparer`.
#[must_use]
pub fn optimal_string_alignment_by<T, C>(source: &[T], target: &[T], comparer: &C) -> usize
where
    C: ElementComparer<T> + ?Sized,
{
    let view = trim_common_affixes(source, target, comparer);
    osa_rows(view.source, view.target, comparer, None).unwrap_or(0)
}

/// Optimal String Alignment distance with natural equality.
///
/// Example where OSA differs from true Damerau-Levenshtein:
/// "CA" -> "ABC": OSA = 3 (sub C->A, sub A->B, ins C), true DL = 2
/// (transpose CA->AC, insert B).
#[inline]
#[must_use]
pub fn optimal_string_alignment<T: Eq + Hash>(source: &[T], target: &[T]) -> usize {
    optimal_string_alignment_by(source, target, &NaturalEquality)
}

/// Optimal String Alignment, giving up once the distance exceeds `max_distance`.
#[must_use]
pub fn optimal_string_alignment_bounded_by<T, C>(
    source: &[T],
    target: &[T],
    max_distance: usize,
    comparer: &C,
) -> Option<usize>
where
    C: ElementComparer<T> + ?Sized,
{
    OptimalStringAlignment::with_max_distance(max_distance).compute_by(source, target, comparer)
}

/// Three-row OSA recurrence over already trimmed input.
///
/// `v2` holds row i-2, `v1` row i-1 and `v0` the row being filled.
fn osa_rows<T, C>(a: &[T], b: &[T], comparer: &C, max_distance: Option<usize>) -> Option<usize>
where
    C: ElementComparer<T> + ?Sized,
{
    let m = a.len();
    let n = b.len();

    if let Some(max_d) = max_distance {
        if m.abs_diff(n) > max_d {
            return None;
        }
    }
    if m == 0 {
        return Some(n);
    }
    if n == 0 {
        return Some(m);
    }

    let mut v2: Row = smallvec::smallvec![0; n + 1];
    let mut v1: Row = (0..=n).collect();
    let mut v0: Row = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        v0[0] = i;
        let mut row_min = i;

        for j in 1..=n {
            let cost = usize::from(!comparer.equals(&a[i - 1], &b[j - 1]));

            let mut cell = (v1[j] + 1) // deletion
                .min(v0[j - 1] + 1) // insertion
                .min(v1[j - 1] + cost); // substitution

            // Adjacent swap candidate
            if i > 1
                && j > 1
                && comparer.equals(&a[i - 1], &b[j - 2])
                && comparer.equals(&a[i - 2], &b[j - 1])
            {
                cell = cell.min(v2[j - 2] + cost);
            }

            v0[j] = cell;
            row_min = row_min.min(cell);
        }

        if let Some(max_d) = max_distance {
            if row_min > max_d {
                return None;
            }
        }

        // Rotate rows: v2 <- v1 <- v0
        std::mem::swap(&mut v2, &mut v1);
        std::mem::swap(&mut v1, &mut v0);
    }

    let result = v1[n];
    match max_distance {
        Some(max_d) if result > max_d => None,
        _ => Some(result),
    }
}
