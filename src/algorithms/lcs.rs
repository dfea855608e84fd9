//! Longest Common Subsequence (LCS) and Longest Common Substring
//!
//! - **Subsequence**: elements in order but not necessarily contiguous. The
//!   common affixes are always part of some LCS, so they are trimmed and added
//!   back. `len(a) + len(b) - 2 * lcs` is the insert/delete-only edit distance.
//! - **Substring**: a contiguous common run. Only a length measure: several
//!   longest runs may exist at different alignments and no triangle inequality
//!   holds. A run can cross the boundary of the common prefix or suffix
//!   (`"bac"` vs `"bba"` share `"ba"`), so this one works on the full input.
//!
//! # Complexity
//! - Time: O(m*n)
//! - Space: O(min(m, n)) for the lengths, O(m*n) for extracting the subsequence

use super::affix::trim_common_affixes;
use super::comparer::{ElementComparer, NaturalEquality};
use super::damerau::MAX_QUADRATIC_SEQUENCE_LENGTH;
use super::{MeasuredLength, MetricLength};
use crate::error::{MetricError, Result};
use smallvec::SmallVec;
use std::hash::Hash;

type Row = SmallVec<[usize; 64]>;

/// LCS calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lcs;

impl Lcs {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetricLength for Lcs {
    fn length_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> usize
    where
        C: ElementComparer<T> + ?Sized,
    {
        lcs_length_by(source, target, comparer)
    }

    fn name(&self) -> &'static str {
        "longest_common_subsequence"
    }
}

/// Longest common substring calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongestCommonSubstring;

impl LongestCommonSubstring {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MeasuredLength for LongestCommonSubstring {
    fn length_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> usize
    where
        C: ElementComparer<T> + ?Sized,
    {
        longest_common_substring_length_by(source, target, comparer)
    }

    fn name(&self) -> &'static str {
        "longest_common_substring"
    }
}

/// Length of the Longest Common Subsequence.
#[must_use]
pub fn lcs_length_by<T, C>(source: &[T], target: &[T], comparer: &C) -> usize
where
    C: ElementComparer<T> + ?Sized,
{
    let view = trim_common_affixes(source, target, comparer);
    lcs_rows(view.source, view.target, comparer) + view.trimmed_len()
}

/// Length of the Longest Common Subsequence with natural equality.
///
/// ```
/// use fuzzyseq::algorithms::lcs_length;
/// use fuzzyseq::text::chars;
///
/// assert_eq!(lcs_length(&chars("ABCBDAB"), &chars("BDCABA")), 4);
/// ```
#[inline]
#[must_use]
pub fn lcs_length<T: Eq + Hash>(source: &[T], target: &[T]) -> usize {
    lcs_length_by(source, target, &NaturalEquality)
}

/// `len(source) + len(target) - 2 * lcs`
#[inline]
#[must_use]
pub fn lcs_distance_by<T, C>(source: &[T], target: &[T], comparer: &C) -> usize
where
    C: ElementComparer<T> + ?Sized,
{
    source.len() + target.len() - 2 * lcs_length_by(source, target, comparer)
}

/// Backward rolling two-row LCS over already trimmed input.
fn lcs_rows<T, C>(a: &[T], b: &[T], comparer: &C) -> usize
where
    C: ElementComparer<T> + ?Sized,
{
    let (source, target) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let n = target.len();
    if n == 0 {
        return 0;
    }

    // v1 is row i + 1, v0 row i; both carry a zero sentinel at index n
    let mut v1: Row = smallvec::smallvec![0; n + 1];
    let mut v0: Row = smallvec::smallvec![0; n + 1];

    for sc in source.iter().rev() {
        v0[n] = 0;
        for j in (0..n).rev() {
            v0[j] = if comparer.equals(sc, &target[j]) {
                v1[j + 1] + 1
            } else {
                v1[j].max(v0[j + 1])
            };
        }
        std::mem::swap(&mut v0, &mut v1);
    }

    v1[0]
}

/// One Longest Common Subsequence, as references into `source`.
///
/// # Errors
///
/// Returns [`MetricError::SequenceTooLong`] if the trimmed input exceeds
/// [`MAX_QUADRATIC_SEQUENCE_LENGTH`]; the backtracking table is O(m*n).
pub fn lcs_sequence_by<'a, T, C>(
    source: &'a [T],
    target: &'a [T],
    comparer: &C,
) -> Result<Vec<&'a T>>
where
    C: ElementComparer<T> + ?Sized,
{
    let view = trim_common_affixes(source, target, comparer);
    let a = view.source;
    let b = view.target;
    let m = a.len();
    let n = b.len();

    if m > MAX_QUADRATIC_SEQUENCE_LENGTH || n > MAX_QUADRATIC_SEQUENCE_LENGTH {
        log::debug!("lcs_sequence: {}x{} table refused", m + 1, n + 1);
        return Err(MetricError::SequenceTooLong {
            source_len: m,
            target_len: n,
            max_length: MAX_QUADRATIC_SEQUENCE_LENGTH,
        });
    }

    let width = n + 1;
    let mut dp = vec![0usize; (m + 1) * width];
    for i in 1..=m {
        for j in 1..=n {
            dp[i * width + j] = if comparer.equals(&a[i - 1], &b[j - 1]) {
                dp[(i - 1) * width + (j - 1)] + 1
            } else {
                dp[(i - 1) * width + j].max(dp[i * width + (j - 1)])
            };
        }
    }

    let mut core = Vec::with_capacity(dp[m * width + n]);
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if comparer.equals(&a[i - 1], &b[j - 1]) {
            core.push(&a[i - 1]);
            i -= 1;
            j -= 1;
        } else if dp[(i - 1) * width + j] > dp[i * width + (j - 1)] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    core.reverse();

    let suffix_start = source.len() - view.equal_at_end;
    let mut result = Vec::with_capacity(core.len() + view.trimmed_len());
    result.extend(source[..view.equal_at_start].iter());
    result.extend(core);
    result.extend(source[suffix_start..].iter());
    Ok(result)
}

/// Length of the longest contiguous run common to both sequences.
#[must_use]
pub fn longest_common_substring_length_by<T, C>(source: &[T], target: &[T], comparer: &C) -> usize
where
    C: ElementComparer<T> + ?Sized,
{
    longest_common_substring_by(source, target, comparer).len()
}

/// Length of the longest common substring with natural equality.
///
/// ```
/// use fuzzyseq::algorithms::longest_common_substring_length;
/// use fuzzyseq::text::chars;
///
/// assert_eq!(longest_common_substring_length(&chars("ABABC"), &chars("BABCA")), 4);
/// ```
#[inline]
#[must_use]
pub fn longest_common_substring_length<T: Eq + Hash>(source: &[T], target: &[T]) -> usize {
    longest_common_substring_length_by(source, target, &NaturalEquality)
}

/// The first longest common run, as a slice of `source`.
///
/// Same two-row shape as the LCS, but a mismatch resets the run to zero.
#[must_use]
pub fn longest_common_substring_by<'a, T, C>(source: &'a [T], target: &[T], comparer: &C) -> &'a [T]
where
    C: ElementComparer<T> + ?Sized,
{
    let n = target.len();
    if source.is_empty() || n == 0 {
        return &source[..0];
    }

    let mut prev: Row = smallvec::smallvec![0; n + 1];
    let mut curr: Row = smallvec::smallvec![0; n + 1];
    let mut max_len = 0;
    let mut end = 0;

    for (i, sc) in source.iter().enumerate() {
        curr[0] = 0;
        for j in 1..=n {
            if comparer.equals(sc, &target[j - 1]) {
                curr[j] = prev[j - 1] + 1;
                if curr[j] > max_len {
                    max_len = curr[j];
                    end = i + 1;
                }
            } else {
                curr[j] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    &source[end - max_len..end]
}
