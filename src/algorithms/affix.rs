//! Common prefix/suffix trimming
//!
//! Matching leading and trailing runs never change an edit distance or the
//! length of a longest common subsequence, so the dynamic-programming metrics
//! strip them first and only build their tables over what is left.

use super::comparer::ElementComparer;

/// Two sequences with their shared prefix and suffix removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimmedView<'a, T> {
    pub source: &'a [T],
    pub target: &'a [T],
    /// Length of the removed common prefix
    pub equal_at_start: usize,
    /// Length of the removed common suffix
    pub equal_at_end: usize,
}

impl<T> TrimmedView<'_, T> {
    /// Total number of elements removed from each side.
    #[inline]
    #[must_use]
    pub fn trimmed_len(&self) -> usize {
        self.equal_at_start + self.equal_at_end
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.target.is_empty()
    }
}

/// Strip the longest common prefix, then the longest common suffix of what
/// remains. The suffix scan never reaches back into the prefix.
#[must_use]
pub fn trim_common_affixes<'a, T, C>(
    source: &'a [T],
    target: &'a [T],
    comparer: &C,
) -> TrimmedView<'a, T>
where
    C: ElementComparer<T> + ?Sized,
{
    let equal_at_start = source
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| comparer.equals(a, b))
        .count();

    let source_rest = &source[equal_at_start..];
    let target_rest = &target[equal_at_start..];

    let equal_at_end = source_rest
        .iter()
        .rev()
        .zip(target_rest.iter().rev())
        .take_while(|(a, b)| comparer.equals(a, b))
        .count();

    let view = TrimmedView {
        source: &source_rest[..source_rest.len() - equal_at_end],
        target: &target_rest[..target_rest.len() - equal_at_end],
        equal_at_start,
        equal_at_end,
    };

    log::trace!(
        "trimmed affixes: start={} end={} remaining={}x{}",
        view.equal_at_start,
        view.equal_at_end,
        view.source.len(),
        view.target.len()
    );

    view
}
