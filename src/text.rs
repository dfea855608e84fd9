//! Helpers for turning strings into comparable sequences
//!
//! The metrics work on slices. Strings are usually compared per Unicode scalar
//! value (`chars`), but text with combining marks or emoji sequences compares
//! more naturally per extended grapheme cluster (`graphemes`).

use unicode_segmentation::UnicodeSegmentation;

/// Unicode scalar values of `s`.
#[inline]
#[must_use]
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Extended grapheme clusters of `s`.
///
/// ```
/// use fuzzyseq::algorithms::levenshtein;
/// use fuzzyseq::text::graphemes;
///
/// // 👨‍👩‍👧‍👦 is 7 code points but 1 grapheme cluster
/// assert_eq!(levenshtein(&graphemes("👨‍👩‍👧‍👦"), &graphemes("👨")), 1);
/// ```
#[inline]
#[must_use]
pub fn graphemes(s: &str) -> Vec<&str> {
    s.graphemes(true).collect()
}

/// Whitespace-separated tokens of `s`, for word-level comparisons.
#[inline]
#[must_use]
pub fn words(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}
