//! One-to-many and all-pairs comparisons
//!
//! Every metric is a pure function, so independent comparisons can run on the
//! rayon thread pool without coordination. Small inputs stay sequential to
//! avoid the thread pool overhead.

use crate::algorithms::{ElementComparer, NaturalEquality};
use crate::error::{MetricError, Result};
use crate::metric::MetricKind;
use rayon::prelude::*;
use std::hash::Hash;

/// Minimum input size for parallel processing.
///
/// Below this, sequential processing is faster than coordinating the thread
/// pool for typical comparison costs.
pub const PARALLEL_THRESHOLD: usize = 100;

/// A candidate that passed [`best_matches_by`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Position of the candidate in the input slice
    pub index: usize,
    /// Similarity score (0.0-1.0)
    pub score: f64,
}

/// Similarity of `query` to each candidate, in candidate order.
///
/// # Errors
/// The first error any comparison produced (e.g. Hamming length mismatch).
pub fn similarities_by<S, T, C>(
    query: &[T],
    candidates: &[S],
    metric: MetricKind,
    comparer: &C,
) -> Result<Vec<f64>>
where
    S: AsRef<[T]> + Sync,
    T: Sync,
    C: ElementComparer<T> + ?Sized,
{
    metric.validate()?;

    if candidates.len() >= PARALLEL_THRESHOLD {
        log::debug!("{}: scoring {} candidates in parallel", metric, candidates.len());
        candidates
            .par_iter()
            .map(|c| metric.similarity_by(query, c.as_ref(), comparer))
            .collect()
    } else {
        candidates
            .iter()
            .map(|c| metric.similarity_by(query, c.as_ref(), comparer))
            .collect()
    }
}

/// [`similarities_by`] with natural equality.
///
/// # Errors
/// See [`similarities_by`].
pub fn similarities<S, T>(query: &[T], candidates: &[S], metric: MetricKind) -> Result<Vec<f64>>
where
    S: AsRef<[T]> + Sync,
    T: Eq + Hash + Sync,
{
    similarities_by(query, candidates, metric, &NaturalEquality)
}

/// Candidates scoring at least `min_similarity`, best first.
///
/// Ties keep candidate order. `limit` caps the number of results.
///
/// # Errors
/// [`MetricError::InvalidArgument`] if `min_similarity` is not a finite
/// number in `[0, 1]`, plus anything [`similarities_by`] reports.
pub fn best_matches_by<S, T, C>(
    query: &[T],
    candidates: &[S],
    metric: MetricKind,
    min_similarity: f64,
    limit: Option<usize>,
    comparer: &C,
) -> Result<Vec<MatchResult>>
where
    S: AsRef<[T]> + Sync,
    T: Sync,
    C: ElementComparer<T> + ?Sized,
{
    if !min_similarity.is_finite() || !(0.0..=1.0).contains(&min_similarity) {
        return Err(MetricError::InvalidArgument(format!(
            "min_similarity must be in range [0.0, 1.0], got {}",
            min_similarity
        )));
    }

    let scores = similarities_by(query, candidates, metric, comparer)?;
    let mut matches: Vec<MatchResult> = scores
        .into_iter()
        .enumerate()
        .filter(|&(_, score)| score >= min_similarity)
        .map(|(index, score)| MatchResult { index, score })
        .collect();

    // stable: equal scores stay in candidate order
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    if let Some(limit) = limit {
        matches.truncate(limit);
    }
    Ok(matches)
}

/// [`best_matches_by`] with natural equality.
///
/// # Errors
/// See [`best_matches_by`].
pub fn best_matches<S, T>(
    query: &[T],
    candidates: &[S],
    metric: MetricKind,
    min_similarity: f64,
    limit: Option<usize>,
) -> Result<Vec<MatchResult>>
where
    S: AsRef<[T]> + Sync,
    T: Eq + Hash + Sync,
{
    best_matches_by(query, candidates, metric, min_similarity, limit, &NaturalEquality)
}

/// Symmetric matrix of similarities between every pair of `items`.
///
/// Only the upper triangle (diagonal included) is computed; every similarity
/// in [`MetricKind::similarity_by`] is symmetric.
///
/// # Errors
/// The first error any comparison produced.
pub fn pairwise_similarity_matrix_by<S, T, C>(
    items: &[S],
    metric: MetricKind,
    comparer: &C,
) -> Result<Vec<Vec<f64>>>
where
    S: AsRef<[T]> + Sync,
    T: Sync,
    C: ElementComparer<T> + ?Sized,
{
    metric.validate()?;

    let n = items.len();
    let pairs: Vec<(usize, usize)> = (0..n).flat_map(|i| (i..n).map(move |j| (i, j))).collect();
    let score = |&(i, j): &(usize, usize)| -> Result<f64> {
        metric.similarity_by(items[i].as_ref(), items[j].as_ref(), comparer)
    };

    let scores: Vec<f64> = if pairs.len() >= PARALLEL_THRESHOLD {
        log::debug!("{}: scoring {} pairs in parallel", metric, pairs.len());
        pairs.par_iter().map(score).collect::<Result<_>>()?
    } else {
        pairs.iter().map(score).collect::<Result<_>>()?
    };

    let mut matrix = vec![vec![0.0; n]; n];
    for (&(i, j), s) in pairs.iter().zip(scores) {
        matrix[i][j] = s;
        matrix[j][i] = s;
    }
    Ok(matrix)
}

/// [`pairwise_similarity_matrix_by`] with natural equality.
///
/// # Errors
/// See [`pairwise_similarity_matrix_by`].
pub fn pairwise_similarity_matrix<S, T>(items: &[S], metric: MetricKind) -> Result<Vec<Vec<f64>>>
where
    S: AsRef<[T]> + Sync,
    T: Eq + Hash + Sync,
{
    pairwise_similarity_matrix_by(items, metric, &NaturalEquality)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::SetMode;
    use crate::text::chars;

    fn seqs(words: &[&str]) -> Vec<Vec<char>> {
        words.iter().map(|w| chars(w)).collect()
    }

    #[test]
    fn test_similarities_sequential() {
        let query = chars("kitten");
        let candidates = seqs(&["kitten", "sitting", ""]);
        let scores = similarities(&query, &candidates, MetricKind::Levenshtein).unwrap();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], 1.0);
        assert!((scores[1] - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_similarities_parallel_matches_sequential() {
        let words: Vec<String> = (0..PARALLEL_THRESHOLD * 2)
            .map(|i| format!("item{}", i % 37))
            .collect();
        let candidates: Vec<Vec<char>> = words.iter().map(|w| chars(w)).collect();
        let query = chars("item12");

        let parallel = similarities(&query, &candidates, MetricKind::DamerauLevenshtein).unwrap();
        let sequential: Vec<f64> = candidates
            .iter()
            .map(|c| MetricKind::DamerauLevenshtein.similarity(&query, c).unwrap())
            .collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_similarities_propagates_errors() {
        let query = chars("abc");
        let candidates = seqs(&["abd", "abcd"]);
        assert!(matches!(
            similarities(&query, &candidates, MetricKind::Hamming),
            Err(MetricError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_best_matches() {
        let query = chars("apple");
        let candidates = seqs(&["banana", "apples", "apple", "maple", "grape"]);
        let matches =
            best_matches(&query, &candidates, MetricKind::Levenshtein, 0.5, Some(3)).unwrap();
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0], MatchResult { index: 2, score: 1.0 });
        assert_eq!(matches[1].index, 1);
        assert!((matches[1].score - 5.0 / 6.0).abs() < 1e-12);
        assert_eq!(matches[2].index, 3);
        assert!((matches[2].score - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_best_matches_ties_keep_candidate_order() {
        let query = chars("abc");
        let candidates = seqs(&["abx", "abc", "xbc", "abc"]);
        let matches = best_matches(&query, &candidates, MetricKind::Levenshtein, 0.0, None).unwrap();
        let order: Vec<usize> = matches.iter().map(|m| m.index).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_best_matches_rejects_bad_threshold() {
        let query = chars("a");
        let candidates = seqs(&["a"]);
        for bad in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                best_matches(&query, &candidates, MetricKind::Levenshtein, bad, None),
                Err(MetricError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_pairwise_matrix() {
        let items = seqs(&["night", "nacht", "night", "xyz"]);
        let metric = MetricKind::Jaccard {
            mode: SetMode::Distinct,
        };
        let matrix = pairwise_similarity_matrix(&items, metric).unwrap();
        assert_eq!(matrix.len(), 4);
        for i in 0..4 {
            assert_eq!(matrix[i][i], 1.0);
            for j in 0..4 {
                assert_eq!(matrix[i][j], matrix[j][i]);
            }
        }
        assert_eq!(matrix[0][2], 1.0);
        assert_eq!(matrix[0][3], 0.0);
    }

    #[test]
    fn test_pairwise_matrix_parallel() {
        let items: Vec<Vec<char>> = (0..20).map(|i| chars(&format!("w{}", i * 7))).collect();
        // 210 pairs, above the threshold
        let matrix = pairwise_similarity_matrix(&items, MetricKind::Levenshtein).unwrap();
        for i in 0..20 {
            assert_eq!(matrix[i][i], 1.0);
            for j in 0..20 {
                assert_eq!(
                    matrix[i][j],
                    MetricKind::Levenshtein.similarity(&items[i], &items[j]).unwrap()
                );
            }
        }
    }
}
