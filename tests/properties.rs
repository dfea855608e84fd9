//! Property-based tests for the sequence metrics.
//!
//! Every dynamic-programming metric is checked against a plain full-matrix
//! implementation that never trims affixes or shares rows. Inputs are short
//! and drawn from a three-symbol alphabet so shared prefixes, suffixes and
//! repeated elements near the trimmed boundary come up constantly.

use fuzzyseq::text::chars;
use fuzzyseq::{
    damerau_levenshtein, hamming, hamming_padded_by, jaccard_by, lcs_distance_by, lcs_length,
    lcs_sequence_by, levenshtein, levenshtein_bounded_by, levenshtein_by,
    longest_common_substring_length, optimal_string_alignment,
    optimal_string_alignment_bounded_by, overlap_by, sorensen_dice_by, trim_common_affixes,
    CaseInsensitive, MetricKind, NaturalEquality, SetMode,
};
use proptest::prelude::*;
use std::collections::HashMap;

// Reference implementations, untrimmed and full-matrix

fn levenshtein_reference(a: &[u8], b: &[u8]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }
    d[m][n]
}

fn osa_reference(a: &[u8], b: &[u8]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }
    d[m][n]
}

/// Lowrance-Wagner with a sentinel row and column.
fn damerau_reference(a: &[u8], b: &[u8]) -> usize {
    let (m, n) = (a.len(), b.len());
    let max = m + n;
    let mut d = vec![vec![0usize; n + 2]; m + 2];
    d[0][0] = max;
    for i in 0..=m {
        d[i + 1][0] = max;
        d[i + 1][1] = i;
    }
    for j in 0..=n {
        d[0][j + 1] = max;
        d[1][j + 1] = j;
    }

    let mut last_row: HashMap<u8, usize> = HashMap::new();
    for i in 1..=m {
        let mut last_match_col = 0;
        for j in 1..=n {
            let k = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let l = last_match_col;
            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };
            d[i + 1][j + 1] = (d[i][j] + cost)
                .min(d[i + 1][j] + 1)
                .min(d[i][j + 1] + 1)
                .min(d[k][l] + (i - k - 1) + 1 + (j - l - 1));
        }
        last_row.insert(a[i - 1], i);
    }
    d[m + 1][n + 1]
}

fn lcs_reference(a: &[u8], b: &[u8]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            d[i][j] = if a[i - 1] == b[j - 1] {
                d[i - 1][j - 1] + 1
            } else {
                d[i - 1][j].max(d[i][j - 1])
            };
        }
    }
    d[m][n]
}

fn lcsubstring_reference(a: &[u8], b: &[u8]) -> usize {
    let mut best = 0;
    for i in 0..a.len() {
        for j in 0..b.len() {
            let run = a[i..]
                .iter()
                .zip(&b[j..])
                .take_while(|(x, y)| x == y)
                .count();
            best = best.max(run);
        }
    }
    best
}

fn is_subsequence(needle: &[u8], haystack: &[u8]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|x| rest.any(|y| y == x))
}

fn arb_seq() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..3, 0..9)
}

fn arb_equal_len_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (0usize..9).prop_flat_map(|n| {
        (
            proptest::collection::vec(0u8..3, n),
            proptest::collection::vec(0u8..3, n),
        )
    })
}

fn arb_mixed_case() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(vec!['a', 'A', 'b', 'B', 'c']), 0..8)
        .prop_map(|v| v.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        ..ProptestConfig::default()
    })]

    // Agreement with the reference implementations

    #[test]
    fn levenshtein_matches_reference(a in arb_seq(), b in arb_seq()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein_reference(&a, &b));
    }

    #[test]
    fn damerau_matches_reference(a in arb_seq(), b in arb_seq()) {
        prop_assert_eq!(damerau_levenshtein(&a, &b), damerau_reference(&a, &b));
    }

    #[test]
    fn osa_matches_reference(a in arb_seq(), b in arb_seq()) {
        prop_assert_eq!(optimal_string_alignment(&a, &b), osa_reference(&a, &b));
    }

    #[test]
    fn lcs_matches_reference(a in arb_seq(), b in arb_seq()) {
        prop_assert_eq!(lcs_length(&a, &b), lcs_reference(&a, &b));
    }

    #[test]
    fn lcsubstring_matches_reference(a in arb_seq(), b in arb_seq()) {
        prop_assert_eq!(
            longest_common_substring_length(&a, &b),
            lcsubstring_reference(&a, &b)
        );
    }

    // Affix trimming

    #[test]
    fn trimming_preserves_edit_distances(a in arb_seq(), b in arb_seq()) {
        let view = trim_common_affixes(&a, &b, &NaturalEquality);
        prop_assert_eq!(
            levenshtein_reference(view.source, view.target),
            levenshtein_reference(&a, &b)
        );
        prop_assert_eq!(
            damerau_reference(view.source, view.target),
            damerau_reference(&a, &b)
        );
        prop_assert_eq!(
            osa_reference(view.source, view.target),
            osa_reference(&a, &b)
        );
    }

    #[test]
    fn trimming_preserves_lcs(a in arb_seq(), b in arb_seq()) {
        let view = trim_common_affixes(&a, &b, &NaturalEquality);
        prop_assert_eq!(
            lcs_reference(view.source, view.target) + view.trimmed_len(),
            lcs_reference(&a, &b)
        );
    }

    /// A run can cross the trimmed boundary, so the trimmed shortcut only
    /// bounds the substring length from below.
    #[test]
    fn trimmed_lcsubstring_is_lower_bound(a in arb_seq(), b in arb_seq()) {
        let view = trim_common_affixes(&a, &b, &NaturalEquality);
        let shortcut = lcsubstring_reference(view.source, view.target)
            .max(view.equal_at_start)
            .max(view.equal_at_end);
        prop_assert!(shortcut <= longest_common_substring_length(&a, &b));
    }

    #[test]
    fn trimmed_view_lengths(a in arb_seq(), b in arb_seq()) {
        let view = trim_common_affixes(&a, &b, &NaturalEquality);
        prop_assert_eq!(view.source.len() + view.trimmed_len(), a.len());
        prop_assert_eq!(view.target.len() + view.trimmed_len(), b.len());
    }

    // Metric axioms

    #[test]
    fn identity_and_symmetry(a in arb_seq(), b in arb_seq()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
        prop_assert_eq!(damerau_levenshtein(&a, &a), 0);
        prop_assert_eq!(optimal_string_alignment(&a, &a), 0);
        prop_assert_eq!(lcs_length(&a, &a), a.len());

        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        prop_assert_eq!(damerau_levenshtein(&a, &b), damerau_levenshtein(&b, &a));
        prop_assert_eq!(optimal_string_alignment(&a, &b), optimal_string_alignment(&b, &a));
        prop_assert_eq!(lcs_length(&a, &b), lcs_length(&b, &a));
    }

    #[test]
    fn distances_are_positive_for_distinct_inputs(a in arb_seq(), b in arb_seq()) {
        prop_assume!(a != b);
        prop_assert!(levenshtein(&a, &b) > 0);
        prop_assert!(damerau_levenshtein(&a, &b) > 0);
        prop_assert!(lcs_distance_by(&a, &b, &NaturalEquality) > 0);
    }

    #[test]
    fn triangle_inequality(a in arb_seq(), b in arb_seq(), c in arb_seq()) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
        prop_assert!(
            damerau_levenshtein(&a, &c)
                <= damerau_levenshtein(&a, &b) + damerau_levenshtein(&b, &c)
        );
        let lcs_d = |x: &[u8], y: &[u8]| lcs_distance_by(x, y, &NaturalEquality);
        prop_assert!(lcs_d(&a, &c) <= lcs_d(&a, &b) + lcs_d(&b, &c));
    }

    // Orderings between metrics

    #[test]
    fn metric_orderings(a in arb_seq(), b in arb_seq()) {
        let dl = damerau_levenshtein(&a, &b);
        let osa = optimal_string_alignment(&a, &b);
        let lev = levenshtein(&a, &b);
        prop_assert!(dl <= osa);
        prop_assert!(osa <= lev);
        prop_assert!(longest_common_substring_length(&a, &b) <= lcs_length(&a, &b));
        prop_assert_eq!(
            lcs_distance_by(&a, &b, &NaturalEquality),
            a.len() + b.len() - 2 * lcs_length(&a, &b)
        );
    }

    #[test]
    fn hamming_bounds_levenshtein((a, b) in arb_equal_len_pair()) {
        let h = hamming(&a, &b).unwrap();
        prop_assert!(levenshtein(&a, &b) <= h);
        prop_assert_eq!(hamming_padded_by(&a, &b, &NaturalEquality), h);
    }

    // Bounded variants

    #[test]
    fn bounded_distances(a in arb_seq(), b in arb_seq(), max in 0usize..6) {
        let lev = levenshtein(&a, &b);
        let expected = if lev <= max { Some(lev) } else { None };
        prop_assert_eq!(levenshtein_bounded_by(&a, &b, max, &NaturalEquality), expected);

        let osa = optimal_string_alignment(&a, &b);
        let expected = if osa <= max { Some(osa) } else { None };
        prop_assert_eq!(
            optimal_string_alignment_bounded_by(&a, &b, max, &NaturalEquality),
            expected
        );
    }

    // Subsequence recovery

    #[test]
    fn lcs_sequence_is_common_subsequence(a in arb_seq(), b in arb_seq()) {
        let seq: Vec<u8> = lcs_sequence_by(&a, &b, &NaturalEquality)
            .unwrap()
            .into_iter()
            .copied()
            .collect();
        prop_assert_eq!(seq.len(), lcs_length(&a, &b));
        prop_assert!(is_subsequence(&seq, &a));
        prop_assert!(is_subsequence(&seq, &b));
    }

    // Set coefficients

    #[test]
    fn set_coefficients_in_unit_range(a in arb_seq(), b in arb_seq()) {
        for mode in [SetMode::Multiset, SetMode::Distinct] {
            for value in [
                jaccard_by(&a, &b, mode, &NaturalEquality),
                overlap_by(&a, &b, mode, &NaturalEquality),
                sorensen_dice_by(&a, &b, mode, &NaturalEquality),
            ] {
                prop_assert!((0.0..=1.0).contains(&value), "{:?}: {}", mode, value);
            }
            prop_assert_eq!(jaccard_by(&a, &a, mode, &NaturalEquality), 1.0);
            prop_assert_eq!(overlap_by(&a, &a, mode, &NaturalEquality), 1.0);
            prop_assert_eq!(sorensen_dice_by(&a, &a, mode, &NaturalEquality), 1.0);
        }
    }

    #[test]
    fn jaccard_never_exceeds_dice(a in arb_seq(), b in arb_seq()) {
        for mode in [SetMode::Multiset, SetMode::Distinct] {
            let j = jaccard_by(&a, &b, mode, &NaturalEquality);
            let d = sorensen_dice_by(&a, &b, mode, &NaturalEquality);
            let o = overlap_by(&a, &b, mode, &NaturalEquality);
            prop_assert!(j <= d + 1e-12);
            prop_assert!(d <= o + 1e-12);
        }
    }

    // Comparers

    #[test]
    fn case_insensitive_matches_lowercased(a in arb_mixed_case(), b in arb_mixed_case()) {
        let folded = levenshtein_by(&chars(&a), &chars(&b), &CaseInsensitive);
        let lowered = levenshtein(&chars(&a.to_lowercase()), &chars(&b.to_lowercase()));
        prop_assert_eq!(folded, lowered);
    }

    // Dispatch

    #[test]
    fn similarity_in_unit_range(a in arb_seq(), b in arb_seq()) {
        for name in [
            "levenshtein",
            "damerau_levenshtein",
            "optimal_string_alignment",
            "longest_common_subsequence",
            "longest_common_substring",
            "jaccard",
            "overlap",
            "sorensen_dice",
            "most_freq_k",
        ] {
            let kind: MetricKind = name.parse().unwrap();
            let sim = kind.similarity(&a, &b).unwrap();
            prop_assert!((0.0..=1.0).contains(&sim), "{}: {}", name, sim);
        }
    }
}
