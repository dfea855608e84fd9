//! Metric selection and dispatch
//!
//! [`MetricKind`] names one algorithm together with its parameters. It is the
//! crate's configuration type: it (de)serialises with serde as an internally
//! tagged object, parses from short names, and evaluates any pair of
//! sequences without the caller touching the individual calculators.
//!
//! ```
//! use fuzzyseq::{MetricKind, Score};
//! use fuzzyseq::text::chars;
//!
//! let metric: MetricKind = "damerau".parse().unwrap();
//! let score = metric.evaluate(&chars("ca"), &chars("ac")).unwrap();
//! assert_eq!(score, Score::Distance(1));
//! ```

use crate::algorithms::{
    DamerauLevenshtein, ElementComparer, FallibleMetricDistance, Hamming, Jaccard, Lcs,
    Levenshtein, LongestCommonSubstring, MeasuredLength, MetricDistance, MetricLength, MostFreqK,
    NaturalEquality, NormalizedDistance, OptimalStringAlignment, Overlap, SetMode, SorensenDice,
};
use crate::error::{MetricError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A sequence metric and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum MetricKind {
    Hamming,
    Levenshtein,
    DamerauLevenshtein,
    OptimalStringAlignment,
    LongestCommonSubsequence,
    LongestCommonSubstring,
    Jaccard {
        #[serde(default)]
        mode: SetMode,
    },
    Overlap {
        #[serde(default)]
        mode: SetMode,
    },
    SorensenDice {
        #[serde(default)]
        mode: SetMode,
    },
    MostFreqK(MostFreqK),
}

/// Raw result of [`MetricKind::evaluate_by`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Integer edit (or hashing) distance
    Distance(usize),
    /// Length of a common subsequence or substring
    Length(usize),
    /// Distance in `[0, 1]`, 0.0 meaning identical
    NormalizedDistance(f64),
}

impl MetricKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hamming => "hamming",
            Self::Levenshtein => "levenshtein",
            Self::DamerauLevenshtein => "damerau_levenshtein",
            Self::OptimalStringAlignment => "optimal_string_alignment",
            Self::LongestCommonSubsequence => "longest_common_subsequence",
            Self::LongestCommonSubstring => "longest_common_substring",
            Self::Jaccard { .. } => "jaccard",
            Self::Overlap { .. } => "overlap",
            Self::SorensenDice { .. } => "sorensen_dice",
            Self::MostFreqK(_) => "most_freq_k",
        }
    }

    /// Whether the distance this metric yields obeys the triangle inequality.
    ///
    /// For the common subsequence this is the derived insert/delete distance,
    /// for Jaccard the Jaccard distance.
    pub fn is_metric(&self) -> bool {
        match self {
            Self::Hamming
            | Self::Levenshtein
            | Self::DamerauLevenshtein
            | Self::LongestCommonSubsequence
            | Self::Jaccard { .. } => true,
            Self::OptimalStringAlignment
            | Self::LongestCommonSubstring
            | Self::Overlap { .. }
            | Self::SorensenDice { .. }
            | Self::MostFreqK(_) => false,
        }
    }

    /// Check the parameters carried by the variant.
    ///
    /// # Errors
    /// [`MetricError::InvalidArgument`] for a Most-Frequent-K with `k == 0`.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::MostFreqK(m) => m.validate(),
            _ => Ok(()),
        }
    }

    /// Run the metric under `comparer`.
    ///
    /// # Errors
    /// [`MetricError::LengthMismatch`] for Hamming on unequal lengths and
    /// [`MetricError::InvalidArgument`] for invalid parameters.
    pub fn evaluate_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> Result<Score>
    where
        C: ElementComparer<T> + ?Sized,
    {
        let score = match self {
            Self::Hamming => Score::Distance(Hamming.distance_by(source, target, comparer)?),
            Self::Levenshtein => {
                Score::Distance(Levenshtein::new().distance_by(source, target, comparer))
            }
            Self::DamerauLevenshtein => {
                Score::Distance(DamerauLevenshtein.distance_by(source, target, comparer))
            }
            Self::OptimalStringAlignment => {
                Score::Distance(OptimalStringAlignment::new().distance_by(source, target, comparer))
            }
            Self::LongestCommonSubsequence => {
                Score::Length(Lcs.length_by(source, target, comparer))
            }
            Self::LongestCommonSubstring => {
                Score::Length(LongestCommonSubstring.length_by(source, target, comparer))
            }
            Self::Jaccard { mode } => Score::NormalizedDistance(
                Jaccard::with_mode(*mode).normalized_distance_by(source, target, comparer),
            ),
            Self::Overlap { mode } => Score::NormalizedDistance(
                Overlap::with_mode(*mode).normalized_distance_by(source, target, comparer),
            ),
            Self::SorensenDice { mode } => Score::NormalizedDistance(
                SorensenDice::with_mode(*mode).normalized_distance_by(source, target, comparer),
            ),
            Self::MostFreqK(m) => Score::Distance(m.distance_by(source, target, comparer)?),
        };
        Ok(score)
    }

    /// [`MetricKind::evaluate_by`] with natural equality.
    ///
    /// # Errors
    /// See [`MetricKind::evaluate_by`].
    pub fn evaluate<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> Result<Score> {
        self.evaluate_by(source, target, &NaturalEquality)
    }

    /// Similarity in `[0, 1]`, 1.0 meaning identical.
    ///
    /// Distances and common lengths map through the simple matching
    /// coefficient (normalised by the longer sequence), the set family returns
    /// its coefficient and Most-Frequent-K returns `1 - d / max_distance`.
    ///
    /// # Errors
    /// See [`MetricKind::evaluate_by`].
    pub fn similarity_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> Result<f64>
    where
        C: ElementComparer<T> + ?Sized,
    {
        let similarity = match self {
            Self::Hamming => Hamming.simple_matching_coefficient_by(source, target, comparer)?,
            Self::Levenshtein => {
                Levenshtein::new().simple_matching_coefficient_by(source, target, comparer)
            }
            Self::DamerauLevenshtein => {
                DamerauLevenshtein.simple_matching_coefficient_by(source, target, comparer)
            }
            Self::OptimalStringAlignment => OptimalStringAlignment::new()
                .simple_matching_coefficient_by(source, target, comparer),
            Self::LongestCommonSubsequence => {
                Lcs.simple_matching_coefficient_by(source, target, comparer)
            }
            Self::LongestCommonSubstring => {
                LongestCommonSubstring.length_ratio_by(source, target, comparer)
            }
            Self::Jaccard { mode } => Jaccard::with_mode(*mode).coefficient_by(source, target, comparer),
            Self::Overlap { mode } => Overlap::with_mode(*mode).coefficient_by(source, target, comparer),
            Self::SorensenDice { mode } => {
                SorensenDice::with_mode(*mode).coefficient_by(source, target, comparer)
            }
            Self::MostFreqK(m) => {
                let dist = m.distance_by(source, target, comparer)?;
                if m.max_distance == 0 {
                    1.0
                } else {
                    1.0 - dist as f64 / m.max_distance as f64
                }
            }
        };
        Ok(similarity)
    }

    /// [`MetricKind::similarity_by`] with natural equality.
    ///
    /// # Errors
    /// See [`MetricKind::evaluate_by`].
    pub fn similarity<T: Eq + Hash>(&self, source: &[T], target: &[T]) -> Result<f64> {
        self.similarity_by(source, target, &NaturalEquality)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = MetricError;

    /// Parse a metric name. Parameterised metrics get their defaults.
    fn from_str(s: &str) -> Result<Self> {
        let mode = SetMode::default();
        match s {
            "hamming" => Ok(Self::Hamming),
            "levenshtein" => Ok(Self::Levenshtein),
            "damerau_levenshtein" | "damerau" => Ok(Self::DamerauLevenshtein),
            "optimal_string_alignment" | "osa" => Ok(Self::OptimalStringAlignment),
            "longest_common_subsequence" | "lcs" => Ok(Self::LongestCommonSubsequence),
            "longest_common_substring" | "lcsubstring" => Ok(Self::LongestCommonSubstring),
            "jaccard" => Ok(Self::Jaccard { mode }),
            "overlap" => Ok(Self::Overlap { mode }),
            "sorensen_dice" | "dice" => Ok(Self::SorensenDice { mode }),
            "most_freq_k" | "mostfreqk" => Ok(Self::MostFreqK(MostFreqK::default())),
            _ => Err(MetricError::UnknownMetric(s.to_string())),
        }
    }
}
