//! Error type shared by every metric in the crate.

use thiserror::Error;

/// Errors raised by metric computations.
///
/// All of them are synchronous validation failures: the call that produced
/// one did no partial work and can be retried only with different input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    /// Hamming distance is only defined for equal-length sequences
    #[error("Sequence lengths differ: source has {source_len} elements, target has {target_len}")]
    LengthMismatch { source_len: usize, target_len: usize },

    /// A parameter value the operation cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input too long for an algorithm that allocates a full matrix
    #[error(
        "Sequence length exceeds safe limit for O(m*n) algorithm: \
         source_len={source_len}, target_len={target_len}, max={max_length}"
    )]
    SequenceTooLong {
        source_len: usize,
        target_len: usize,
        max_length: usize,
    },

    /// Metric name not recognised when parsing a [`crate::MetricKind`]
    #[error(
        "Unknown metric: '{0}'. Valid: hamming, levenshtein, damerau_levenshtein, \
         optimal_string_alignment, longest_common_subsequence, longest_common_substring, \
         jaccard, overlap, sorensen_dice, most_freq_k"
    )]
    UnknownMetric(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MetricError>;
