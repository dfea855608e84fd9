//! fuzzyseq - Sequence distance and similarity metrics
//!
//! Edit distances, common-run lengths and set coefficients over slices of any
//! element type. Strings are compared as sequences of characters, graphemes or
//! words via the helpers in [`text`].
//!
//! # Features
//! - Hamming, Levenshtein, Damerau-Levenshtein and optimal string alignment
//! - Longest common subsequence and substring
//! - Jaccard, overlap and Sorensen-Dice over frequency profiles
//! - Most Frequent K hashing
//! - Pluggable element equality through [`ElementComparer`]
//! - Serde-configurable [`MetricKind`] and parallel batch helpers
//!
//! ```
//! use fuzzyseq::{levenshtein, damerau_levenshtein, lcs_length};
//! use fuzzyseq::text::chars;
//!
//! assert_eq!(levenshtein(&chars("kitten"), &chars("sitting")), 3);
//! assert_eq!(damerau_levenshtein(&chars("ca"), &chars("ac")), 1);
//! assert_eq!(lcs_length(&chars("ABCBDAB"), &chars("BDCABA")), 4);
//!
//! // any element type works, e.g. words
//! assert_eq!(levenshtein(&["a", "quick", "fox"], &["the", "quick", "dog"]), 2);
//! ```

pub mod algorithms;
pub mod batch;
pub mod error;
pub mod metric;
pub mod text;

pub use algorithms::*;
pub use batch::{MatchResult, PARALLEL_THRESHOLD};
pub use error::{MetricError, Result};
pub use metric::{MetricKind, Score};
