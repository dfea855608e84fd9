//! Set-based similarity coefficients
//!
//! Jaccard, overlap (Szymkiewicz-Simpson) and Sørensen-Dice compare what the
//! sequences contain, not where. Both inputs are turned into
//! [`FrequencyProfile`]s and the coefficient is a closed-form ratio of the
//! resulting set sizes.
//!
//! Empty inputs: two empty sequences are identical (1.0); an empty sequence
//! against a non-empty one shares nothing (0.0).
//!
//! # Complexity
//! - Time: O(m+n) for building the profiles and intersecting them
//! - Space: O(distinct elements)

use super::comparer::{ElementComparer, NaturalEquality};
use super::frequency::FrequencyProfile;
use super::NormalizedDistance;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// How repeated elements count towards set sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetMode {
    /// Frequency-annotated sets: `|A|` is the sequence length, the
    /// intersection sums the smaller count of each shared element and the
    /// union the larger one.
    #[default]
    Multiset,
    /// Plain sets: every distinct element counts once.
    Distinct,
}

/// Sizes a set coefficient is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetSizes {
    pub source: usize,
    pub target: usize,
    pub intersection: usize,
}

impl SetSizes {
    /// Size of the union.
    #[inline]
    #[must_use]
    pub fn union(&self) -> usize {
        self.source + self.target - self.intersection
    }

    /// Compare two prebuilt profiles.
    pub fn from_profiles<T, C>(
        source: &FrequencyProfile<'_, T>,
        target: &FrequencyProfile<'_, T>,
        mode: SetMode,
        comparer: &C,
    ) -> Self
    where
        C: ElementComparer<T> + ?Sized,
    {
        let shared = source.shared_counts(target, comparer);
        match mode {
            SetMode::Multiset => Self {
                source: source.total(),
                target: target.total(),
                intersection: shared.iter().map(|&(a, b)| a.min(b)).sum(),
            },
            SetMode::Distinct => Self {
                source: source.distinct(),
                target: target.distinct(),
                intersection: shared.len(),
            },
        }
    }

    fn of<T, C>(source: &[T], target: &[T], mode: SetMode, comparer: &C) -> Self
    where
        C: ElementComparer<T> + ?Sized,
    {
        Self::from_profiles(
            &FrequencyProfile::build(source, comparer),
            &FrequencyProfile::build(target, comparer),
            mode,
            comparer,
        )
    }

    /// `|A n B| / |A u B|`
    #[must_use]
    pub fn jaccard(&self) -> f64 {
        let union = self.union();
        if union == 0 {
            1.0
        } else {
            self.intersection as f64 / union as f64
        }
    }

    /// `|A n B| / min(|A|, |B|)`
    #[must_use]
    pub fn overlap(&self) -> f64 {
        let smaller = self.source.min(self.target);
        if smaller == 0 {
            if self.source == self.target {
                1.0
            } else {
                0.0
            }
        } else {
            self.intersection as f64 / smaller as f64
        }
    }

    /// `2|A n B| / (|A| + |B|)`
    #[must_use]
    pub fn dice(&self) -> f64 {
        let total = self.source + self.target;
        if total == 0 {
            1.0
        } else {
            (2.0 * self.intersection as f64) / total as f64
        }
    }
}

/// Jaccard index calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaccard {
    pub mode: SetMode,
}

impl Jaccard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mode: SetMode) -> Self {
        Self { mode }
    }
}

impl NormalizedDistance for Jaccard {
    fn coefficient_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> f64
    where
        C: ElementComparer<T> + ?Sized,
    {
        SetSizes::of(source, target, self.mode, comparer).jaccard()
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

/// Overlap coefficient calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlap {
    pub mode: SetMode,
}

impl Overlap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mode: SetMode) -> Self {
        Self { mode }
    }
}

impl NormalizedDistance for Overlap {
    fn coefficient_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> f64
    where
        C: ElementComparer<T> + ?Sized,
    {
        SetSizes::of(source, target, self.mode, comparer).overlap()
    }

    fn name(&self) -> &'static str {
        "overlap"
    }
}

/// Sørensen-Dice coefficient calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SorensenDice {
    pub mode: SetMode,
}

impl SorensenDice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mode: SetMode) -> Self {
        Self { mode }
    }
}

impl NormalizedDistance for SorensenDice {
    fn coefficient_by<T, C>(&self, source: &[T], target: &[T], comparer: &C) -> f64
    where
        C: ElementComparer<T> + ?Sized,
    {
        SetSizes::of(source, target, self.mode, comparer).dice()
    }

    fn name(&self) -> &'static str {
        "sorensen_dice"
    }
}

/// Jaccard index under `comparer`.
#[must_use]
pub fn jaccard_by<T, C>(source: &[T], target: &[T], mode: SetMode, comparer: &C) -> f64
where
    C: ElementComparer<T> + ?Sized,
{
    SetSizes::of(source, target, mode, comparer).jaccard()
}

/// Multiset Jaccard index with natural equality.
#[inline]
#[must_use]
pub fn jaccard<T: Eq + Hash>(source: &[T], target: &[T]) -> f64 {
    jaccard_by(source, target, SetMode::Multiset, &NaturalEquality)
}

/// `1 - jaccard`
#[inline]
#[must_use]
pub fn jaccard_distance<T: Eq + Hash>(source: &[T], target: &[T]) -> f64 {
    1.0 - jaccard(source, target)
}

/// Overlap coefficient under `comparer`.
#[must_use]
pub fn overlap_by<T, C>(source: &[T], target: &[T], mode: SetMode, comparer: &C) -> f64
where
    C: ElementComparer<T> + ?Sized,
{
    SetSizes::of(source, target, mode, comparer).overlap()
}

/// Multiset overlap coefficient with natural equality.
#[inline]
#[must_use]
pub fn overlap<T: Eq + Hash>(source: &[T], target: &[T]) -> f64 {
    overlap_by(source, target, SetMode::Multiset, &NaturalEquality)
}

/// Sørensen-Dice coefficient under `comparer`.
#[must_use]
pub fn sorensen_dice_by<T, C>(source: &[T], target: &[T], mode: SetMode, comparer: &C) -> f64
where
    C: ElementComparer<T> + ?Sized,
{
    SetSizes::of(source, target, mode, comparer).dice()
}

/// Multiset Sørensen-Dice coefficient with natural equality.
#[inline]
#[must_use]
pub fn sorensen_dice<T: Eq + Hash>(source: &[T], target: &[T]) -> f64 {
    sorensen_dice_by(source, target, SetMode::Multiset, &NaturalEquality)
}

/// Jaccard index over cached profiles.
#[must_use]
pub fn jaccard_profiles<T, C>(
    source: &FrequencyProfile<'_, T>,
    target: &FrequencyProfile<'_, T>,
    mode: SetMode,
    comparer: &C,
) -> f64
where
    C: ElementComparer<T> + ?Sized,
{
    SetSizes::from_profiles(source, target, mode, comparer).jaccard()
}

/// Overlap coefficient over cached profiles.
#[must_use]
pub fn overlap_profiles<T, C>(
    source: &FrequencyProfile<'_, T>,
    target: &FrequencyProfile<'_, T>,
    mode: SetMode,
    comparer: &C,
) -> f64
where
    C: ElementComparer<T> + ?Sized,
{
    SetSizes::from_profiles(source, target, mode, comparer).overlap()
}

/// Sørensen-Dice coefficient over cached profiles.
#[must_use]
pub fn dice_profiles<T, C>(
    source: &FrequencyProfile<'_, T>,
    target: &FrequencyProfile<'_, T>,
    mode: SetMode,
    comparer: &C,
) -> f64
where
    C: ElementComparer<T> + ?Sized,
{
    SetSizes::from_profiles(source, target, mode, comparer).dice()
}
