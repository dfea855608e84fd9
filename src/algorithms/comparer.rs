//! Element equality predicates
//!
//! Every algorithm takes its comparer explicitly. A comparer must behave as an
//! equivalence relation, and `hash_element` must agree with `equals`: two
//! elements that compare equal must feed the same bytes to the hasher. The
//! set-based metrics and the Damerau-Levenshtein last-row dictionary rely on
//! that to group elements in hash maps.

use std::hash::{Hash, Hasher};

/// Equality over sequence elements.
pub trait ElementComparer<T: ?Sized>: Send + Sync {
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Feed a hash of `value` consistent with [`ElementComparer::equals`].
    fn hash_element<H: Hasher>(&self, value: &T, state: &mut H);
}

/// The element type's own `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalEquality;

impl<T: Eq + Hash + ?Sized> ElementComparer<T> for NaturalEquality {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn hash_element<H: Hasher>(&self, value: &T, state: &mut H) {
        value.hash(state);
    }
}

/// Compares elements by a projected key.
///
/// ```
/// use fuzzyseq::algorithms::{levenshtein_by, ByKey};
///
/// let a = [("x", 1), ("y", 2)];
/// let b = [("z", 1), ("w", 2)];
/// assert_eq!(levenshtein_by(&a, &b, &ByKey::new(|p: &(&str, i32)| p.1)), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    #[must_use]
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T: ?Sized, K, F> ElementComparer<T> for ByKey<F>
where
    F: Fn(&T) -> K + Send + Sync,
    K: Eq + Hash,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }

    #[inline]
    fn hash_element<H: Hasher>(&self, value: &T, state: &mut H) {
        (self.key)(value).hash(state);
    }
}

/// Case-insensitive `char` comparison using Unicode lowercase mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl ElementComparer<char> for CaseInsensitive {
    #[inline]
    fn equals(&self, a: &char, b: &char) -> bool {
        a == b || a.to_lowercase().eq(b.to_lowercase())
    }

    #[inline]
    fn hash_element<H: Hasher>(&self, value: &char, state: &mut H) {
        for c in value.to_lowercase() {
            c.hash(state);
        }
    }
}

/// Adapter giving an element `Hash + Eq` through a comparer, so it can key an
/// `AHashMap`.
pub(crate) struct Keyed<'a, T: ?Sized, C: ?Sized> {
    pub(crate) value: &'a T,
    comparer: &'a C,
}

impl<'a, T: ?Sized, C: ?Sized> Keyed<'a, T, C> {
    #[inline]
    pub(crate) fn new(value: &'a T, comparer: &'a C) -> Self {
        Self { value, comparer }
    }
}

impl<T: ?Sized, C: ElementComparer<T> + ?Sized> Hash for Keyed<'_, T, C> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparer.hash_element(self.value, state);
    }
}

impl<T: ?Sized, C: ElementComparer<T> + ?Sized> PartialEq for Keyed<'_, T, C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.comparer.equals(self.value, other.value)
    }
}

impl<T: ?Sized, C: ElementComparer<T> + ?Sized> Eq for Keyed<'_, T, C> {}
