//! Set-relationship predicates over plain sequences.
//!
//! Tag collections travel as sequences but carry set semantics: order and
//! duplicates never change an answer. These predicates take slices so the
//! filtering layer can ask about borrowed data directly; tag lists are
//! short enough that scanning beats building a hash set, and `PartialEq`
//! is the only bound required of elements.

/// Returns true if any element of `haystack` equals `needle`.
#[must_use]
pub fn member<T: PartialEq>(needle: &T, haystack: &[T]) -> bool {
    haystack.iter().any(|candidate| candidate == needle)
}

/// Returns true if every element of `required` occurs in `actual`.
///
/// The empty sequence is a subset of everything, itself included.
#[must_use]
pub fn subset<T: PartialEq>(required: &[T], actual: &[T]) -> bool {
    required.iter().all(|needle| member(needle, actual))
}

/// Returns true if `a` and `b` share at least one element.
///
/// The empty sequence overlaps nothing.
#[must_use]
pub fn overlap<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.iter().any(|needle| member(needle, b))
}

/// Returns true if `a` and `b` share no element. The negation of
/// [`overlap`], so two empty sequences are disjoint.
#[must_use]
pub fn disjoint<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    !overlap(a, b)
}
