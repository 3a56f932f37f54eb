//! I define generic traits and default implementations for *matchers*,
//! objects that can be used to match zero, one or several terms.
//!
//! Matchers are how patterns are expressed:
//! a quad-shaped query is four matchers,
//! one per component,
//! with [`Any`] playing the role of the wildcard.
//! Patterns are ephemeral query arguments; they are never stored.
//!
//! For methods using matchers, see
//! [`Quad::matched_by`](crate::quad::Quad::matched_by),
//! [`Dataset::matching`](crate::dataset::Dataset::matching) and
//! [`Dataset::remove_matching`](crate::dataset::Dataset::remove_matching).

use super::Term;

/// Generic trait for matching [`Term`]s of type `T`.
pub trait TermMatcher<T: Term> {
    /// Check whether this matcher matches `term`.
    fn matches(&self, term: &T) -> bool;
}

/// A universal matcher: it matches any [`Term`].
#[derive(Clone, Copy, Debug)]
pub struct Any;

impl<T: Term> TermMatcher<T> for Any {
    fn matches(&self, _: &T) -> bool {
        true
    }
}

/// Matches the wrapped term if any, otherwise matches nothing.
impl<T: Term> TermMatcher<T> for Option<T> {
    fn matches(&self, term: &T) -> bool {
        match self {
            Some(mine) => mine.equals(term),
            None => false,
        }
    }
}

/// Matches any of the terms in the array.
impl<T: Term, const N: usize> TermMatcher<T> for [T; N] {
    fn matches(&self, term: &T) -> bool {
        self.iter().any(|mine| mine.equals(term))
    }
}

/// Matches any of the terms in the slice.
impl<T: Term> TermMatcher<T> for &[T] {
    fn matches(&self, term: &T) -> bool {
        self.iter().any(|mine| mine.equals(term))
    }
}
