//! A quad expresses a single fact within a context:
//! a ⟨subject, predicate, object, graph⟩ 4-tuple of [`Term`]s.
//!
//! Quads are immutable once constructed,
//! and equal iff all four components are pairwise
//! [equal](crate::term::Term::equals).
//! Because of this immutability,
//! quads and terms can safely be shared (read-only)
//! across several datasets.

use crate::term::matcher::TermMatcher;
use crate::term::Term;

/// An immutable ⟨subject, predicate, object, graph⟩ statement.
#[derive(Clone, Debug)]
pub struct Quad<T: Term> {
    subject: T,
    predicate: T,
    object: T,
    graph: T,
}

impl<T: Term> Quad<T> {
    /// Build a quad from its four components.
    pub fn new(subject: T, predicate: T, object: T, graph: T) -> Self {
        Quad {
            subject,
            predicate,
            object,
            graph,
        }
    }

    /// The subject of this quad.
    pub fn s(&self) -> &T {
        &self.subject
    }

    /// The predicate of this quad.
    pub fn p(&self) -> &T {
        &self.predicate
    }

    /// The object of this quad.
    pub fn o(&self) -> &T {
        &self.object
    }

    /// The graph name of this quad.
    pub fn g(&self) -> &T {
        &self.graph
    }

    /// Consume this quad, returning its components in SPOG order.
    pub fn to_spog(self) -> [T; 4] {
        [self.subject, self.predicate, self.object, self.graph]
    }

    /// Value equality: all four components pairwise equal.
    pub fn equals(&self, other: &Self) -> bool {
        self.subject.equals(&other.subject)
            && self.predicate.equals(&other.predicate)
            && self.object.equals(&other.object)
            && self.graph.equals(&other.graph)
    }

    /// Whether every component of this quad is accepted
    /// by the corresponding [matcher](TermMatcher).
    pub fn matched_by<S, P, O, G>(&self, sm: &S, pm: &P, om: &O, gm: &G) -> bool
    where
        S: TermMatcher<T>,
        P: TermMatcher<T>,
        O: TermMatcher<T>,
        G: TermMatcher<T>,
    {
        sm.matches(&self.subject)
            && pm.matches(&self.predicate)
            && om.matches(&self.object)
            && gm.matches(&self.graph)
    }
}

/// Delegates to [`Quad::equals`],
/// so that standard collections observe value equality as well.
impl<T: Term> PartialEq for Quad<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
