//! Terms are the components of a [`Quad`](crate::quad::Quad).
//!
//! The engine requires nothing from a term except *value equality*:
//! two terms are the same iff [`Term::equals`] says so,
//! regardless of where they live in memory.
//! Everything else about a term (IRIs, literals, datatypes...)
//! is opaque to this crate.

use std::fmt::Debug;

pub mod matcher;

/// Minimal contract for quad components.
///
/// [`equals`](Term::equals) must be an equivalence relation
/// (reflexive, symmetric, transitive).
/// The engine compares terms exclusively through it,
/// never by identity or address.
pub trait Term: Clone + Debug {
    /// Value equality with another term of the same type.
    fn equals(&self, other: &Self) -> bool;
}

impl Term for String {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Term for &str {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Term for u32 {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

/// A straightforward owned term implementation,
/// covering the usual kinds of RDF terms.
///
/// This is the type used by the test suite generated by
/// [`test_dataset_impl!`](crate::test_dataset_impl),
/// and a reasonable default for users
/// who do not bring their own term type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleTerm {
    /// An IRI.
    Iri(Box<str>),
    /// A blank node, identified by its local label.
    BlankNode(Box<str>),
    /// A literal, reduced to its lexical form.
    Literal(Box<str>),
    /// The name of the default graph.
    DefaultGraph,
}

impl SimpleTerm {
    /// An IRI term.
    pub fn iri(iri: impl Into<Box<str>>) -> Self {
        SimpleTerm::Iri(iri.into())
    }

    /// A blank node term with the given label.
    pub fn bnode(label: impl Into<Box<str>>) -> Self {
        SimpleTerm::BlankNode(label.into())
    }

    /// A literal term with the given lexical form.
    pub fn literal(value: impl Into<Box<str>>) -> Self {
        SimpleTerm::Literal(value.into())
    }
}

impl Term for SimpleTerm {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn simple_term_equality_is_by_value() {
        let t1 = SimpleTerm::iri("http://example.org/s");
        let t2 = SimpleTerm::iri("http://example.org/s");
        let t3 = SimpleTerm::literal("http://example.org/s");

        assert!(t1.equals(&t1));
        assert!(t1.equals(&t2));
        assert!(t2.equals(&t1));
        // same lexical value, different kind
        assert!(!t1.equals(&t3));
    }

    #[test]
    fn default_graph_is_its_own_kind() {
        assert!(SimpleTerm::DefaultGraph.equals(&SimpleTerm::DefaultGraph));
        assert!(!SimpleTerm::DefaultGraph.equals(&SimpleTerm::iri("")));
    }

    #[test]
    fn str_terms() {
        assert!("a".equals(&"a"));
        assert!(!"a".equals(&"b"));
    }
}
