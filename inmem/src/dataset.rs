//! The reference in-memory backend and its dataset alias.

use quadset_api::dataset::{Backend, Dataset};
use quadset_api::quad::Quad;
use quadset_api::term::Term;

/// A backend storing quads in a vector, in insertion order.
///
/// All four primitives are linear, which is what the engine expects;
/// the order quads were inserted in is the order iteration exposes.
#[derive(Clone, Debug)]
pub struct VecBackend<T: Term>(Vec<Quad<T>>);

/// An empty store; no `T: Default` required.
impl<T: Term> Default for VecBackend<T> {
    fn default() -> Self {
        VecBackend(Vec::new())
    }
}

impl<T: Term> Backend for VecBackend<T> {
    type Term = T;

    fn insert(&mut self, quad: Quad<T>) {
        self.0.push(quad);
    }

    fn remove_one(&mut self, quad: &Quad<T>) -> bool {
        match self.0.iter().position(|q| q.equals(quad)) {
            Some(i) => {
                // shift-remove, to keep the iteration order stable
                self.0.remove(i);
                true
            }
            None => false,
        }
    }

    fn quads(&self) -> impl Iterator<Item = &Quad<T>> + '_ {
        self.0.iter()
    }

    fn construct<I>(quads: I) -> Self
    where
        I: IntoIterator<Item = Quad<T>>,
    {
        VecBackend(quads.into_iter().collect())
    }
}

/// A [`Dataset`] backed by a plain vector.
pub type ArrayDataset<T> = Dataset<VecBackend<T>>;

#[cfg(test)]
quadset_api::test_dataset_impl!(test_array, VecBackend<quadset_api::term::SimpleTerm>);

#[cfg(test)]
mod test {
    use super::*;
    use quadset_api::term::SimpleTerm;

    fn quad(o: &str) -> Quad<SimpleTerm> {
        Quad::new(
            SimpleTerm::iri("tag:s"),
            SimpleTerm::iri("tag:p"),
            SimpleTerm::literal(o),
            SimpleTerm::DefaultGraph,
        )
    }

    // Primitives are exercised directly here:
    // the backend must not second-guess the engine.

    #[test]
    fn insert_does_not_deduplicate() {
        let mut store = VecBackend::default();
        store.insert(quad("a"));
        store.insert(quad("a"));
        assert_eq!(store.quads().count(), 2);
    }

    #[test]
    fn remove_one_removes_a_single_occurrence() {
        let mut store = VecBackend::default();
        store.insert(quad("a"));
        store.insert(quad("a"));
        assert!(store.remove_one(&quad("a")));
        assert_eq!(store.quads().count(), 1);
        assert!(store.remove_one(&quad("a")));
        assert!(!store.remove_one(&quad("a")));
    }

    #[test]
    fn iteration_order_is_insertion_order() {
        let mut store = VecBackend::default();
        store.insert(quad("a"));
        store.insert(quad("b"));
        store.insert(quad("c"));
        store.remove_one(&quad("b"));
        let objects: Vec<_> = store.quads().map(|q| q.o().clone()).collect();
        assert_eq!(
            objects,
            vec![SimpleTerm::literal("a"), SimpleTerm::literal("c")]
        );
    }

    #[test]
    fn construct_builds_a_vec_backend_dataset() {
        let d: ArrayDataset<SimpleTerm> = vec![quad("a"), quad("b")].into_iter().collect();
        assert_eq!(d.len(), 2);
        let filtered = d.filter(|q| q.o().equals(&SimpleTerm::literal("a")));
        // pure operations return the same concrete kind
        let _: &ArrayDataset<SimpleTerm> = &filtered;
        assert_eq!(filtered.len(), 1);
    }
}
