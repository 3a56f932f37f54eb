//! A dataset is a collection of [`Quad`]s with *set* semantics:
//! no two quads it holds are [equal](Quad::equals) by value.
//!
//! This module separates two concerns:
//!
//! * the [`Backend`] trait captures the four primitives a concrete storage
//!   representation must supply;
//! * the [`Dataset`] engine derives every other operation from those
//!   primitives plus quad equality, and enforces the set semantics itself.
//!
//! The engine assumes single-threaded, sequential access:
//! mutating operations must not be interleaved with an in-progress
//! iteration over the same dataset.

use crate::quad::Quad;
use crate::term::matcher::TermMatcher;
use crate::term::Term;


/// Storage primitives required by the [`Dataset`] engine.
///
/// A backend is free in its representation
/// (dynamic array, hash index keyed by a canonical encoding, tree...)
/// as long as the four primitives observe the contracts below.
/// Uniqueness of quads is enforced by the engine, never by the backend;
/// a backend must not silently deduplicate on its own.
///
/// All four primitives being trait methods,
/// a dataset over an incomplete backend simply does not compile;
/// there is no runtime "capability missing" failure mode.
pub trait Backend: Sized {
    /// The type of term stored in this backend's quads.
    type Term: Term;

    /// Add exactly one quad to the store.
    ///
    /// This is only called after the engine has verified that `quad` is not
    /// already present; implementations must neither re-check nor drop it.
    fn insert(&mut self, quad: Quad<Self::Term>);

    /// Remove one specific, previously inserted quad from the store.
    ///
    /// Returns `true` iff a quad equal to `quad` was found and removed.
    fn remove_one(&mut self, quad: &Quad<Self::Term>) -> bool;

    /// Iterate over the stored quads,
    /// in a backend-defined but stable order,
    /// without materializing a copy.
    fn quads(&self) -> impl Iterator<Item = &Quad<Self::Term>> + '_;

    /// Build a new store of the same concrete kind,
    /// pre-populated with `quads`.
    ///
    /// The engine only feeds this primitive sequences
    /// it has already deduplicated.
    fn construct<I>(quads: I) -> Self
    where
        I: IntoIterator<Item = Quad<Self::Term>>;
}

/// A collection of quads with set semantics,
/// generic over its storage [`Backend`].
///
/// Operations come in two flavours:
///
/// * *mutating* operations ([`add`], [`add_all`], [`remove`],
///   [`remove_matching`], [`import`]) change the receiver in place;
/// * *pure* operations ([`filter`], [`map`], [`matching`], [`difference`],
///   [`intersection`], [`union`], [`Clone`], [`to_stream`])
///   never touch the receiver nor their arguments,
///   and return a freshly built dataset of the same concrete kind.
///
/// Iteration order is whatever the backend exposes;
/// the engine neither guarantees nor requires any particular order.
///
/// ```
/// use quadset_api::dataset::{Backend, Dataset};
///
/// fn purge<B: Backend>(d: &mut Dataset<B>, unwanted: &Dataset<B>) {
///     for q in unwanted.quads() {
///         d.remove(q);
///     }
/// }
/// ```
///
/// [`add`]: Dataset::add
/// [`add_all`]: Dataset::add_all
/// [`remove`]: Dataset::remove
/// [`remove_matching`]: Dataset::remove_matching
/// [`import`]: Dataset::import
/// [`filter`]: Dataset::filter
/// [`map`]: Dataset::map
/// [`matching`]: Dataset::matching
/// [`difference`]: Dataset::difference
/// [`intersection`]: Dataset::intersection
/// [`union`]: Dataset::union
/// [`to_stream`]: Dataset::to_stream
pub struct Dataset<B: Backend> {
    store: B,
}

impl<B: Backend> Dataset<B> {
    /// An empty dataset.
    ///
    /// To seed a dataset from an initial quad collection, `collect()` it:
    /// value-duplicates collapse, as everywhere else.
    pub fn new() -> Self {
        Dataset {
            store: B::construct(std::iter::empty()),
        }
    }

    /// The number of distinct quads currently held.
    ///
    /// Linear in the backend's iteration.
    pub fn len(&self) -> usize {
        self.store.quads().count()
    }

    /// Whether this dataset holds no quad at all.
    pub fn is_empty(&self) -> bool {
        self.store.quads().next().is_none()
    }

    /// Iterate over the quads of this dataset, in the backend's order.
    pub fn quads(&self) -> impl Iterator<Item = &Quad<B::Term>> + '_ {
        self.store.quads()
    }

    /// Whether this dataset contains a quad [equal](Quad::equals) to `quad`.
    ///
    /// Linear scan using quad equality.
    pub fn contains(&self, quad: &Quad<B::Term>) -> bool {
        self.quads().any(|q| q.equals(quad))
    }

    /// Insert `quad`, unless an equal quad is already present.
    ///
    /// Returns `true` iff the insertion actually changed the dataset.
    pub fn add(&mut self, quad: Quad<B::Term>) -> bool {
        if self.contains(&quad) {
            false
        } else {
            self.store.insert(quad);
            true
        }
    }

    /// [`add`](Dataset::add) every quad of `quads`, in sequence order.
    ///
    /// Returns the number of quads actually inserted
    /// (duplicates, within `quads` or with the current contents, collapse).
    pub fn add_all<I>(&mut self, quads: I) -> usize
    where
        I: IntoIterator<Item = Quad<B::Term>>,
    {
        let mut inserted = 0;
        for quad in quads {
            if self.add(quad) {
                inserted += 1;
            }
        }
        inserted
    }

    /// New dataset of the quads satisfying `predicate`.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Quad<B::Term>) -> bool,
    {
        let kept = self.quads().filter(move |q| predicate(q)).cloned();
        Dataset {
            store: B::construct(kept),
        }
    }

    /// New dataset built from the image of every quad through `f`.
    ///
    /// The result goes through the uniqueness-collapsing constructor:
    /// colliding outputs merge into a single quad.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&Quad<B::Term>) -> Quad<B::Term>,
    {
        self.quads().map(f).collect()
    }

    /// Whether `predicate` holds for every quad of this dataset.
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Quad<B::Term>) -> bool,
    {
        self.quads().all(|q| predicate(q))
    }

    /// Whether `predicate` holds for at least one quad of this dataset.
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Quad<B::Term>) -> bool,
    {
        self.quads().any(|q| predicate(q))
    }

    /// New dataset of the quads matched by the given pattern,
    /// one [matcher](TermMatcher) per component.
    ///
    /// [`Any`](crate::term::matcher::Any) is the wildcard;
    /// `matching(Any, Any, Any, Any)` yields a dataset
    /// with the same contents as the receiver.
    pub fn matching<S, P, O, G>(&self, sm: S, pm: P, om: O, gm: G) -> Self
    where
        S: TermMatcher<B::Term>,
        P: TermMatcher<B::Term>,
        O: TermMatcher<B::Term>,
        G: TermMatcher<B::Term>,
    {
        self.filter(|q| q.matched_by(&sm, &pm, &om, &gm))
    }

    /// Remove every quad [equal](Quad::equals) to `quad`.
    ///
    /// A well-formed dataset holds at most one such quad,
    /// but duplicates a backend might have accumulated are swept as well.
    /// The quads to remove are computed *before* any mutation,
    /// so removal never interacts with the iteration it is based on.
    ///
    /// Returns the number of quads removed (0 or more).
    pub fn remove(&mut self, quad: &Quad<B::Term>) -> usize {
        let doomed: Vec<Quad<B::Term>> = self
            .quads()
            .filter(|q| q.equals(quad))
            .cloned()
            .collect();
        for q in &doomed {
            self.store.remove_one(q);
        }
        doomed.len()
    }

    /// Remove every quad matched by the given pattern.
    ///
    /// Like [`remove`](Dataset::remove),
    /// the matched quads are snapshotted before any mutation.
    /// Returns the number of quads removed.
    pub fn remove_matching<S, P, O, G>(&mut self, sm: S, pm: P, om: O, gm: G) -> usize
    where
        S: TermMatcher<B::Term>,
        P: TermMatcher<B::Term>,
        O: TermMatcher<B::Term>,
        G: TermMatcher<B::Term>,
    {
        let doomed: Vec<Quad<B::Term>> = self
            .quads()
            .filter(|q| q.matched_by(&sm, &pm, &om, &gm))
            .cloned()
            .collect();
        for q in &doomed {
            self.store.remove_one(q);
        }
        doomed.len()
    }

    /// New dataset of the quads of `self` not present in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.filter(|q| !other.contains(q))
    }

    /// New dataset of the quads of `self` also present in `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        self.filter(|q| other.contains(q))
    }

    /// New dataset containing the quads of both `self` and `other`.
    ///
    /// Neither operand is mutated.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.add_all(other.quads().cloned());
        result
    }

    /// Materialize the current contents into an ordered snapshot.
    pub fn to_vec(&self) -> Vec<Quad<B::Term>> {
        self.quads().cloned().collect()
    }
}

/// Builds a dataset of the same concrete kind via the
/// [`construct`](Backend::construct) primitive;
/// `B` itself does not need to be `Clone`.
impl<B: Backend> Clone for Dataset<B> {
    fn clone(&self) -> Self {
        Dataset {
            store: B::construct(self.quads().cloned()),
        }
    }
}

impl<B: Backend> Default for Dataset<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Seeds a new dataset from a quad collection;
/// value-duplicates collapse.
impl<B: Backend> FromIterator<Quad<B::Term>> for Dataset<B> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Quad<B::Term>>,
    {
        let mut dataset = Self::new();
        dataset.add_all(iter);
        dataset
    }
}

/// Equivalent to [`Dataset::add_all`].
impl<B: Backend> Extend<Quad<B::Term>> for Dataset<B> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Quad<B::Term>>,
    {
        self.add_all(iter);
    }
}

impl<'a, B: Backend> IntoIterator for &'a Dataset<B> {
    type Item = &'a Quad<B::Term>;
    type IntoIter = Box<dyn Iterator<Item = &'a Quad<B::Term>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.store.quads())
    }
}

/// *Set* equality: same number of quads, and mutual containment.
impl<B: Backend> PartialEq for Dataset<B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.all(|q| other.contains(q))
    }
}

impl<B: Backend> std::fmt::Debug for Dataset<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.quads()).finish()
    }
}

#[cfg(test)]
mod check_implementability {
    //! A deliberately naive backend,
    //! checking that the engine can be driven
    //! through nothing but the four primitives.

    use super::test::TestStore;
    use crate::term::SimpleTerm;

    crate::test_dataset_impl!(engine_over_vec_store, TestStore<SimpleTerm>);
}
