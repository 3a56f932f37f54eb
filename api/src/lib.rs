//! This crate provides the core of `quadset`,
//! a toolkit for collections of quads
//! (subject-predicate-object-graph statements)
//! with mathematical *set* semantics:
//! membership is decided by value equality of the four components,
//! never by identity.
//!
//! The crate is organized around a strict separation of concerns:
//!
//! * the [`Backend`](dataset::Backend) trait captures the four storage
//!   primitives a concrete representation must supply
//!   (insert, remove-one, iterate, construct);
//! * the [`Dataset`](dataset::Dataset) engine derives everything else
//!   (set algebra, filtering, pattern matching)
//!   from those primitives and quad equality alone;
//! * the [`source`] module bridges push-style quad sources into a dataset
//!   and exposes a dataset as a pull-style stream.
//!
//! A reference backend is provided by the `quadset_inmem` crate.

pub mod dataset;
pub mod prelude;
pub mod quad;
pub mod source;
pub mod term;
