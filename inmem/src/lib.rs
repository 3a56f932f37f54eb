//! In-memory implementation of the quadset
//! [`Backend`](quadset_api::dataset::Backend).
//!
//! This crate provides the reference backend, [`VecBackend`]:
//! a plain vector kept in insertion order.
//! It is deliberately simple — every operation is linear —
//! and mostly serves to illustrate the backend contract;
//! the interesting logic all lives in the
//! [`Dataset`](quadset_api::dataset::Dataset) engine.

mod dataset;
pub use self::dataset::*;
