//! A "prelude" re-exporting the most commonly used symbols of this crate.

pub use crate::dataset::{Backend, Dataset};
pub use crate::quad::Quad;
pub use crate::source::{DatasetStream, SourceError};
pub use crate::term::matcher::{Any, TermMatcher};
pub use crate::term::{SimpleTerm, Term};
