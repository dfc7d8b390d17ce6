//! Projection and un-projection of Molt values by key selection.
//!
//! A [`Selection`] lists the keys of interest, optionally renamed from a
//! nested path or recursed into with a sub-selection. [`project`] keeps
//! only those keys in a new value; [`unproject`] deletes them from the
//! target in place; [`select`] builds a fixed-shape row.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod project;
pub mod selection;

pub use project::{project, select, unproject};
pub use selection::{Selection, Selector};
