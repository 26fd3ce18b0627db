//! Domain logic: compare a schema index against a rules index.
//!
//! This crate owns *what* counts as drift between the two documents. It does
//! not read files or render output; see `schemasync-core` and
//! `schemasync-render`.

mod diff;

pub use diff::{diff_indexes, is_consistent};
