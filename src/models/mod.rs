//! Data structures for XYZ molecule records.
//!
//! This module contains the immutable value types produced by the parser and
//! consumed by the formatter. Records are validated at construction time, so
//! a [`molecule::MoleculeRecord`] that exists is guaranteed to satisfy the
//! format's structural invariants.

pub mod atom;
pub mod molecule;
