//! # xyzio
//!
//! A small library for reading and writing the XYZ chemical-geometry text
//! format: sequences of molecule blocks, each made of an atom-count line, a
//! free-text comment line, and one whitespace-separated line per atom
//! (element symbol, Cartesian coordinates, and optional trailing numeric
//! columns such as velocities or charges).
//!
//! ## Architecture
//!
//! The library is split into two leaf-level layers with no dependencies
//! between them beyond the data types:
//!
//! - **[`models`]: The Data.** Immutable value types ([`AtomRecord`],
//!   [`MoleculeRecord`]) with validating constructors, so that an invalid
//!   record (e.g. mixed extra-column arity within one molecule) cannot be
//!   built in the first place.
//!
//! - **[`io`]: The Format.** The [`XyzFile`] parser/formatter behind the
//!   [`ChemicalFile`] trait, which also supplies the path-based convenience
//!   glue. Parsing is strict, single-pass, and fail-fast: the first grammar
//!   violation aborts the whole read.
//!
//! ## Example
//!
//! ```
//! use xyzio::{ChemicalFile, XyzFile};
//!
//! let input = "3\nwater\nH 0.0 -1.0 0.0\nO 0.0 0.0 1.0\nH 0.0 1.0 0.0\n";
//! let molecules = XyzFile::read_from(&mut input.as_bytes()).unwrap();
//! assert_eq!(molecules[0].natoms(), 3);
//! assert_eq!(molecules[0].comment(), "water");
//! assert_eq!(molecules[0].atoms()[0].symbol(), "H");
//! ```

pub mod io;
pub mod models;

pub use io::traits::ChemicalFile;
pub use io::xyz::{XyzError, XyzFile, XyzFormatErrorKind};
pub use models::atom::AtomRecord;
pub use models::molecule::{ExtraLengthMismatch, InvalidMoleculeRecord, MoleculeRecord};
