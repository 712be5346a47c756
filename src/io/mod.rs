//! Input/output functionality for the XYZ text format.
//!
//! This module provides a trait-based interface for reading and writing
//! chemical geometry files, together with the XYZ implementation. Parsing is
//! strict and single-pass: lines are consumed through a forward-only cursor
//! and the first grammar violation aborts the whole read.

pub mod traits;
pub mod xyz;
