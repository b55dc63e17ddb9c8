//! SSS LUT CLI library.
//!
//! Command implementations for the `sss-lut` binary, exposed as a library so
//! they can be driven directly from tests.

pub mod commands;
