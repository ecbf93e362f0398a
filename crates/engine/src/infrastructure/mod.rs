//! Infrastructure implementations.
//!
//! File loading and environment configuration; everything that touches the
//! outside world lives here.

pub mod importers;
pub mod settings;
