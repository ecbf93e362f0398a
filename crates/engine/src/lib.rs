//! Onepager Engine library.
//!
//! Turns a Pathbuilder 2e character export into a normalized character model
//! and a one-page layout decision.
//!
//! ## Structure
//!
//! - `infrastructure/` - Export loading and environment settings
//! - `use_cases/` - Derivation stages, layout classification, presentation
//!   hints, and the sheet pipeline that runs them in order

pub mod infrastructure;
pub mod use_cases;

/// Shared export fixtures for tests.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end pipeline tests over the shared fixtures.
#[cfg(test)]
mod e2e_tests;

pub use infrastructure::importers::{ImportError, PathbuilderImporter, RawDocument};
pub use infrastructure::settings::SheetSettings;
pub use use_cases::{SheetOps, SheetResult};
