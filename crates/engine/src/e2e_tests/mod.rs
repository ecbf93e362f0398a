//! End-to-end pipeline tests.
//!
//! These run full exports from `test_data/pathbuilder/` through loading,
//! derivation, classification, and presentation, and check the sheet a
//! renderer would receive.
//!
//! # Running
//!
//! ```bash
//! cargo test -p onepager-engine --lib e2e_tests
//! ```

mod classification_tests;
mod derivation_tests;
