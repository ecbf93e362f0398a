//! Content importers for character exports.
//!
//! This module loads character builder exports and exposes them through a
//! lenient typed accessor for the derivation stages.

mod pathbuilder;
mod pathbuilder_types;

pub use pathbuilder::{ImportError, PathbuilderImporter};
pub use pathbuilder_types::{
    as_i32, names_feat, EquipmentRecord, FeatRecord, LoreRecord, RawDocument, RawView, BUILD_KEY,
};
