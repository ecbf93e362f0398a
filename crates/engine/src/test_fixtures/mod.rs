//! Test fixtures loader for Pathbuilder export files.
//!
//! Exports live under `test_data/pathbuilder/` in the engine crate.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::exports;
//!
//! #[test]
//! fn test_wizard_is_a_caster() {
//!     let document = exports::wizard_5();
//!     // ... test logic
//! }
//! ```

use std::path::PathBuf;

use crate::infrastructure::importers::{PathbuilderImporter, RawDocument};

// =============================================================================
// Fixture Loading
// =============================================================================

/// Absolute path of a fixture under `test_data/`.
pub fn fixture_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path)
}

/// Raw text of a fixture under `test_data/`.
///
/// # Panics
///
/// Panics if the fixture file cannot be read.
pub fn fixture_text(path: &str) -> String {
    let fixture_path = fixture_path(path);
    std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

/// Load a Pathbuilder export fixture.
///
/// # Panics
///
/// Panics if the fixture cannot be read or is not a valid export.
pub fn load_export(path: &str) -> RawDocument {
    let fixture_path = fixture_path(path);
    PathbuilderImporter::new(&fixture_path)
        .import()
        .unwrap_or_else(|e| {
            panic!(
                "Failed to load export '{}': {}",
                fixture_path.display(),
                e
            )
        })
}

// =============================================================================
// Export Fixtures
// =============================================================================

/// Pre-built character exports for testing.
pub mod exports {
    use super::*;

    pub const WIZARD_5: &str = "pathbuilder/wizard_5.json";
    pub const FIGHTER_5: &str = "pathbuilder/fighter_5.json";
    pub const MAGUS_5: &str = "pathbuilder/magus_5.json";

    /// Level 5 Wizard (Ezren).
    ///
    /// - Human, Skilled Heritage
    /// - Wrapped in `build`, breakdown-object `acTotal`
    /// - Prepared arcane caster, Force Bolt focus spell, Toughness
    pub fn wizard_5() -> RawDocument {
        load_export(WIZARD_5)
    }

    /// Level 5 Fighter (Harsk).
    ///
    /// - Rock Dwarf, bare document (no `build` wrapper)
    /// - Three weapons, one striking; no spellcasting
    pub fn fighter_5() -> RawDocument {
        load_export(FIGHTER_5)
    }

    /// Level 5 Magus (Kyra).
    ///
    /// - Ancient Elf with an innate spellcasting entry
    /// - Bounded prepared casting plus two weapons
    /// - A few deliberately malformed feat/lore/equipment records
    pub fn magus_5() -> RawDocument {
        load_export(MAGUS_5)
    }

    /// Get all test exports.
    pub fn all() -> Vec<RawDocument> {
        vec![wizard_5(), fighter_5(), magus_5()]
    }
}
