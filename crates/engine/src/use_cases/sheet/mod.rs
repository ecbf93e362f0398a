//! One-page sheet use case: export in, model + profile + display hints out.

use std::path::Path;

use serde::{Deserialize, Serialize};

use onepager_domain::{CharacterModel, Profile};

use crate::infrastructure::importers::{ImportError, PathbuilderImporter, RawDocument};
use crate::infrastructure::settings::SheetSettings;
use crate::use_cases::character_sheet::assemble;
use crate::use_cases::presentation::{build_display, DisplayHints};
use crate::use_cases::profile::{classify, score, ProfileScores};

/// Everything a renderer needs for one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetResult {
    pub character: CharacterModel,
    pub profile: Profile,
    /// Emphasis scores, reported even when the profile was forced
    pub scores: ProfileScores,
    pub display: DisplayHints,
}

/// Sheet operations under fixed settings.
pub struct SheetOps {
    settings: SheetSettings,
}

impl SheetOps {
    pub fn new(settings: SheetSettings) -> Self {
        Self { settings }
    }

    /// Derive, classify, and select for an already-loaded export.
    pub fn build(&self, document: &RawDocument) -> SheetResult {
        let character = assemble(document);
        let scores = score(&character);
        let profile = classify(&character, self.settings.profile, self.settings.limits);
        let display = build_display(&character, &profile, &self.settings);

        tracing::info!(
            name = %character.identity().name,
            profile = %profile.profile_type,
            "Built character sheet"
        );

        SheetResult {
            character,
            profile,
            scores,
            display,
        }
    }

    /// Load an export file and build its sheet.
    pub fn build_from_file(&self, path: impl AsRef<Path>) -> Result<SheetResult, ImportError> {
        let document = PathbuilderImporter::new(path.as_ref()).import()?;
        Ok(self.build(&document))
    }

    /// Parse export JSON text and build its sheet.
    pub fn build_from_str(&self, json: &str) -> Result<SheetResult, ImportError> {
        let document = PathbuilderImporter::parse_str(json)?;
        Ok(self.build(&document))
    }
}

impl Default for SheetOps {
    fn default() -> Self {
        Self::new(SheetSettings::default())
    }
}
