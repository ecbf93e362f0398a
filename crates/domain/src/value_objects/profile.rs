//! Layout profiles: which sections a sheet emphasizes and in what order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A sheet section, in the vocabulary the renderer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Defense,
    Skills,
    Weapons,
    Spellcasting,
    Focus,
    Items,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Defense => "defense",
            Section::Skills => "skills",
            Section::Weapons => "weapons",
            Section::Spellcasting => "spellcasting",
            Section::Focus => "focus",
            Section::Items => "items",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const CASTER_SECTIONS: [Section; 6] = [
    Section::Defense,
    Section::Skills,
    Section::Weapons,
    Section::Spellcasting,
    Section::Focus,
    Section::Items,
];

const MARTIAL_SECTIONS: [Section; 6] = [
    Section::Defense,
    Section::Weapons,
    Section::Skills,
    Section::Items,
    Section::Spellcasting,
    Section::Focus,
];

const HYBRID_SECTIONS: [Section; 6] = [
    Section::Defense,
    Section::Weapons,
    Section::Skills,
    Section::Spellcasting,
    Section::Focus,
    Section::Items,
];

/// Mechanical emphasis of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Caster,
    Martial,
    Hybrid,
}

impl ProfileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Caster => "caster",
            ProfileType::Martial => "martial",
            ProfileType::Hybrid => "hybrid",
        }
    }

    /// Fixed section ordering for this profile.
    pub fn section_order(&self) -> &'static [Section] {
        match self {
            ProfileType::Caster => &CASTER_SECTIONS,
            ProfileType::Martial => &MARTIAL_SECTIONS,
            ProfileType::Hybrid => &HYBRID_SECTIONS,
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProfileType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caster" => Ok(ProfileType::Caster),
            "martial" => Ok(ProfileType::Martial),
            "hybrid" => Ok(ProfileType::Hybrid),
            _ => Err(DomainError::parse(format!("Unknown profile: {}", s))),
        }
    }
}

/// Requested classification mode: score the character, or force a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProfileOverride {
    #[default]
    Auto,
    Fixed(ProfileType),
}

impl fmt::Display for ProfileOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileOverride::Auto => write!(f, "auto"),
            ProfileOverride::Fixed(profile_type) => write!(f, "{}", profile_type),
        }
    }
}

impl FromStr for ProfileOverride {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(ProfileOverride::Auto);
        }
        s.parse().map(ProfileOverride::Fixed)
    }
}

impl TryFrom<String> for ProfileOverride {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProfileOverride> for String {
    fn from(value: ProfileOverride) -> Self {
        value.to_string()
    }
}

/// How much of each list the renderer should show. Has no effect on
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLimits {
    pub max_skills: usize,
    pub max_feats: Option<usize>,
    pub max_spells_per_rank: usize,
}

impl DisplayLimits {
    /// Limits with the list caps checked; a zero cap would empty a section.
    pub fn new(
        max_skills: usize,
        max_feats: Option<usize>,
        max_spells_per_rank: usize,
    ) -> Result<Self, DomainError> {
        if max_skills == 0 {
            return Err(DomainError::validation("max_skills must be at least 1"));
        }
        if max_spells_per_rank == 0 {
            return Err(DomainError::validation(
                "max_spells_per_rank must be at least 1",
            ));
        }
        if max_feats == Some(0) {
            return Err(DomainError::validation("max_feats must be at least 1"));
        }
        Ok(Self {
            max_skills,
            max_feats,
            max_spells_per_rank,
        })
    }
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            max_skills: 8,
            max_feats: None,
            max_spells_per_rank: 10,
        }
    }
}

/// Layout decision for one character sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub profile_type: ProfileType,
    pub section_order: Vec<Section>,
    pub max_skills: usize,
    pub max_feats: Option<usize>,
    pub max_spells_per_rank: usize,
}

impl Profile {
    pub fn new(profile_type: ProfileType, limits: DisplayLimits) -> Self {
        Self {
            profile_type,
            section_order: profile_type.section_order().to_vec(),
            max_skills: limits.max_skills,
            max_feats: limits.max_feats,
            max_spells_per_rank: limits.max_spells_per_rank,
        }
    }
}
