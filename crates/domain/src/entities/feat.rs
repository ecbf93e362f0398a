//! Feats taken by a character.
//!
//! The builder tags each feat with a display label ("Class Feat",
//! "Skill Feat", ...). Known labels map to a [`FeatType`] category; anything
//! else is kept verbatim so a sheet can still list it under "Other".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a feat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeatType {
    Class,
    Skill,
    General,
    Ancestry,
    Archetype,
    Heritage,
    Awarded,
    /// Builder label with no known category, kept as-is.
    Other(String),
}

impl FeatType {
    /// Map a builder label ("Class Feat") to a category; unknown labels pass through.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Class Feat" => FeatType::Class,
            "Skill Feat" => FeatType::Skill,
            "General Feat" => FeatType::General,
            "Ancestry Feat" => FeatType::Ancestry,
            "Archetype Feat" => FeatType::Archetype,
            "Heritage" => FeatType::Heritage,
            "Awarded Feat" => FeatType::Awarded,
            other => FeatType::Other(other.to_string()),
        }
    }

    /// Internal tag ("class", "skill", ...) or the raw label for `Other`.
    pub fn as_str(&self) -> &str {
        match self {
            FeatType::Class => "class",
            FeatType::Skill => "skill",
            FeatType::General => "general",
            FeatType::Ancestry => "ancestry",
            FeatType::Archetype => "archetype",
            FeatType::Heritage => "heritage",
            FeatType::Awarded => "awarded",
            FeatType::Other(label) => label,
        }
    }

    pub fn is_categorized(&self) -> bool {
        !matches!(self, FeatType::Other(_))
    }
}

impl From<String> for FeatType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "class" => FeatType::Class,
            "skill" => FeatType::Skill,
            "general" => FeatType::General,
            "ancestry" => FeatType::Ancestry,
            "archetype" => FeatType::Archetype,
            "heritage" => FeatType::Heritage,
            "awarded" => FeatType::Awarded,
            _ => FeatType::Other(value),
        }
    }
}

impl From<FeatType> for String {
    fn from(value: FeatType) -> Self {
        match value {
            FeatType::Other(label) => label,
            categorized => categorized.as_str().to_string(),
        }
    }
}

impl fmt::Display for FeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A feat as shown on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feat {
    /// Display name, with any sub-choice appended: "Weapon Focus (Swords)"
    pub name: String,
    pub feat_type: FeatType,
    /// Character level the feat was taken at (0 if unknown)
    pub level: i32,
}

impl Feat {
    /// Build a feat from its builder parts; an empty sub-choice is ignored.
    pub fn new(name: &str, sub_choice: Option<&str>, label: &str, level: i32) -> Self {
        let name = match sub_choice {
            Some(choice) if !choice.is_empty() => format!("{} ({})", name, choice),
            _ => name.to_string(),
        };
        Self {
            name,
            feat_type: FeatType::from_label(label),
            level,
        }
    }
}
