//! Ability scores and modifiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::game_systems::ability_modifier;

/// The six Pathfinder abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityKey {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl AbilityKey {
    /// All abilities in sheet order.
    pub const ALL: [AbilityKey; 6] = [
        AbilityKey::Str,
        AbilityKey::Dex,
        AbilityKey::Con,
        AbilityKey::Int,
        AbilityKey::Wis,
        AbilityKey::Cha,
    ];

    /// Key used by the builder export (`abilities.str`, `spellCasters[].ability`).
    pub fn key(&self) -> &'static str {
        match self {
            AbilityKey::Str => "str",
            AbilityKey::Dex => "dex",
            AbilityKey::Con => "con",
            AbilityKey::Int => "int",
            AbilityKey::Wis => "wis",
            AbilityKey::Cha => "cha",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            AbilityKey::Str => "STR",
            AbilityKey::Dex => "DEX",
            AbilityKey::Con => "CON",
            AbilityKey::Int => "INT",
            AbilityKey::Wis => "WIS",
            AbilityKey::Cha => "CHA",
        }
    }
}

/// Parses the export's exact lower-case keys only.
impl FromStr for AbilityKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AbilityKey::ALL
            .into_iter()
            .find(|key| key.key() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown ability key: {}", s)))
    }
}

/// A single ability with its derived modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    /// Display label ("STR", "DEX", ...)
    pub name: String,
    pub score: i32,
    pub modifier: i32,
}

impl Ability {
    /// Build an ability from its raw score; the modifier is always derived.
    pub fn from_score(key: AbilityKey, score: i32) -> Self {
        Self {
            name: key.abbreviation().to_string(),
            score,
            modifier: ability_modifier(score),
        }
    }
}

/// The six mandatory abilities of a character.
///
/// Every ability is always present; absent raw scores are defaulted to 10
/// before this value is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abilities {
    #[serde(rename = "str")]
    strength: Ability,
    #[serde(rename = "dex")]
    dexterity: Ability,
    #[serde(rename = "con")]
    constitution: Ability,
    #[serde(rename = "int")]
    intelligence: Ability,
    #[serde(rename = "wis")]
    wisdom: Ability,
    #[serde(rename = "cha")]
    charisma: Ability,
}

impl Abilities {
    /// Build all six abilities from a score lookup.
    pub fn from_scores(mut score_of: impl FnMut(AbilityKey) -> i32) -> Self {
        Self {
            strength: Ability::from_score(AbilityKey::Str, score_of(AbilityKey::Str)),
            dexterity: Ability::from_score(AbilityKey::Dex, score_of(AbilityKey::Dex)),
            constitution: Ability::from_score(AbilityKey::Con, score_of(AbilityKey::Con)),
            intelligence: Ability::from_score(AbilityKey::Int, score_of(AbilityKey::Int)),
            wisdom: Ability::from_score(AbilityKey::Wis, score_of(AbilityKey::Wis)),
            charisma: Ability::from_score(AbilityKey::Cha, score_of(AbilityKey::Cha)),
        }
    }

    pub fn get(&self, key: AbilityKey) -> &Ability {
        match key {
            AbilityKey::Str => &self.strength,
            AbilityKey::Dex => &self.dexterity,
            AbilityKey::Con => &self.constitution,
            AbilityKey::Int => &self.intelligence,
            AbilityKey::Wis => &self.wisdom,
            AbilityKey::Cha => &self.charisma,
        }
    }

    /// Shorthand for `get(key).modifier`.
    pub fn modifier(&self, key: AbilityKey) -> i32 {
        self.get(key).modifier
    }

    /// Abilities in sheet order (STR, DEX, CON, INT, WIS, CHA).
    pub fn as_list(&self) -> [&Ability; 6] {
        AbilityKey::ALL.map(|key| self.get(key))
    }
}

impl Default for Abilities {
    fn default() -> Self {
        Self::from_scores(|_| 10)
    }
}
