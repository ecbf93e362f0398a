//! Character aggregate - the normalized model of one exported character
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the aggregate is read through accessors only
//! - **Valid by construction**: all six abilities are always present
//! - **Immutable**: there are no `&mut self` methods; a model is assembled
//!   once from its parts and then only read

use serde::{Deserialize, Serialize};

use crate::entities::{CasterModel, Feat, FocusSpell, ItemEntry, Skill, Weapon};
use crate::value_objects::{Abilities, Money};

/// Who the character is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub level: i32,
    #[serde(rename = "class")]
    pub char_class: String,
    pub ancestry: String,
    pub heritage: String,
    pub background: String,
    pub alignment: String,
    pub gender: String,
    pub age: String,
    pub deity: String,
    pub size: String,
    pub languages: Vec<String>,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            level: 1,
            char_class: "Unknown".to_string(),
            ancestry: "Unknown".to_string(),
            heritage: String::new(),
            background: String::new(),
            alignment: String::new(),
            gender: String::new(),
            age: String::new(),
            deity: String::new(),
            size: "Medium".to_string(),
            languages: Vec::new(),
        }
    }
}

/// AC, hit points, saves, and Perception.
///
/// Each save is stored as its total next to the raw rank it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defense {
    pub ac: i32,
    pub hp: i32,
    pub fortitude: i32,
    pub fort_prof: i32,
    pub reflex: i32,
    pub reflex_prof: i32,
    pub will: i32,
    pub will_prof: i32,
    pub perception: i32,
    pub perception_prof: i32,
    pub resistances: Vec<String>,
}

impl Default for Defense {
    fn default() -> Self {
        Self {
            ac: 10,
            hp: 0,
            fortitude: 0,
            fort_prof: 0,
            reflex: 0,
            reflex_prof: 0,
            will: 0,
            will_prof: 0,
            perception: 0,
            perception_prof: 0,
            resistances: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mobility {
    /// Land speed in feet, bonuses included
    pub speed: i32,
}

impl Mobility {
    pub fn new(base_speed: i32, speed_bonus: i32) -> Self {
        Self {
            speed: base_speed.saturating_add(speed_bonus),
        }
    }
}

impl Default for Mobility {
    fn default() -> Self {
        Self { speed: 25 }
    }
}

/// Everything the assembler gathers before sealing the aggregate.
#[derive(Debug, Clone, Default)]
pub struct CharacterParts {
    pub identity: Identity,
    pub abilities: Abilities,
    pub defense: Defense,
    pub mobility: Mobility,
    pub skills: Vec<Skill>,
    pub lores: Vec<Skill>,
    pub feats: Vec<Feat>,
    pub specials: Vec<String>,
    pub weapons: Vec<Weapon>,
    pub items: Vec<ItemEntry>,
    pub money: Money,
    pub spellcasters: Vec<CasterModel>,
    pub focus_points: i32,
    pub focus_spells: Vec<FocusSpell>,
}

/// A fully derived player character.
///
/// # Invariants
///
/// - All six abilities are present
/// - Every save/skill total agrees with its rank and governing ability
/// - `notes` is always empty; nothing in the import path produces notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterModel {
    identity: Identity,
    abilities: Abilities,
    defense: Defense,
    mobility: Mobility,
    skills: Vec<Skill>,
    lores: Vec<Skill>,
    feats: Vec<Feat>,
    specials: Vec<String>,
    weapons: Vec<Weapon>,
    items: Vec<ItemEntry>,
    money: Money,
    spellcasters: Vec<CasterModel>,
    focus_points: i32,
    focus_spells: Vec<FocusSpell>,
    notes: Vec<String>,
}

impl CharacterModel {
    /// Seal the derived parts into an immutable model.
    pub fn from_parts(parts: CharacterParts) -> Self {
        Self {
            identity: parts.identity,
            abilities: parts.abilities,
            defense: parts.defense,
            mobility: parts.mobility,
            skills: parts.skills,
            lores: parts.lores,
            feats: parts.feats,
            specials: parts.specials,
            weapons: parts.weapons,
            items: parts.items,
            money: parts.money,
            spellcasters: parts.spellcasters,
            focus_points: parts.focus_points,
            focus_spells: parts.focus_spells,
            notes: Vec::new(),
        }
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn level(&self) -> i32 {
        self.identity.level
    }

    pub fn abilities(&self) -> &Abilities {
        &self.abilities
    }

    pub fn defense(&self) -> &Defense {
        &self.defense
    }

    pub fn mobility(&self) -> Mobility {
        self.mobility
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn lores(&self) -> &[Skill] {
        &self.lores
    }

    pub fn feats(&self) -> &[Feat] {
        &self.feats
    }

    /// Class features and other specials, passed through from the export.
    pub fn specials(&self) -> &[String] {
        &self.specials
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn items(&self) -> &[ItemEntry] {
        &self.items
    }

    pub fn money(&self) -> Money {
        self.money
    }

    pub fn spellcasters(&self) -> &[CasterModel] {
        &self.spellcasters
    }

    pub fn focus_points(&self) -> i32 {
        self.focus_points
    }

    pub fn focus_spells(&self) -> &[FocusSpell] {
        &self.focus_spells
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}
