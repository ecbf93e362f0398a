//! Onepager domain: the normalized character model, the Pathfinder 2e rules
//! it is derived under, and the layout profile vocabulary.
//!
//! Nothing here reads files or raw exports; the engine crate does the
//! importing and hands finished parts to [`CharacterModel::from_parts`].

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod game_systems;
pub mod value_objects;

pub use aggregates::{CharacterModel, CharacterParts, Defense, Identity, Mobility};

pub use entities::{
    sort_by_rank, CasterModel, Feat, FeatType, FocusSpell, ItemEntry, Skill, SpellEntry, Weapon,
    INVESTED_MARKER,
};

pub use error::DomainError;

// Re-export game system rules
pub use game_systems::{
    ability_modifier, check_total, proficiency_label, spell_attack, spell_dc, HitPointInputs,
    Pf2eProficiencyRank, Save, StrikingRune, SKILLS,
};

pub use value_objects::{
    Abilities, Ability, AbilityKey, DisplayLimits, Money, Profile, ProfileOverride, ProfileType,
    Section,
};
