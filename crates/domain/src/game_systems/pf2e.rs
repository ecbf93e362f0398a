//! Pathfinder 2nd Edition rules used to derive a character sheet.
//!
//! PF2e proficiency is level-dependent: a trained (or better) character adds
//! `level + rank bonus` to a check. Raw exports store the rank bonus directly
//! (0/2/4/6/8), so every formula here takes the raw integer and never rejects
//! an unusual value; it simply flows through the arithmetic. All sums
//! saturate at the `i32` bounds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::AbilityKey;

/// Pathfinder 2e proficiency ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pf2eProficiencyRank {
    /// Not trained in the skill
    Untrained,
    /// Basic training (+2 + level)
    Trained,
    /// Advanced training (+4 + level)
    Expert,
    /// Mastery (+6 + level)
    Master,
    /// Ultimate mastery (+8 + level)
    Legendary,
}

impl Pf2eProficiencyRank {
    /// Map a raw rank bonus from the export back to a named rank.
    ///
    /// Returns `None` for values outside 0/2/4/6/8.
    pub fn from_rank_bonus(bonus: i32) -> Option<Self> {
        match bonus {
            0 => Some(Pf2eProficiencyRank::Untrained),
            2 => Some(Pf2eProficiencyRank::Trained),
            4 => Some(Pf2eProficiencyRank::Expert),
            6 => Some(Pf2eProficiencyRank::Master),
            8 => Some(Pf2eProficiencyRank::Legendary),
            _ => None,
        }
    }

    /// Single-letter sheet label (U/T/E/M/L).
    pub fn letter(&self) -> &'static str {
        match self {
            Pf2eProficiencyRank::Untrained => "U",
            Pf2eProficiencyRank::Trained => "T",
            Pf2eProficiencyRank::Expert => "E",
            Pf2eProficiencyRank::Master => "M",
            Pf2eProficiencyRank::Legendary => "L",
        }
    }
}

/// Sheet label for a raw rank bonus; empty for unknown values.
pub fn proficiency_label(rank_bonus: i32) -> &'static str {
    Pf2eProficiencyRank::from_rank_bonus(rank_bonus)
        .map(|rank| rank.letter())
        .unwrap_or("")
}

/// `floor((score - 10) / 2)`.
pub fn ability_modifier(score: i32) -> i32 {
    score.saturating_sub(10).div_euclid(2)
}

/// Total for a save, Perception, skill, or lore.
///
/// An untrained (rank 0) check totals 0; otherwise
/// `(level + rank) + ability_modifier`.
pub fn check_total(level: i32, rank_bonus: i32, ability_modifier: i32) -> i32 {
    if rank_bonus == 0 {
        0
    } else {
        level
            .saturating_add(rank_bonus)
            .saturating_add(ability_modifier)
    }
}

/// Spell attack modifier: `(level + proficiency) + ability_modifier`.
///
/// Unlike [`check_total`] this does not zero out at proficiency 0.
pub fn spell_attack(level: i32, proficiency: i32, ability_modifier: i32) -> i32 {
    level
        .saturating_add(proficiency)
        .saturating_add(ability_modifier)
}

/// Spell DC: `10 + spell_attack`.
pub fn spell_dc(level: i32, proficiency: i32, ability_modifier: i32) -> i32 {
    spell_attack(level, proficiency, ability_modifier).saturating_add(10)
}

/// Inputs of the max HP formula, as read from the export's `attributes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitPointInputs {
    pub level: i32,
    pub ancestry_hp: i32,
    pub class_hp: i32,
    pub con_modifier: i32,
    pub bonus_hp_per_level: i32,
    pub bonus_hp: i32,
    /// Whether the Toughness feat was taken (+level HP).
    pub toughness: bool,
}

impl HitPointInputs {
    /// `ancestry + (class + con + bonus_per_level) * level + bonus + toughness`.
    pub fn max_hp(&self) -> i32 {
        let toughness_hp = if self.toughness { self.level } else { 0 };
        let per_level = self
            .class_hp
            .saturating_add(self.con_modifier)
            .saturating_add(self.bonus_hp_per_level);
        self.ancestry_hp
            .saturating_add(per_level.saturating_mul(self.level))
            .saturating_add(self.bonus_hp)
            .saturating_add(toughness_hp)
    }
}

/// The three saving throws plus Perception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Save {
    Fortitude,
    Reflex,
    Will,
    Perception,
}

impl Save {
    pub const ALL: [Save; 4] = [Save::Fortitude, Save::Reflex, Save::Will, Save::Perception];

    /// Key under `proficiencies` in the export.
    pub fn key(&self) -> &'static str {
        match self {
            Save::Fortitude => "fortitude",
            Save::Reflex => "reflex",
            Save::Will => "will",
            Save::Perception => "perception",
        }
    }

    pub fn ability(&self) -> AbilityKey {
        match self {
            Save::Fortitude => AbilityKey::Con,
            Save::Reflex => AbilityKey::Dex,
            Save::Will | Save::Perception => AbilityKey::Wis,
        }
    }
}

/// The sixteen fixed skills with their governing ability, in sheet order.
pub const SKILLS: [(&str, AbilityKey); 16] = [
    ("acrobatics", AbilityKey::Dex),
    ("arcana", AbilityKey::Int),
    ("athletics", AbilityKey::Str),
    ("crafting", AbilityKey::Int),
    ("deception", AbilityKey::Cha),
    ("diplomacy", AbilityKey::Cha),
    ("intimidation", AbilityKey::Cha),
    ("medicine", AbilityKey::Wis),
    ("nature", AbilityKey::Wis),
    ("occultism", AbilityKey::Int),
    ("performance", AbilityKey::Cha),
    ("religion", AbilityKey::Wis),
    ("society", AbilityKey::Int),
    ("stealth", AbilityKey::Dex),
    ("survival", AbilityKey::Wis),
    ("thievery", AbilityKey::Dex),
];

/// Striking rune tier on a weapon; multiplies the number of damage dice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrikingRune {
    #[default]
    None,
    Striking,
    GreaterStriking,
    MajorStriking,
}

impl StrikingRune {
    /// Lenient mapping used while importing: anything unknown is no rune.
    pub fn from_tier(tier: &str) -> Self {
        tier.parse().unwrap_or_default()
    }

    pub fn dice_count(&self) -> u8 {
        match self {
            StrikingRune::None => 1,
            StrikingRune::Striking => 2,
            StrikingRune::GreaterStriking => 3,
            StrikingRune::MajorStriking => 4,
        }
    }

    /// Damage dice expression, e.g. `"2d8"` for a striking d8 weapon.
    pub fn damage_dice(&self, die: &str) -> String {
        format!("{}{}", self.dice_count(), die)
    }
}

impl FromStr for StrikingRune {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(StrikingRune::None),
            "striking" => Ok(StrikingRune::Striking),
            "greaterStriking" => Ok(StrikingRune::GreaterStriking),
            "majorStriking" => Ok(StrikingRune::MajorStriking),
            _ => Err(DomainError::parse(format!("Unknown striking rune: {}", s))),
        }
    }
}
