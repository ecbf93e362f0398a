//! Weapon strikes.

use serde::{Deserialize, Serialize};

use crate::game_systems::StrikingRune;

/// A weapon strike as listed by the builder, with its damage dice resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Display name including runes/material, falls back to `name`
    pub display: String,
    /// Total attack modifier as computed by the builder
    pub attack: i32,
    /// e.g. "2d8"
    pub damage_dice: String,
    pub damage_bonus: i32,
    /// Damage type letter or word ("S", "P", "B", "fire", ...)
    pub damage_type: String,
    pub material: String,
}

impl Weapon {
    /// Resolve the damage dice from the base die and striking rune tier.
    pub fn damage_dice(die: &str, striking: StrikingRune) -> String {
        striking.damage_dice(die)
    }
}
