//! Skills and lores on a character sheet.

use serde::{Deserialize, Serialize};

use crate::game_systems::{check_total, proficiency_label};

/// A skill or lore with its computed modifier.
///
/// Fixed skills and free-text lores share this shape; lores carry a
/// " Lore" suffix in their name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub modifier: i32,
    /// Raw rank bonus: 0=untrained, 2=T, 4=E, 6=M, 8=L
    pub prof_rank: i32,
}

impl Skill {
    /// Compute a skill from its rank and the governing ability modifier.
    pub fn derive(name: impl Into<String>, level: i32, prof_rank: i32, ability_modifier: i32) -> Self {
        Self {
            name: name.into(),
            modifier: check_total(level, prof_rank, ability_modifier),
            prof_rank,
        }
    }

    /// A lore skill; the name gets a " Lore" suffix verbatim.
    pub fn lore(topic: &str, level: i32, prof_rank: i32, int_modifier: i32) -> Self {
        Self::derive(format!("{} Lore", topic), level, prof_rank, int_modifier)
    }

    pub fn is_trained(&self) -> bool {
        self.prof_rank > 0
    }

    /// U/T/E/M/L label for the rank.
    pub fn rank_label(&self) -> &'static str {
        proficiency_label(self.prof_rank)
    }
}
