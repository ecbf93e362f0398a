//! Spellcasting entries and focus spells.
//!
//! A character can have several spellcasting entries (class casting, an
//! archetype dedication, innate ancestry spells, ...). Each one carries its
//! own proficiency and governing ability, so DC and attack are per entry.

use serde::{Deserialize, Serialize};

/// Spells of one rank. Rank 0 holds cantrips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellEntry {
    pub spell_level: i32,
    pub spells: Vec<String>,
}

impl SpellEntry {
    pub fn new(spell_level: i32, spells: Vec<String>) -> Self {
        Self {
            spell_level,
            spells,
        }
    }
}

/// Sort spell ranks ascending, keeping document order for equal ranks.
pub fn sort_by_rank(entries: &mut [SpellEntry]) {
    entries.sort_by_key(|entry| entry.spell_level);
}

/// One spellcasting entry with its derived DC and attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasterModel {
    pub name: String,
    /// arcane, divine, occult, primal
    pub tradition: String,
    /// prepared, spontaneous, ...
    pub casting_type: String,
    /// Governing ability key, upper-cased ("INT")
    pub ability: String,
    pub proficiency: i32,
    pub spell_dc: i32,
    pub spell_attack: i32,
    pub focus_points: i32,
    pub innate: bool,
    /// Slots per day, indexed by rank
    pub per_day: Vec<i32>,
    /// Known/available spells, sorted by rank
    pub spells: Vec<SpellEntry>,
    /// Prepared spells, sorted by rank
    pub prepared: Vec<SpellEntry>,
}

impl CasterModel {
    /// Number of known spells across all ranks.
    pub fn known_spell_count(&self) -> usize {
        self.spells.iter().map(|entry| entry.spells.len()).sum()
    }

    /// Sum of the positive per-day slot counts.
    pub fn slot_count(&self) -> i32 {
        self.per_day
            .iter()
            .filter(|slots| **slots > 0)
            .fold(0, |total, slots| total.saturating_add(*slots))
    }

    pub fn has_prepared(&self) -> bool {
        !self.prepared.is_empty()
    }
}

/// A focus spell or focus cantrip, tagged with its tradition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSpell {
    pub name: String,
    pub tradition: String,
}

impl FocusSpell {
    pub fn new(name: impl Into<String>, tradition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tradition: tradition.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caster(per_day: Vec<i32>, spells: Vec<SpellEntry>, prepared: Vec<SpellEntry>) -> CasterModel {
        CasterModel {
            name: "Wizard".to_string(),
            tradition: "arcane".to_string(),
            casting_type: "prepared".to_string(),
            ability: "INT".to_string(),
            proficiency: 2,
            spell_dc: 17,
            spell_attack: 7,
            focus_points: 0,
            innate: false,
            per_day,
            spells,
            prepared,
        }
    }

    #[test]
    fn sort_is_stable_by_rank() {
        let mut entries = vec![
            SpellEntry::new(2, vec!["Blur".to_string()]),
            SpellEntry::new(0, vec!["Shield".to_string()]),
            SpellEntry::new(2, vec!["Invisibility".to_string()]),
            SpellEntry::new(1, vec!["Fear".to_string()]),
        ];
        sort_by_rank(&mut entries);

        let order: Vec<&str> = entries.iter().map(|e| e.spells[0].as_str()).collect();
        assert_eq!(order, vec!["Shield", "Fear", "Blur", "Invisibility"]);
    }

    #[test]
    fn counts_known_spells_and_positive_slots() {
        let model = caster(
            vec![5, 3, -1, 0, 2],
            vec![
                SpellEntry::new(0, vec!["Shield".to_string(), "Light".to_string()]),
                SpellEntry::new(1, vec!["Fear".to_string()]),
            ],
            Vec::new(),
        );

        assert_eq!(model.known_spell_count(), 3);
        assert_eq!(model.slot_count(), 10);
        assert!(!model.has_prepared());
    }

    #[test]
    fn slot_count_saturates() {
        let model = caster(vec![i32::MAX, 1, 4], Vec::new(), Vec::new());
        assert_eq!(model.slot_count(), i32::MAX);
    }
}
