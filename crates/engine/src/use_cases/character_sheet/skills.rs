//! Fixed skills and free-text lores.

use onepager_domain::{Abilities, AbilityKey, Skill, SKILLS};

use crate::infrastructure::importers::{LoreRecord, RawView};

/// All sixteen skills in sheet order, including untrained ones.
pub fn derive_skills(raw: RawView<'_>, level: i32, abilities: &Abilities) -> Vec<Skill> {
    SKILLS
        .iter()
        .map(|(key, ability)| {
            let rank = raw.int(&["proficiencies", key], 0);
            Skill::derive(capitalize(key), level, rank, abilities.modifier(*ability))
        })
        .collect()
}

/// Lores from `lores[][topic, rank]`, all governed by INT.
pub fn derive_lores(raw: RawView<'_>, level: i32, abilities: &Abilities) -> Vec<Skill> {
    let int_modifier = abilities.modifier(AbilityKey::Int);
    raw.list(&["lores"])
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let record = LoreRecord::decode(value);
            if record.is_none() {
                tracing::debug!(index, "Skipping malformed lore record");
            }
            record
        })
        .map(|record| Skill::lore(record.topic, level, record.rank, int_modifier))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
