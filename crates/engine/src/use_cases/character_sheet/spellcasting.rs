//! Spellcasting entries: DC, attack, slots, and spell lists.
//!
//! Each entry in `spellCasters` is derived on its own; a character with a
//! class tradition plus an archetype dedication ends up with two models.
//! Spell lists are sorted by rank with a stable sort so spells of the same
//! rank keep their document order.

use serde_json::Value;

use onepager_domain::{
    sort_by_rank, spell_attack, spell_dc, Abilities, AbilityKey, CasterModel, SpellEntry,
};

use crate::infrastructure::importers::{as_i32, RawView};

const DEFAULT_ABILITY_KEY: &str = "int";

pub fn derive_spellcasters(raw: RawView<'_>, level: i32, abilities: &Abilities) -> Vec<CasterModel> {
    raw.list(&["spellCasters"])
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            if !value.is_object() {
                tracing::debug!(index, "Skipping non-object spellcaster entry");
                return None;
            }
            Some(derive_caster(RawView::new(value), level, abilities))
        })
        .collect()
}

fn derive_caster(caster: RawView<'_>, level: i32, abilities: &Abilities) -> CasterModel {
    let ability_key = caster.text(&["ability"], DEFAULT_ABILITY_KEY);
    let ability_modifier = governing_modifier(&ability_key, abilities);
    let proficiency = caster.int(&["proficiency"], 0);

    CasterModel {
        name: caster.text(&["name"], "Unknown"),
        tradition: caster.text(&["magicTradition"], ""),
        casting_type: caster.text(&["spellcastingType"], ""),
        ability: ability_key.to_uppercase(),
        proficiency,
        spell_dc: spell_dc(level, proficiency, ability_modifier),
        spell_attack: spell_attack(level, proficiency, ability_modifier),
        focus_points: caster.int(&["focusPoints"], 0),
        innate: caster.flag(&["innate"], false),
        per_day: caster
            .list(&["perDay"])
            .iter()
            .map(|slots| as_i32(slots).unwrap_or(0))
            .collect(),
        spells: spell_list(caster.list(&["spells"])),
        prepared: spell_list(caster.list(&["prepared"])),
    }
}

/// Modifier of the ability named by `key`; INT for anything unrecognized.
fn governing_modifier(key: &str, abilities: &Abilities) -> i32 {
    let ability = key.parse::<AbilityKey>().unwrap_or_else(|_| {
        tracing::debug!(key, "Unrecognized spellcasting ability, using INT");
        AbilityKey::Int
    });
    abilities.modifier(ability)
}

fn spell_list(entries: &[Value]) -> Vec<SpellEntry> {
    let mut list: Vec<SpellEntry> = entries
        .iter()
        .filter(|entry| entry.is_object())
        .map(|entry| {
            let entry = RawView::new(entry);
            SpellEntry::new(entry.int(&["spellLevel"], 0), entry.texts(&["list"]))
        })
        .collect();
    sort_by_rank(&mut list);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn abilities() -> Abilities {
        Abilities::from_scores(|key| match key {
            AbilityKey::Int => 18,
            AbilityKey::Cha => 16,
            AbilityKey::Wis => 8,
            _ => 10,
        })
    }

    fn casters(value: &Value) -> Vec<CasterModel> {
        derive_spellcasters(RawView::new(value), 5, &abilities())
    }

    #[test]
    fn dc_and_attack_use_the_governing_ability() {
        let value = json!({
            "spellCasters": [
                {"name": "Wizard", "ability": "int", "proficiency": 2, "magicTradition": "arcane", "spellcastingType": "prepared"},
                {"name": "Sorcerer Dedication", "ability": "cha", "proficiency": 2}
            ]
        });
        let casters = casters(&value);

        assert_eq!(casters[0].spell_attack, 5 + 2 + 4);
        assert_eq!(casters[0].spell_dc, 10 + 5 + 2 + 4);
        assert_eq!(casters[0].ability, "INT");
        assert_eq!(casters[0].tradition, "arcane");
        assert_eq!(casters[1].spell_attack, 5 + 2 + 3);
        assert_eq!(casters[1].ability, "CHA");
    }

    #[test]
    fn untrained_caster_still_adds_level() {
        let value = json!({"spellCasters": [{"name": "Innate", "ability": "wis", "proficiency": 0, "innate": true}]});
        let caster = &casters(&value)[0];

        assert_eq!(caster.spell_attack, 5 + 0 - 1);
        assert_eq!(caster.spell_dc, 14);
        assert!(caster.innate);
    }

    #[test]
    fn unknown_ability_falls_back_to_int() {
        let value = json!({"spellCasters": [
            {"ability": "luck", "proficiency": 2},
            {"proficiency": 2},
            {"ability": "CHA", "proficiency": 2}
        ]});
        let casters = casters(&value);

        assert_eq!(casters[0].spell_attack, 5 + 2 + 4);
        assert_eq!(casters[0].ability, "LUCK");
        assert_eq!(casters[1].ability, "INT");
        assert_eq!(casters[1].name, "Unknown");
        // Keys are matched exactly, so upper case is not the CHA modifier.
        assert_eq!(casters[2].spell_attack, 5 + 2 + 4);
        assert_eq!(casters[2].ability, "CHA");
    }

    #[test]
    fn per_day_keeps_positions() {
        let value = json!({"spellCasters": [{"perDay": [5, 3, null, "2", 1]}]});
        assert_eq!(casters(&value)[0].per_day, vec![5, 3, 0, 0, 1]);
    }

    #[test]
    fn spell_lists_sort_stably_by_rank() {
        let value = json!({
            "spellCasters": [{
                "spells": [
                    {"spellLevel": 2, "list": ["Blur"]},
                    {"list": ["Shield", "Light"]},
                    {"spellLevel": 1, "list": ["Fear"]},
                    {"spellLevel": 2, "list": ["Invisibility"]},
                    "Magic Missile"
                ],
                "prepared": [
                    {"spellLevel": 1, "list": ["Fear", "Fear"]},
                    {"spellLevel": 0, "list": ["Shield"]}
                ]
            }]
        });
        let caster = &casters(&value)[0];

        let ranks: Vec<i32> = caster.spells.iter().map(|e| e.spell_level).collect();
        assert_eq!(ranks, vec![0, 1, 2, 2]);
        assert_eq!(caster.spells[2].spells, vec!["Blur"]);
        assert_eq!(caster.spells[3].spells, vec!["Invisibility"]);
        assert_eq!(caster.prepared[0].spells, vec!["Shield"]);
        assert_eq!(caster.prepared[1].spells.len(), 2);
    }

    #[test]
    fn non_object_casters_are_skipped() {
        let value = json!({"spellCasters": ["Wizard", null, {"name": "Bard"}]});
        let casters = casters(&value);
        assert_eq!(casters.len(), 1);
        assert_eq!(casters[0].name, "Bard");
    }
}
