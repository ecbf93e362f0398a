//! AC, hit points, saves, Perception, and speed.

use onepager_domain::{check_total, Abilities, AbilityKey, Defense, HitPointInputs, Mobility, Save};

use crate::infrastructure::importers::{names_feat, RawView};

const DEFAULT_AC: i32 = 10;
const DEFAULT_SPEED: i32 = 25;
const TOUGHNESS: &str = "Toughness";

/// AC from `acTotal`, which is either a number or the builder's breakdown
/// object with its own nested `acTotal`.
pub fn read_armor_class(raw: RawView<'_>) -> i32 {
    match raw.get(&["acTotal"]) {
        Some(value) if value.is_object() => RawView::new(value).int(&["acTotal"], DEFAULT_AC),
        _ => raw.int(&["acTotal"], DEFAULT_AC),
    }
}

/// Whether any raw feat record is named exactly "Toughness".
pub fn has_toughness(raw: RawView<'_>) -> bool {
    raw.list(&["feats"])
        .iter()
        .any(|feat| names_feat(feat, TOUGHNESS))
}

pub fn derive_defense(raw: RawView<'_>, level: i32, abilities: &Abilities) -> Defense {
    let hit_points = HitPointInputs {
        level,
        ancestry_hp: raw.int(&["attributes", "ancestryhp"], 0),
        class_hp: raw.int(&["attributes", "classhp"], 0),
        con_modifier: abilities.modifier(AbilityKey::Con),
        bonus_hp_per_level: raw.int(&["attributes", "bonushpPerLevel"], 0),
        bonus_hp: raw.int(&["attributes", "bonushp"], 0),
        toughness: has_toughness(raw),
    };

    let [(fortitude, fort_prof), (reflex, reflex_prof), (will, will_prof), (perception, perception_prof)] =
        Save::ALL.map(|save| {
            let rank = raw.int(&["proficiencies", save.key()], 0);
            (check_total(level, rank, abilities.modifier(save.ability())), rank)
        });

    Defense {
        ac: read_armor_class(raw),
        hp: hit_points.max_hp(),
        fortitude,
        fort_prof,
        reflex,
        reflex_prof,
        will,
        will_prof,
        perception,
        perception_prof,
        resistances: raw.texts(&["resistances"]),
    }
}

/// Land speed: `attributes.speed` (25) plus `attributes.speedBonus` (0).
pub fn derive_mobility(raw: RawView<'_>) -> Mobility {
    Mobility::new(
        raw.int(&["attributes", "speed"], DEFAULT_SPEED),
        raw.int(&["attributes", "speedBonus"], 0),
    )
}
