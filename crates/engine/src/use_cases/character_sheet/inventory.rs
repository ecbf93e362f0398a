//! Weapons, equipment, and coin.

use onepager_domain::{ItemEntry, Money, StrikingRune, Weapon};

use crate::infrastructure::importers::{EquipmentRecord, RawView};

const DEFAULT_DIE: &str = "d4";
const UNKNOWN_WEAPON: &str = "Unknown";

/// Weapons from `weapons[]`; entries that aren't objects are skipped.
pub fn normalize_weapons(raw: RawView<'_>) -> Vec<Weapon> {
    raw.list(&["weapons"])
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            if !value.is_object() {
                tracing::debug!(index, "Skipping non-object weapon entry");
                return None;
            }
            Some(read_weapon(RawView::new(value)))
        })
        .collect()
}

fn read_weapon(weapon: RawView<'_>) -> Weapon {
    let name = weapon.text(&["name"], UNKNOWN_WEAPON);
    let striking = StrikingRune::from_tier(&weapon.text(&["str"], ""));
    Weapon {
        display: weapon.text(&["display"], &name),
        attack: weapon.int(&["attack"], 0),
        damage_dice: Weapon::damage_dice(&weapon.text(&["die"], DEFAULT_DIE), striking),
        damage_bonus: weapon.int(&["damageBonus"], 0),
        damage_type: weapon.text(&["damageType"], ""),
        material: weapon.text(&["mat"], ""),
        name,
    }
}

/// Items from `equipment[][name, qty, "Invested"?]`.
pub fn normalize_items(raw: RawView<'_>) -> Vec<ItemEntry> {
    raw.list(&["equipment"])
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let Some(record) = EquipmentRecord::decode(value) else {
                tracing::debug!(index, "Skipping malformed equipment record");
                return None;
            };
            Some(ItemEntry::new(record.name, record.qty, record.invested))
        })
        .collect()
}

pub fn read_money(raw: RawView<'_>) -> Money {
    Money::new(
        raw.int64(&["money", "cp"], 0),
        raw.int64(&["money", "sp"], 0),
        raw.int64(&["money", "gp"], 0),
        raw.int64(&["money", "pp"], 0),
    )
}
