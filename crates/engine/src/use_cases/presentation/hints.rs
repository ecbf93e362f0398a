//! Render-ready selections for one sheet.
//!
//! Everything here is computed from the model, the profile, and the sheet
//! settings; a renderer only has to lay it out.

use serde::{Deserialize, Serialize};

use onepager_domain::{proficiency_label, CasterModel, CharacterModel, Profile, SpellEntry};

use crate::infrastructure::settings::SheetSettings;

use super::format::{format_bonus, format_modifier};
use super::selection::{display_skills, group_feats, key_features, FeatGroup};

/// A skill line: `Arcana +12 E`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLine {
    pub name: String,
    pub modifier: String,
    pub rank: String,
}

/// A weapon line: `+1 Striking Longsword +14 2d8+4 S`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeLine {
    pub display: String,
    pub attack: String,
    pub damage: String,
    pub damage_type: String,
}

/// One spellcasting block with its lists already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasterBlock {
    pub name: String,
    pub tradition: String,
    pub ability: String,
    pub spell_dc: i32,
    pub spell_attack: String,
    pub per_day: Vec<i32>,
    /// Empty when prepared lists are turned off
    pub prepared: Vec<SpellEntry>,
    /// Empty when known lists are turned off
    pub known: Vec<SpellEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayHints {
    pub skills: Vec<SkillLine>,
    pub strikes: Vec<StrikeLine>,
    pub feat_groups: Vec<FeatGroup>,
    pub key_features: Vec<String>,
    pub spellcasting: Vec<CasterBlock>,
    pub money: String,
}

pub fn build_display(
    model: &CharacterModel,
    profile: &Profile,
    settings: &SheetSettings,
) -> DisplayHints {
    let skills = display_skills(model, profile.max_skills)
        .into_iter()
        .map(|skill| SkillLine {
            name: skill.name.clone(),
            modifier: format_modifier(skill.modifier),
            rank: proficiency_label(skill.prof_rank).to_string(),
        })
        .collect();

    let strikes = model
        .weapons()
        .iter()
        .map(|weapon| StrikeLine {
            display: weapon.display.clone(),
            attack: format_modifier(weapon.attack),
            damage: format!("{}{}", weapon.damage_dice, format_bonus(weapon.damage_bonus)),
            damage_type: weapon.damage_type.clone(),
        })
        .collect();

    let spellcasting = model
        .spellcasters()
        .iter()
        .map(|caster| caster_block(caster, profile.max_spells_per_rank, settings))
        .collect();

    DisplayHints {
        skills,
        strikes,
        feat_groups: group_feats(model.feats(), profile.max_feats),
        key_features: key_features(model.specials(), &model.identity().heritage)
            .into_iter()
            .map(str::to_string)
            .collect(),
        spellcasting,
        money: model.money().display(),
    }
}

fn caster_block(caster: &CasterModel, max_per_rank: usize, settings: &SheetSettings) -> CasterBlock {
    let trimmed = |entries: &[SpellEntry], include: bool| -> Vec<SpellEntry> {
        if !include {
            return Vec::new();
        }
        entries
            .iter()
            .map(|entry| {
                SpellEntry::new(
                    entry.spell_level,
                    entry.spells.iter().take(max_per_rank).cloned().collect(),
                )
            })
            .collect()
    };

    CasterBlock {
        name: caster.name.clone(),
        tradition: caster.tradition.clone(),
        ability: caster.ability.clone(),
        spell_dc: caster.spell_dc,
        spell_attack: format_modifier(caster.spell_attack),
        per_day: caster.per_day.clone(),
        prepared: trimmed(&caster.prepared, settings.include_prepared),
        known: trimmed(&caster.spells, settings.include_known),
    }
}
