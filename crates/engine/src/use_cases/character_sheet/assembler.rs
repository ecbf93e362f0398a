//! Runs every derivation stage over one document and seals the model.

use onepager_domain::{CharacterModel, CharacterParts};

use crate::infrastructure::importers::RawDocument;

use super::{
    collect_focus, derive_abilities, derive_defense, derive_lores, derive_mobility,
    derive_skills, derive_spellcasters, normalize_feats, normalize_items, normalize_weapons,
    read_identity, read_money, read_specials,
};

/// Derive the full character model from a loaded export.
///
/// Never fails: every field has a default and malformed records are dropped.
pub fn assemble(document: &RawDocument) -> CharacterModel {
    let raw = document.view();

    let identity = read_identity(raw);
    let level = identity.level;
    let abilities = derive_abilities(raw);
    let (focus_points, focus_spells) = collect_focus(raw);

    let parts = CharacterParts {
        defense: derive_defense(raw, level, &abilities),
        mobility: derive_mobility(raw),
        skills: derive_skills(raw, level, &abilities),
        lores: derive_lores(raw, level, &abilities),
        feats: normalize_feats(raw),
        specials: read_specials(raw),
        weapons: normalize_weapons(raw),
        items: normalize_items(raw),
        money: read_money(raw),
        spellcasters: derive_spellcasters(raw, level, &abilities),
        focus_points,
        focus_spells,
        identity,
        abilities,
    };

    let model = CharacterModel::from_parts(parts);
    tracing::debug!(
        name = %model.identity().name,
        level = model.level(),
        feats = model.feats().len(),
        weapons = model.weapons().len(),
        spellcasters = model.spellcasters().len(),
        "Assembled character model"
    );
    model
}
