//! E2E tests for character model derivation.

use onepager_domain::{AbilityKey, FeatType, FocusSpell, ItemEntry};

use crate::test_fixtures::exports;
use crate::use_cases::character_sheet::assemble;

#[test]
fn test_wizard_defense_and_abilities() {
    let model = assemble(&exports::wizard_5());

    assert_eq!(model.identity().name, "Ezren");
    assert_eq!(model.identity().char_class, "Wizard");
    assert_eq!(model.identity().age, "43");
    assert_eq!(model.level(), 5);
    assert_eq!(model.abilities().modifier(AbilityKey::Int), 4);

    let defense = model.defense();
    assert_eq!(defense.ac, 19);
    assert_eq!(defense.hp, 8 + (6 + 2) * 5 + 5);
    assert_eq!(defense.fortitude, 9);
    assert_eq!(defense.reflex, 9);
    assert_eq!(defense.will, 10);
    assert_eq!(defense.will_prof, 4);
    assert_eq!(defense.perception, 8);
    assert_eq!(model.mobility().speed, 25);
}

#[test]
fn test_wizard_skills_and_lores() {
    let model = assemble(&exports::wizard_5());

    let modifier_of = |name: &str| {
        model
            .skills()
            .iter()
            .find(|skill| skill.name == name)
            .map(|skill| skill.modifier)
    };
    assert_eq!(modifier_of("Arcana"), Some(13));
    assert_eq!(modifier_of("Crafting"), Some(11));
    assert_eq!(modifier_of("Diplomacy"), Some(7));
    assert_eq!(modifier_of("Athletics"), Some(0));

    assert_eq!(model.lores().len(), 1);
    assert_eq!(model.lores()[0].name, "Academia Lore");
    assert_eq!(model.lores()[0].modifier, 11);
}

#[test]
fn test_wizard_spellcasting_and_focus() {
    let model = assemble(&exports::wizard_5());

    let wizard = &model.spellcasters()[0];
    assert_eq!(wizard.spell_attack, 11);
    assert_eq!(wizard.spell_dc, 21);
    assert_eq!(wizard.ability, "INT");
    assert_eq!(wizard.per_day.len(), 11);

    let ranks: Vec<i32> = wizard.spells.iter().map(|e| e.spell_level).collect();
    assert_eq!(ranks, vec![0, 1, 2, 3]);
    assert_eq!(wizard.spells[0].spells.len(), 6);

    assert_eq!(model.focus_points(), 1);
    assert_eq!(model.focus_spells(), [FocusSpell::new("Force Bolt", "arcane")]);
}

#[test]
fn test_wizard_feats_items_and_money() {
    let model = assemble(&exports::wizard_5());

    assert_eq!(model.feats().len(), 8);
    assert!(model
        .feats()
        .iter()
        .any(|feat| feat.name == "Assurance (Arcana)" && feat.feat_type == FeatType::Skill));

    assert_eq!(model.items().len(), 5);
    assert!(model.items()[2].invested);
    assert_eq!(model.items()[4], ItemEntry::new("Chalk", 1, false));
    assert_eq!(model.money().display(), "23 gp, 5 sp, 7 cp");
}

#[test]
fn test_fighter_bare_document() {
    let model = assemble(&exports::fighter_5());

    assert_eq!(model.identity().name, "Harsk");
    assert_eq!(model.defense().ac, 22);
    assert_eq!(model.defense().hp, 70);
    assert_eq!(model.defense().fortitude, 11);
    assert_eq!(model.defense().will, 8);
    assert_eq!(model.mobility().speed, 25);
    assert!(model.spellcasters().is_empty());
    assert!(model.focus_spells().is_empty());

    let dice: Vec<&str> = model
        .weapons()
        .iter()
        .map(|weapon| weapon.damage_dice.as_str())
        .collect();
    assert_eq!(dice, vec!["2d8", "1d4", "1d8"]);

    assert_eq!(model.feats()[0].name, "Power Attack");
    assert_eq!(model.feats()[0].feat_type, FeatType::Class);
    assert_eq!(model.feats()[0].level, 1);
    assert!(model.feats().iter().any(|feat| feat.name == "Weapon Focus (Swords)"));
}

#[test]
fn test_magus_skips_malformed_records() {
    let model = assemble(&exports::magus_5());

    assert_eq!(model.feats().len(), 4);
    assert_eq!(
        model.feats()[2].feat_type,
        FeatType::Other("Bonus Feat".to_string())
    );
    assert_eq!(model.lores().len(), 1);
    assert_eq!(model.lores()[0].modifier, 5 + 2 + 3);
    assert_eq!(model.items().len(), 2);
    assert_eq!(model.defense().resistances, vec!["fire 2"]);
    assert_eq!(model.money().display(), "1 pp, 3 gp");
}

#[test]
fn test_magus_innate_entry_is_derived() {
    let model = assemble(&exports::magus_5());

    assert_eq!(model.spellcasters().len(), 2);
    let magus = &model.spellcasters()[0];
    assert_eq!(magus.spell_attack, 10);
    assert_eq!(magus.spell_dc, 20);

    let innate = &model.spellcasters()[1];
    assert!(innate.innate);
    assert_eq!(innate.ability, "CHA");
    assert_eq!(innate.spell_attack, 7);
}

#[test]
fn test_every_fixture_has_six_abilities_and_no_notes() {
    for document in exports::all() {
        let model = assemble(&document);
        assert_eq!(model.abilities().as_list().len(), 6);
        assert_eq!(model.skills().len(), 16);
        assert!(model.notes().is_empty());
    }
}
