//! E2E tests for layout classification over real exports.

use onepager_domain::{DisplayLimits, ProfileOverride, ProfileType, Section};

use crate::test_fixtures::exports;
use crate::use_cases::character_sheet::assemble;
use crate::use_cases::profile::{classify, score, ProfileScores};

#[test]
fn test_wizard_is_caster() {
    let model = assemble(&exports::wizard_5());

    assert_eq!(score(&model), ProfileScores { caster: 17 + 13 + 5, martial: 3 + 5 });
    let profile = classify(&model, ProfileOverride::Auto, DisplayLimits::default());
    assert_eq!(profile.profile_type, ProfileType::Caster);
    assert_eq!(profile.section_order[1], Section::Skills);
}

#[test]
fn test_fighter_is_martial() {
    let model = assemble(&exports::fighter_5());

    assert_eq!(score(&model), ProfileScores { caster: 0, martial: 9 + 14 });
    let profile = classify(&model, ProfileOverride::Auto, DisplayLimits::default());
    assert_eq!(profile.profile_type, ProfileType::Martial);
    assert_eq!(profile.section_order[3], Section::Items);
}

#[test]
fn test_magus_is_hybrid_and_innate_is_ignored() {
    let model = assemble(&exports::magus_5());

    assert_eq!(score(&model), ProfileScores { caster: 6 + 9 + 5, martial: 6 + 13 });
    let profile = classify(&model, ProfileOverride::Auto, DisplayLimits::default());
    assert_eq!(profile.profile_type, ProfileType::Hybrid);
}

#[test]
fn test_override_beats_scoring_for_every_fixture() {
    for document in exports::all() {
        let model = assemble(&document);
        let forced = classify(
            &model,
            ProfileOverride::Fixed(ProfileType::Hybrid),
            DisplayLimits::default(),
        );
        assert_eq!(forced.profile_type, ProfileType::Hybrid);
    }
}
