//! Which skills, feats, and class features make it onto the page.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use onepager_domain::{CharacterModel, Feat, FeatType, Skill};

/// Class features implied by the class itself, already visible in the numbers.
pub const IMPLIED_SPECIALS: [&str; 11] = [
    "Wizard Spellcasting",
    "Spellbook",
    "Expert Spellcaster",
    "Reflex Expertise",
    "Lightning Reflexes",
    "Weapon Specialization",
    "Great Fortitude",
    "Resolve",
    "Alertness",
    "General Training",
    "Skill Training",
];

const PROFICIENCY_PREFIXES: [&str; 3] = ["expert ", "master ", "legendary "];
const PROFICIENCY_SUBJECTS: [&str; 5] = ["spellcaster", "reflex", "fortitude", "will", "perception"];

/// Feat groups in sheet order, keyed by category.
pub const FEAT_GROUP_ORDER: [(FeatType, &str); 7] = [
    (FeatType::Class, "Class Feats"),
    (FeatType::Archetype, "Archetype Feats"),
    (FeatType::Ancestry, "Ancestry Feats"),
    (FeatType::Heritage, "Heritage"),
    (FeatType::Skill, "Skill Feats"),
    (FeatType::General, "General Feats"),
    (FeatType::Awarded, "Awarded Feats"),
];

pub const OTHER_FEATS_LABEL: &str = "Other";

/// A labeled run of feats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatGroup {
    pub label: String,
    pub feats: Vec<Feat>,
}

/// Highest modifier first, then name.
fn by_modifier_then_name(a: &&Skill, b: &&Skill) -> Ordering {
    b.modifier.cmp(&a.modifier).then_with(|| a.name.cmp(&b.name))
}

/// Skills for the sheet: trained skills, then lores, then the best
/// untrained skills to fill up to `max_skills`.
///
/// Trained skills and lores are never cut; the limit only bounds the fill.
pub fn display_skills(model: &CharacterModel, max_skills: usize) -> Vec<&Skill> {
    let mut trained: Vec<&Skill> = model.skills().iter().filter(|s| s.is_trained()).collect();
    trained.sort_by(by_modifier_then_name);

    let mut lores: Vec<&Skill> = model.lores().iter().collect();
    lores.sort_by(by_modifier_then_name);

    let mut selected = trained;
    selected.extend(lores);

    if selected.len() < max_skills {
        let mut untrained: Vec<&Skill> =
            model.skills().iter().filter(|s| !s.is_trained()).collect();
        untrained.sort_by(by_modifier_then_name);
        let room = max_skills - selected.len();
        selected.extend(untrained.into_iter().take(room));
    }

    selected
}

/// Group feats by category in sheet order; uncategorized feats go last under
/// "Other". Empty groups are left out. `max_feats` caps each group.
pub fn group_feats(feats: &[Feat], max_feats: Option<usize>) -> Vec<FeatGroup> {
    let cap = max_feats.unwrap_or(usize::MAX);

    let mut groups: Vec<FeatGroup> = FEAT_GROUP_ORDER
        .iter()
        .map(|(feat_type, label)| FeatGroup {
            label: label.to_string(),
            feats: matching(feats, cap, |candidate| candidate == feat_type),
        })
        .collect();
    groups.push(FeatGroup {
        label: OTHER_FEATS_LABEL.to_string(),
        feats: matching(feats, cap, |candidate| !candidate.is_categorized()),
    });

    groups.retain(|group| !group.feats.is_empty());
    groups
}

fn matching(feats: &[Feat], cap: usize, matches: impl Fn(&FeatType) -> bool) -> Vec<Feat> {
    feats
        .iter()
        .filter(|feat| matches(&feat.feat_type))
        .take(cap)
        .cloned()
        .collect()
}

/// Class features worth listing: drops implied features, the heritage (it's
/// in the header), and proficiency increases the numbers already show.
pub fn key_features<'a>(specials: &'a [String], heritage: &str) -> Vec<&'a str> {
    specials
        .iter()
        .map(String::as_str)
        .filter(|special| !IMPLIED_SPECIALS.contains(special))
        .filter(|special| *special != heritage)
        .filter(|special| !is_proficiency_increase(special))
        .collect()
}

fn is_proficiency_increase(special: &str) -> bool {
    let lower = special.to_lowercase();
    PROFICIENCY_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
        && PROFICIENCY_SUBJECTS
            .iter()
            .any(|subject| lower.contains(subject))
}
