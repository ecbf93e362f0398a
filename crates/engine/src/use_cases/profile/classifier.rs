//! Caster/martial scoring and the profile decision table.

use serde::{Deserialize, Serialize};

use onepager_domain::{CharacterModel, DisplayLimits, Profile, ProfileOverride, ProfileType};

/// Caster score needed for a pure caster layout.
pub const CASTER_THRESHOLD: i32 = 20;
/// Martial score needed for a pure martial layout.
pub const MARTIAL_THRESHOLD: i32 = 15;
/// Caster score above which a non-caster still gets the hybrid layout.
pub const HYBRID_THRESHOLD: i32 = 10;
/// Score added per weapon.
pub const WEAPON_WEIGHT: i32 = 3;
/// Score added per spellcasting entry with a prepared list.
pub const PREPARED_BONUS: i32 = 5;

/// The two emphasis scores a decision is made from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileScores {
    pub caster: i32,
    pub martial: i32,
}

/// Score a character.
///
/// Innate entries don't count toward casting. Each other entry adds its known
/// spell count, its positive per-day slots, and a bonus if it has prepared
/// spells. Martial emphasis is three per weapon plus the best attack bonus.
pub fn score(model: &CharacterModel) -> ProfileScores {
    let caster = model
        .spellcasters()
        .iter()
        .filter(|caster| !caster.innate)
        .map(|caster| {
            let known = i32::try_from(caster.known_spell_count()).unwrap_or(i32::MAX);
            let prepared = if caster.has_prepared() { PREPARED_BONUS } else { 0 };
            known.saturating_add(caster.slot_count()).saturating_add(prepared)
        })
        .fold(0, i32::saturating_add);

    let weapons = model.weapons();
    let weapon_count = i32::try_from(weapons.len()).unwrap_or(i32::MAX);
    let best_attack = weapons.iter().map(|weapon| weapon.attack).max().unwrap_or(0);
    let martial = weapon_count
        .saturating_mul(WEAPON_WEIGHT)
        .saturating_add(best_attack);

    ProfileScores { caster, martial }
}

/// The decision table, first match wins.
pub fn decide(scores: ProfileScores) -> ProfileType {
    let ProfileScores { caster, martial } = scores;
    if caster >= CASTER_THRESHOLD && martial < MARTIAL_THRESHOLD {
        ProfileType::Caster
    } else if martial >= MARTIAL_THRESHOLD && caster < HYBRID_THRESHOLD {
        ProfileType::Martial
    } else if caster >= HYBRID_THRESHOLD {
        ProfileType::Hybrid
    } else {
        ProfileType::Martial
    }
}

/// Pick the layout profile for a character.
///
/// A fixed override wins without scoring; `Auto` scores the model. Display
/// limits pass straight through to the profile.
pub fn classify(
    model: &CharacterModel,
    requested: ProfileOverride,
    limits: DisplayLimits,
) -> Profile {
    let profile_type = match requested {
        ProfileOverride::Fixed(profile_type) => {
            tracing::debug!(profile = %profile_type, "Using profile override");
            profile_type
        }
        ProfileOverride::Auto => {
            let scores = score(model);
            let profile_type = decide(scores);
            tracing::debug!(
                caster_score = scores.caster,
                martial_score = scores.martial,
                profile = %profile_type,
                "Classified character"
            );
            profile_type
        }
    };

    Profile::new(profile_type, limits)
}
