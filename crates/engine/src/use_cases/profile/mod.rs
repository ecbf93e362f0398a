//! Layout classification.
//!
//! Scores how much a character leans on spellcasting versus weapons and
//! picks the section ordering for the sheet. Classification reads the model
//! and never changes it.

mod classifier;

pub use classifier::{
    classify, decide, score, ProfileScores, CASTER_THRESHOLD, HYBRID_THRESHOLD, MARTIAL_THRESHOLD,
    PREPARED_BONUS, WEAPON_WEIGHT,
};
