//! Game system rules.
//!
//! Only Pathfinder 2e is supported; the builder export this crate reads is
//! PF2e-specific.

mod pf2e;

pub use pf2e::{
    ability_modifier, check_total, proficiency_label, spell_attack, spell_dc, HitPointInputs,
    Pf2eProficiencyRank, Save, StrikingRune, SKILLS,
};
