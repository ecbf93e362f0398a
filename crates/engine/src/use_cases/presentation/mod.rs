//! Presentation hints.
//!
//! Pure selections and formatting a one-page renderer needs: which skills to
//! show, how feats group, which class features are worth listing, and how
//! numbers print. Nothing here renders markup.

mod format;
mod hints;
mod selection;

pub use format::{format_bonus, format_modifier};
pub use hints::{build_display, CasterBlock, DisplayHints, SkillLine, StrikeLine};
pub use selection::{
    display_skills, group_feats, key_features, FeatGroup, FEAT_GROUP_ORDER, IMPLIED_SPECIALS,
    OTHER_FEATS_LABEL,
};
