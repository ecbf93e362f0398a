//! Ability scores and modifiers.

use onepager_domain::{Abilities, AbilityKey};

use crate::infrastructure::importers::RawView;

/// Score used for an ability the export leaves out.
pub const DEFAULT_SCORE: i32 = 10;

/// Read the six scores from `abilities.{str,dex,con,int,wis,cha}`.
pub fn derive_abilities(raw: RawView<'_>) -> Abilities {
    Abilities::from_scores(|key: AbilityKey| raw.int(&["abilities", key.key()], DEFAULT_SCORE))
}
