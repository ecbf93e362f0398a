//! Character sheet derivation.
//!
//! Each stage reads the loaded export through a [`RawView`] and derives one
//! part of the sheet. Stages are independent of each other; the ones that
//! need ability modifiers take the already-derived [`Abilities`]. The
//! [`assemble`] function runs them all and seals the result.
//!
//! [`RawView`]: crate::infrastructure::importers::RawView
//! [`Abilities`]: onepager_domain::Abilities

mod abilities;
mod assembler;
mod defense;
mod feats;
mod focus;
mod identity;
mod inventory;
mod skills;
mod spellcasting;

pub use abilities::{derive_abilities, DEFAULT_SCORE};
pub use assembler::assemble;
pub use defense::{derive_defense, derive_mobility, has_toughness, read_armor_class};
pub use feats::{normalize_feats, read_specials};
pub use focus::collect_focus;
pub use identity::read_identity;
pub use inventory::{normalize_items, normalize_weapons, read_money};
pub use skills::{derive_lores, derive_skills};
pub use spellcasting::derive_spellcasters;
