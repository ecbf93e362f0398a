//! Sheet entries - the records a character sheet lists

mod feat;
mod item;
mod skill;
mod spell;
mod weapon;

pub use feat::{Feat, FeatType};
pub use item::{ItemEntry, INVESTED_MARKER};
pub use skill::Skill;
pub use spell::{sort_by_rank, CasterModel, FocusSpell, SpellEntry};
pub use weapon::Weapon;
