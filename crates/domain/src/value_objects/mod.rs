//! Value objects: small immutable values with derived fields.

mod ability;
mod money;
mod profile;

pub use ability::{Abilities, Ability, AbilityKey};
pub use money::Money;
pub use profile::{DisplayLimits, Profile, ProfileOverride, ProfileType, Section};
