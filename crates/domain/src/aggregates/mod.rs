//! Aggregate roots - domain objects that own their related data
//!
//! The character aggregate owns every derived sheet entry. It is built in a
//! single step from [`CharacterParts`] and exposes read accessors only, so a
//! model handed to the classifier or a renderer cannot be altered.

pub mod character;

pub use character::{CharacterModel, CharacterParts, Defense, Identity, Mobility};
