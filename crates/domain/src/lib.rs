//! CharVault domain crate.
//!
//! Wire-faithful types for the Roster Service contract: the `Character`
//! entity, the fixed catalogs (classes, species, backgrounds, alignments,
//! skills), ability scores, and the weapon-list text conversions used by
//! the roster form.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::Character;
pub use error::DomainError;
pub use ids::CharacterId;
pub use value_objects::{
    Ability, AbilityScores, Alignment, Background, CharacterClass, Skill, Species,
};
