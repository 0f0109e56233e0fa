//! Value objects for the character sheet domain.

mod ability;
mod catalog;
mod skill;

pub use ability::{Ability, AbilityScores};
pub use catalog::{Alignment, Background, CharacterClass, Species};
pub use skill::Skill;
