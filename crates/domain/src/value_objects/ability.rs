//! Ability value objects - the six ability keys and their score block.
//!
//! Provides type safety for ability references instead of using magic
//! strings like "str", "dex".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The six character abilities, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Strength - physical power
    Str,
    /// Dexterity - agility and reflexes
    Dex,
    /// Constitution - endurance and health
    Con,
    /// Intelligence - reasoning and memory
    Int,
    /// Wisdom - perception and insight
    Wis,
    /// Charisma - force of personality
    Cha,
}

impl Ability {
    /// Returns the short lowercase wire key (e.g., "str", "dex").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Dex => "dex",
            Self::Con => "con",
            Self::Int => "int",
            Self::Wis => "wis",
            Self::Cha => "cha",
        }
    }

    /// Returns the full name of the ability (e.g., "Strength").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Cha => "Charisma",
        }
    }

    /// Returns all six abilities in sheet order.
    pub fn all() -> [Ability; 6] {
        [
            Self::Str,
            Self::Dex,
            Self::Con,
            Self::Int,
            Self::Wis,
            Self::Cha,
        ]
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "str" | "strength" => Ok(Self::Str),
            "dex" | "dexterity" => Ok(Self::Dex),
            "con" | "constitution" => Ok(Self::Con),
            "int" | "intelligence" => Ok(Self::Int),
            "wis" | "wisdom" => Ok(Self::Wis),
            "cha" | "charisma" => Ok(Self::Cha),
            other => Err(DomainError::parse(format!("Unknown ability: {other}"))),
        }
    }
}

/// The six ability scores, serialized with the service's short keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    #[serde(rename = "str")]
    pub strength: i32,
    #[serde(rename = "dex")]
    pub dexterity: i32,
    #[serde(rename = "con")]
    pub constitution: i32,
    #[serde(rename = "int")]
    pub intelligence: i32,
    #[serde(rename = "wis")]
    pub wisdom: i32,
    #[serde(rename = "cha")]
    pub charisma: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        // Standard array baseline: every score starts at 10.
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl AbilityScores {
    /// Get the score for a single ability.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.strength,
            Ability::Dex => self.dexterity,
            Ability::Con => self.constitution,
            Ability::Int => self.intelligence,
            Ability::Wis => self.wisdom,
            Ability::Cha => self.charisma,
        }
    }

    /// Set the score for a single ability.
    pub fn set(&mut self, ability: Ability, value: i32) {
        match ability {
            Ability::Str => self.strength = value,
            Ability::Dex => self.dexterity = value,
            Ability::Con => self.constitution = value,
            Ability::Int => self.intelligence = value,
            Ability::Wis => self.wisdom = value,
            Ability::Cha => self.charisma = value,
        }
    }
}
