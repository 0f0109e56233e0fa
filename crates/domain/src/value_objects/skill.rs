//! Skill value object - the fixed 18-skill proficiency list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The eighteen skills a character may be proficient in.
///
/// Wire strings are the display names, including the spaced ones
/// ("Animal Handling", "Sleight of Hand").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Acrobatics,
    #[serde(rename = "Animal Handling")]
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    #[serde(rename = "Sleight of Hand")]
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    /// Returns the display/wire name of the skill.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acrobatics => "Acrobatics",
            Self::AnimalHandling => "Animal Handling",
            Self::Arcana => "Arcana",
            Self::Athletics => "Athletics",
            Self::Deception => "Deception",
            Self::History => "History",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Investigation => "Investigation",
            Self::Medicine => "Medicine",
            Self::Nature => "Nature",
            Self::Perception => "Perception",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
            Self::Religion => "Religion",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
        }
    }

    /// Returns all skills in checkbox-grid order.
    pub fn all() -> &'static [Skill] {
        &[
            Self::Acrobatics,
            Self::AnimalHandling,
            Self::Arcana,
            Self::Athletics,
            Self::Deception,
            Self::History,
            Self::Insight,
            Self::Intimidation,
            Self::Investigation,
            Self::Medicine,
            Self::Nature,
            Self::Perception,
            Self::Performance,
            Self::Persuasion,
            Self::Religion,
            Self::SleightOfHand,
            Self::Stealth,
            Self::Survival,
        ]
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|skill| skill.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {s}")))
    }
}
