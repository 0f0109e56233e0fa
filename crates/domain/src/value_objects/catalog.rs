//! Fixed catalogs offered by the character form: class, species,
//! background, and alignment.
//!
//! Wire strings match the Roster Service exactly, including spaced names
//! ("Folk Hero", "Sleight of Hand" lives in [`super::Skill`]) and the
//! service's "Golliath" spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the wire string for this entry.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Returns every entry in form-option order.
            pub fn all() -> &'static [$name] {
                &[$(Self::$variant,)+]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(DomainError::parse(format!(
                        concat!("Unknown ", stringify!($name), ": {}"),
                        other
                    ))),
                }
            }
        }
    };
}

catalog_enum! {
    /// The twelve character classes.
    CharacterClass {
        Barbarian => "Barbarian",
        Bard => "Bard",
        Cleric => "Cleric",
        Druid => "Druid",
        Fighter => "Fighter",
        Monk => "Monk",
        Paladin => "Paladin",
        Ranger => "Ranger",
        Rogue => "Rogue",
        Sorcerer => "Sorcerer",
        Warlock => "Warlock",
        Wizard => "Wizard",
    }
}

catalog_enum! {
    /// Playable species offered by the form.
    Species {
        Human => "Human",
        Elf => "Elf",
        Dwarf => "Dwarf",
        Halfling => "Halfling",
        Dragonborn => "Dragonborn",
        Gnome => "Gnome",
        HalfElf => "Half-Elf",
        HalfOrc => "Half-Orc",
        Tiefling => "Tiefling",
        // Spelling matches the service catalog.
        Golliath => "Golliath",
        Aasimar => "Aasimar",
        Other => "Other",
    }
}

catalog_enum! {
    /// Character backgrounds.
    Background {
        Acolyte => "Acolyte",
        Charlatan => "Charlatan",
        Criminal => "Criminal",
        Entertainer => "Entertainer",
        FolkHero => "Folk Hero",
        GuildArtisan => "Guild Artisan",
        Hermit => "Hermit",
        Noble => "Noble",
        Outlander => "Outlander",
        Sage => "Sage",
        Sailor => "Sailor",
        Soldier => "Soldier",
        Urchin => "Urchin",
        Other => "Other",
    }
}

catalog_enum! {
    /// The nine alignments.
    Alignment {
        LawfulGood => "Lawful Good",
        NeutralGood => "Neutral Good",
        ChaoticGood => "Chaotic Good",
        LawfulNeutral => "Lawful Neutral",
        TrueNeutral => "True Neutral",
        ChaoticNeutral => "Chaotic Neutral",
        LawfulEvil => "Lawful Evil",
        NeutralEvil => "Neutral Evil",
        ChaoticEvil => "Chaotic Evil",
    }
}

impl Default for CharacterClass {
    fn default() -> Self {
        Self::Barbarian
    }
}

impl Default for Species {
    fn default() -> Self {
        Self::Human
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::Acolyte
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::TrueNeutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(CharacterClass::all().len(), 12);
        assert_eq!(Species::all().len(), 12);
        assert_eq!(Background::all().len(), 14);
        assert_eq!(Alignment::all().len(), 9);
    }

    #[test]
    fn test_wire_round_trip() {
        for class in CharacterClass::all() {
            assert_eq!(class.as_str().parse::<CharacterClass>().ok(), Some(*class));
        }
        for alignment in Alignment::all() {
            assert_eq!(alignment.as_str().parse::<Alignment>().ok(), Some(*alignment));
        }
    }

    #[test]
    fn test_spaced_wire_strings() {
        assert_eq!(Background::FolkHero.as_str(), "Folk Hero");
        assert_eq!(Alignment::ChaoticNeutral.as_str(), "Chaotic Neutral");
        assert_eq!(Species::HalfOrc.as_str(), "Half-Orc");
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&Alignment::LawfulEvil).expect("serialize");
        assert_eq!(json, "\"Lawful Evil\"");
        let back: Alignment = serde_json::from_str("\"Lawful Evil\"").expect("deserialize");
        assert_eq!(back, Alignment::LawfulEvil);
    }

    #[test]
    fn test_unknown_entry_is_parse_error() {
        assert!("Artificer".parse::<CharacterClass>().is_err());
        assert!("Lawful Silly".parse::<Alignment>().is_err());
    }

    #[test]
    fn test_form_defaults() {
        // Form defaults: first class, first species, first background,
        // and the middle of the alignment grid.
        assert_eq!(CharacterClass::default(), CharacterClass::Barbarian);
        assert_eq!(Species::default(), Species::Human);
        assert_eq!(Background::default(), Background::Acolyte);
        assert_eq!(Alignment::default(), Alignment::TrueNeutral);
    }
}
