//! Character entity - a server-owned character sheet record.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;
use crate::value_objects::{
    AbilityScores, Alignment, Background, CharacterClass, Skill, Species,
};

/// A character as the Roster Service returns it.
///
/// The service owns the record; the client holds these only as a
/// transient cache that is fully reloaded after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub class: CharacterClass,
    /// Always >= 1; only ever increases via level-up.
    pub level: u32,
    pub species: Species,
    /// Older service records never stored a background; the wire may
    /// omit the key entirely, so decoding falls back to the default.
    #[serde(default)]
    pub background: Background,
    pub alignment: Alignment,
    pub stats: AbilityScores,
    /// Selected proficiencies; no duplicates.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Ordered free-text weapon names; never empty strings.
    #[serde(default)]
    pub weapons: Vec<String>,
}

impl Character {
    /// The level a level-up action targets: current + 1, no upper bound.
    pub fn leveled_up(&self) -> u32 {
        self.level + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Ability;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "id": 3,
            "name": "Thorin",
            "class": "Fighter",
            "level": 4,
            "species": "Dwarf",
            "background": "Soldier",
            "alignment": "Lawful Good",
            "stats": { "str": 16, "dex": 12, "con": 15, "int": 10, "wis": 11, "cha": 9 },
            "skills": ["Athletics", "Animal Handling"],
            "weapons": ["Axe", "Shield"]
        })
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let character: Character =
            serde_json::from_value(sample_json()).expect("deserialize character");
        assert_eq!(character.id, CharacterId::from(3));
        assert_eq!(character.class, CharacterClass::Fighter);
        assert_eq!(character.stats.get(Ability::Str), 16);
        assert_eq!(
            character.skills,
            vec![Skill::Athletics, Skill::AnimalHandling]
        );
        assert_eq!(character.weapons, vec!["Axe", "Shield"]);
    }

    #[test]
    fn test_serialize_uses_class_key() {
        let character: Character =
            serde_json::from_value(sample_json()).expect("deserialize character");
        let json = serde_json::to_value(&character).expect("serialize character");
        assert_eq!(json["class"], "Fighter");
        assert!(json.get("char_class").is_none());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let mut json = sample_json();
        if let Some(object) = json.as_object_mut() {
            object.remove("skills");
            object.remove("weapons");
        }
        let character: Character = serde_json::from_value(json).expect("deserialize character");
        assert!(character.skills.is_empty());
        assert!(character.weapons.is_empty());
    }

    #[test]
    fn test_missing_background_falls_back_to_default() {
        // Records created before backgrounds existed come back without
        // the key; one such record must not sink the whole roster load.
        let mut json = sample_json();
        if let Some(object) = json.as_object_mut() {
            object.remove("background");
        }
        let character: Character = serde_json::from_value(json).expect("deserialize character");
        assert_eq!(character.background, Background::default());
    }

    #[test]
    fn test_leveled_up_increments_by_one() {
        let mut character: Character =
            serde_json::from_value(sample_json()).expect("deserialize character");
        assert_eq!(character.leveled_up(), 5);
        character.level = 1;
        assert_eq!(character.leveled_up(), 2);
    }
}
