//! Request and response DTOs for the Roster Service.

use serde::{Deserialize, Serialize};

use charvault_domain::{
    AbilityScores, Alignment, Background, Character, CharacterClass, Skill, Species,
};

/// Full character submit body (create and update use the same shape;
/// the id travels in the path, never in the body).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CharacterPayload {
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub species: Species,
    pub background: Background,
    pub alignment: Alignment,
    pub stats: AbilityScores,
    pub skills: Vec<Skill>,
    pub weapons: Vec<String>,
}

/// Partial update used by the level-up action.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LevelUpRequest {
    pub level: u32,
}

/// Envelope returned by the collection endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CharacterListResponse {
    pub characters: Vec<Character>,
}

/// Payload of the legacy `/api/home` entry screen.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HomeInfo {
    pub message: String,
    pub people: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_shape() {
        let payload = CharacterPayload {
            name: "Thorin".to_string(),
            class: CharacterClass::Fighter,
            level: 1,
            species: Species::Dwarf,
            background: Background::Soldier,
            alignment: Alignment::LawfulGood,
            stats: AbilityScores::default(),
            skills: vec![Skill::Athletics],
            weapons: vec!["Axe".to_string(), "Shield".to_string()],
        };
        let json = serde_json::to_value(&payload).expect("serialize payload");
        assert_eq!(json["class"], "Fighter");
        assert_eq!(json["stats"]["str"], 10);
        assert_eq!(json["skills"][0], "Athletics");
        assert_eq!(json["weapons"], serde_json::json!(["Axe", "Shield"]));
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_home_info_deserializes() {
        let info: HomeInfo = serde_json::from_value(serde_json::json!({
            "message": "Testing Flask",
            "people": ["Volk", "Felix", "Gearbok"]
        }))
        .expect("deserialize home info");
        assert_eq!(info.message, "Testing Flask");
        assert_eq!(info.people.len(), 3);
    }
}
