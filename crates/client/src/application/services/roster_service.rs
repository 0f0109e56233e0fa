//! Roster Service - Application service for character management
//!
//! Use case implementations for listing, creating, updating, leveling up,
//! and deleting characters. Abstracts the HTTP client details away from
//! the presentation layer. Response bodies of mutations are ignored; the
//! UI reloads the roster instead of applying optimistic updates.

use std::sync::Arc;

use charvault_domain::{Character, CharacterId};

use crate::application::dto::{CharacterListResponse, CharacterPayload, LevelUpRequest};
use crate::application::error::{decode, encode};
use crate::application::ServiceError;
use crate::ports::outbound::RawApiPort;

/// Service for roster reads and mutations.
#[derive(Clone)]
pub struct RosterService {
    api: Arc<dyn RawApiPort>,
}

impl RosterService {
    /// Create a new RosterService over the given API port.
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Fetch the full character list.
    pub async fn list_characters(&self) -> Result<Vec<Character>, ServiceError> {
        let value = self.api.get_json("/api/characters").await?;
        let response: CharacterListResponse = decode(value)?;
        Ok(response.characters)
    }

    /// Create a new character. The created resource in the response body
    /// is ignored; callers reload the roster.
    pub async fn create_character(&self, payload: &CharacterPayload) -> Result<(), ServiceError> {
        let body = encode(payload)?;
        self.api.post_json("/api/characters", &body).await?;
        Ok(())
    }

    /// Update an existing character in place.
    pub async fn update_character(
        &self,
        id: CharacterId,
        payload: &CharacterPayload,
    ) -> Result<(), ServiceError> {
        let body = encode(payload)?;
        self.api
            .patch_json(&format!("/api/characters/{id}"), &body)
            .await?;
        Ok(())
    }

    /// Patch the character to the given target level. Callers derive the
    /// target from [`Character::leveled_up`].
    pub async fn level_up(&self, id: CharacterId, new_level: u32) -> Result<(), ServiceError> {
        let body = encode(&LevelUpRequest { level: new_level })?;
        self.api
            .patch_json(&format!("/api/characters/{id}"), &body)
            .await?;
        Ok(())
    }

    /// Delete a character by id.
    pub async fn delete_character(&self, id: CharacterId) -> Result<(), ServiceError> {
        self.api.delete(&format!("/api/characters/{id}")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use charvault_domain::CharacterClass;
    use mockall::predicate;
    use serde_json::json;

    fn roster_json(ids: &[i64]) -> serde_json::Value {
        let characters: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                json!({
                    "id": id,
                    "name": format!("Character {id}"),
                    "class": "Fighter",
                    "level": 1,
                    "species": "Human",
                    "background": "Soldier",
                    "alignment": "True Neutral",
                    "stats": { "str": 10, "dex": 10, "con": 10, "int": 10, "wis": 10, "cha": 10 },
                    "skills": [],
                    "weapons": []
                })
            })
            .collect();
        json!({ "characters": characters })
    }

    fn sample_payload() -> CharacterPayload {
        CharacterPayload {
            name: "Thorin".to_string(),
            class: CharacterClass::Fighter,
            level: 1,
            species: "Dwarf".parse().expect("species"),
            background: "Soldier".parse().expect("background"),
            alignment: "Lawful Good".parse().expect("alignment"),
            stats: Default::default(),
            skills: vec![],
            weapons: vec!["Axe".to_string(), "Shield".to_string()],
        }
    }

    #[tokio::test]
    async fn test_list_characters_decodes_envelope() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .with(predicate::eq("/api/characters"))
            .times(1)
            .returning(|_| Ok(roster_json(&[1, 2])));

        let service = RosterService::new(Arc::new(api));
        let characters = service.list_characters().await.expect("list");
        assert_eq!(characters.len(), 2);
        assert_eq!(characters[0].id, CharacterId::from(1));
    }

    #[tokio::test]
    async fn test_list_characters_surfaces_status_error() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .returning(|_| Err(ApiError::Status { status: 500 }));

        let service = RosterService::new(Arc::new(api));
        let err = service.list_characters().await.expect_err("should fail");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_create_posts_to_collection() {
        let mut api = MockRawApiPort::new();
        api.expect_post_json()
            .withf(|path, body| {
                path == "/api/characters"
                    && body["name"] == "Thorin"
                    && body["weapons"] == json!(["Axe", "Shield"])
                    && body.get("id").is_none()
            })
            .times(1)
            .returning(|_, _| Ok(json!({"id": 5})));

        let service = RosterService::new(Arc::new(api));
        service
            .create_character(&sample_payload())
            .await
            .expect("create");
    }

    #[tokio::test]
    async fn test_update_patches_by_id() {
        let mut api = MockRawApiPort::new();
        api.expect_patch_json()
            .withf(|path, body| path == "/api/characters/9" && body["name"] == "Thorin")
            .times(1)
            .returning(|_, _| Ok(json!({})));

        let service = RosterService::new(Arc::new(api));
        service
            .update_character(CharacterId::from(9), &sample_payload())
            .await
            .expect("update");
    }

    #[tokio::test]
    async fn test_level_up_patches_incremented_level() {
        let mut json = roster_json(&[9]);
        json["characters"][0]["level"] = json!(5);
        let response: CharacterListResponse = serde_json::from_value(json).expect("roster");
        let character = response.characters[0].clone();

        let mut api = MockRawApiPort::new();
        api.expect_patch_json()
            .withf(|path, body| path == "/api/characters/9" && *body == json!({"level": 6}))
            .times(1)
            .returning(|_, _| Ok(json!({})));

        let service = RosterService::new(Arc::new(api));
        service
            .level_up(character.id, character.leveled_up())
            .await
            .expect("level up");
    }

    #[tokio::test]
    async fn test_delete_then_reload_drops_exactly_that_entry() {
        let mut api = MockRawApiPort::new();
        api.expect_delete()
            .with(predicate::eq("/api/characters/2"))
            .times(1)
            .returning(|_| Ok(()));
        api.expect_get_json()
            .with(predicate::eq("/api/characters"))
            .times(1)
            .returning(|_| Ok(roster_json(&[1, 3])));

        let service = RosterService::new(Arc::new(api));
        service
            .delete_character(CharacterId::from(2))
            .await
            .expect("delete");
        let reloaded = service.list_characters().await.expect("reload");
        assert!(reloaded.iter().all(|c| c.id != CharacterId::from(2)));
        assert_eq!(reloaded.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_failure_issues_no_reload() {
        let mut api = MockRawApiPort::new();
        api.expect_delete()
            .times(1)
            .returning(|_| Err(ApiError::Status { status: 404 }));
        // No expect_get_json: a reload after a failed delete would panic.

        let service = RosterService::new(Arc::new(api));
        let err = service
            .delete_character(CharacterId::from(2))
            .await
            .expect_err("should fail");
        assert_eq!(err.status(), Some(404));
    }
}
