//! Character form state.
//!
//! [`CharacterForm`] is the plain state machine behind the roster form:
//! Create mode (no `editing_id`) or Edit mode (populated from a roster
//! entry). It owns every field mutator so the transition rules are
//! testable without a UI runtime; [`FormState`] wraps it in a signal for
//! the components.

use dioxus::prelude::*;

use charvault_domain::common::{join_weapon_list, split_weapon_list};
use charvault_domain::{
    Ability, AbilityScores, Alignment, Background, Character, CharacterClass, CharacterId, Skill,
    Species,
};

use crate::application::dto::CharacterPayload;

/// Editable form fields plus the create/edit mode flag.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterForm {
    /// None = Create mode, Some = Edit mode scoped to that character.
    pub editing_id: Option<CharacterId>,
    pub name: String,
    pub class: CharacterClass,
    /// Raw text of the level input; coerced on submit.
    pub level_input: String,
    pub species: Species,
    pub background: Background,
    pub alignment: Alignment,
    pub stats: AbilityScores,
    /// Selected skills in toggle order; never contains duplicates.
    pub skills: Vec<Skill>,
    /// Raw comma-separated weapons text; split on submit.
    pub weapon_input: String,
}

impl Default for CharacterForm {
    fn default() -> Self {
        Self {
            editing_id: None,
            name: String::new(),
            class: CharacterClass::default(),
            level_input: "1".to_string(),
            species: Species::default(),
            background: Background::default(),
            alignment: Alignment::default(),
            stats: AbilityScores::default(),
            skills: Vec::new(),
            weapon_input: String::new(),
        }
    }
}

impl CharacterForm {
    /// Whether the form is in Edit mode.
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Enter Edit mode populated from a roster entry. Weapons are
    /// denormalized into comma-joined text for the text input.
    pub fn start_editing(&mut self, character: &Character) {
        self.editing_id = Some(character.id);
        self.name = character.name.clone();
        self.class = character.class;
        self.level_input = character.level.to_string();
        self.species = character.species;
        self.background = character.background;
        self.alignment = character.alignment;
        self.stats = character.stats;
        self.skills = character.skills.clone();
        self.weapon_input = join_weapon_list(&character.weapons);
    }

    /// Back to Create mode with every field at its default.
    /// Used by cancel and by a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set one ability score from raw input; unparsable input becomes 0.
    pub fn set_stat(&mut self, ability: Ability, raw: &str) {
        self.stats.set(ability, raw.trim().parse().unwrap_or(0));
    }

    /// Add the skill if absent, remove it if present.
    pub fn toggle_skill(&mut self, skill: Skill) {
        if let Some(position) = self.skills.iter().position(|s| *s == skill) {
            self.skills.remove(position);
        } else {
            self.skills.push(skill);
        }
    }

    /// Coerced level: parse-or-1, floored at 1.
    pub fn level(&self) -> u32 {
        self.level_input.trim().parse().unwrap_or(1).max(1)
    }

    /// Build the submit body from the current fields.
    pub fn payload(&self) -> CharacterPayload {
        CharacterPayload {
            name: self.name.clone(),
            class: self.class,
            level: self.level(),
            species: self.species,
            background: self.background,
            alignment: self.alignment,
            stats: self.stats,
            skills: self.skills.clone(),
            weapons: split_weapon_list(&self.weapon_input),
        }
    }
}

/// Signal wrapper provided via Dioxus context so the form card and the
/// roster rows share one form.
#[derive(Clone, Copy)]
pub struct FormState {
    inner: Signal<CharacterForm>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(CharacterForm::default()),
        }
    }

    pub fn signal(&self) -> Signal<CharacterForm> {
        self.inner
    }
}
