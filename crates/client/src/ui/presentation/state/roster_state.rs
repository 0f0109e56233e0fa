//! Roster cache state using Dioxus signals.
//!
//! The cache is non-authoritative: it is replaced wholesale by
//! [`RosterState::refresh`] on mount and after every successful mutation.
//! There is no optimistic update and no sequencing token; the last reload
//! wins.

use dioxus::prelude::*;

use charvault_domain::Character;

use crate::application::services::RosterService;

#[derive(Clone, Copy)]
pub struct RosterState {
    characters: Signal<Vec<Character>>,
}

impl RosterState {
    pub fn new() -> Self {
        Self {
            characters: Signal::new(Vec::new()),
        }
    }

    pub fn characters(&self) -> Signal<Vec<Character>> {
        self.characters
    }

    /// Reload the cache from the service.
    ///
    /// On failure the prior cache stays intact and the error is only
    /// logged; roster-load failures are not surfaced to the user.
    pub async fn refresh(&mut self, roster: &RosterService) {
        match roster.list_characters().await {
            Ok(list) => self.characters.set(list),
            Err(e) => tracing::warn!("Failed to load roster: {e}"),
        }
    }
}
