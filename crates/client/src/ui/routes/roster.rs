//! The character vault page: form card plus party roster.

use dioxus::prelude::*;

use crate::presentation::components::{CharacterFormCard, RosterList};
use crate::presentation::services::use_roster_service;
use crate::presentation::state::RosterState;

#[component]
pub fn Roster() -> Element {
    let roster_service = use_roster_service();
    let roster = use_context::<RosterState>();

    // Initial load; mutations trigger their own refresh.
    {
        let svc = roster_service.clone();
        use_effect(move || {
            let svc = svc.clone();
            let mut roster = roster;
            spawn(async move {
                roster.refresh(&svc).await;
            });
        });
    }

    rsx! {
        div { class: "app",
            h1 { "D&D Character Vault" }
            CharacterFormCard {}
            RosterList {}
        }
    }
}
