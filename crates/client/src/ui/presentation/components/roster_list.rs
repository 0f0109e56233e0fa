//! Party Roster - character list with per-item actions.

use dioxus::prelude::*;

use charvault_domain::common::join_weapon_list;
use charvault_domain::{Ability, Character};

use crate::presentation::services::use_roster_service;
use crate::presentation::state::{DeleteConfirm, FormState, RosterState};

/// The roster card: one row per cached character.
#[component]
pub fn RosterList() -> Element {
    let roster = use_context::<RosterState>();
    let characters = roster.characters().read().clone();

    rsx! {
        div { class: "card",
            h2 { "Party Roster" }

            if characters.is_empty() {
                p { class: "roster-empty", "No characters yet." }
            }

            for character in characters {
                CharacterRow { key: "{character.id}", character }
            }
        }
    }
}

#[component]
fn CharacterRow(character: Character) -> Element {
    let roster_service = use_roster_service();
    let roster = use_context::<RosterState>();
    let form_state = use_context::<FormState>();
    let mut form = form_state.signal();

    let stats_line = Ability::all()
        .iter()
        .map(|a| format!("{}:{}", a.as_str().to_uppercase(), character.stats.get(*a)))
        .collect::<Vec<_>>()
        .join(" | ");
    let skills_line = character
        .skills
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let weapons_line = join_weapon_list(&character.weapons);

    let on_edit = {
        let character = character.clone();
        move |_| {
            form.write().start_editing(&character);
            // Bring the form back into view.
            let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
        }
    };

    let on_level_up = {
        let svc = roster_service.clone();
        let id = character.id;
        let new_level = character.leveled_up();
        move |_| {
            let svc = svc.clone();
            let mut roster = roster;
            spawn(async move {
                match svc.level_up(id, new_level).await {
                    Ok(()) => roster.refresh(&svc).await,
                    Err(e) => tracing::warn!("Failed to level up character {id}: {e}"),
                }
            });
        }
    };

    // Two-click confirm instead of window.confirm: script dialogs are
    // suppressed by some webview builds.
    let mut delete_confirm = use_signal(DeleteConfirm::default);

    let on_delete = {
        let svc = roster_service.clone();
        let id = character.id;
        move |_| {
            if !delete_confirm.write().request() {
                return;
            }
            let svc = svc.clone();
            let mut roster = roster;
            spawn(async move {
                match svc.delete_character(id).await {
                    Ok(()) => roster.refresh(&svc).await,
                    Err(e) => tracing::warn!("Failed to delete character {id}: {e}"),
                }
            });
        }
    };

    let on_keep = move |_| delete_confirm.write().disarm();
    let delete_armed = delete_confirm.read().is_armed();

    rsx! {
        div { class: "char-row",
            div { class: "char-actions",
                button { class: "btn btn-edit", onclick: on_edit, "Edit" }
                button { class: "btn btn-level", onclick: on_level_up, "Lvl Up" }
                button { class: "btn btn-delete", onclick: on_delete,
                    if delete_armed { "Confirm?" } else { "Delete" }
                }
                if delete_armed {
                    button { class: "btn btn-cancel", onclick: on_keep, "Keep" }
                }
            }

            h3 { "{character.name}" }
            p {
                strong { "{character.species} {character.class}" }
                " (Lvl {character.level})"
                br {}
                em { "{character.alignment} {character.background}" }
            }
            p {
                strong { "Stats: " }
                "{stats_line}"
            }
            p {
                strong { "Skills: " }
                "{skills_line}"
            }
            p {
                strong { "Weapons: " }
                "{weapons_line}"
            }
        }
    }
}
