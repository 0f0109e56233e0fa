//! Character Form - Create and edit characters

use dioxus::prelude::*;

use charvault_domain::{
    Ability, Alignment, Background, CharacterClass, Skill, Species,
};

use crate::presentation::components::common::FormField;
use crate::presentation::services::use_roster_service;
use crate::presentation::state::{FormState, RosterState};

/// The roster form card. Bound to the shared [`FormState`], so roster
/// rows can push it into Edit mode.
#[component]
pub fn CharacterFormCard() -> Element {
    let roster_service = use_roster_service();
    let roster = use_context::<RosterState>();
    let form_state = use_context::<FormState>();
    let mut form = form_state.signal();

    let mut success_message: Signal<Option<String>> = use_signal(|| None);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    // Snapshot for rendering; mutations go through the signal.
    let current = form.read().clone();
    let editing = current.is_editing();

    let on_submit = {
        let svc = roster_service.clone();
        move |_| {
            if form.read().name.is_empty() {
                error_message.set(Some("Character name is required".to_string()));
                return;
            }

            error_message.set(None);
            success_message.set(None);

            let payload = form.read().payload();
            let editing_id = form.read().editing_id;
            let svc = svc.clone();
            let mut roster = roster;

            // No in-flight guard: a second click before the response
            // returns is an accepted race.
            spawn(async move {
                let result = match editing_id {
                    Some(id) => svc.update_character(id, &payload).await,
                    None => svc.create_character(&payload).await,
                };

                match result {
                    Ok(()) => {
                        roster.refresh(&svc).await;
                        form.write().reset();
                        success_message.set(Some(if editing_id.is_some() {
                            "Character updated".to_string()
                        } else {
                            "Character created".to_string()
                        }));
                    }
                    Err(e) => {
                        // Form state is preserved so the user can retry
                        // without re-entering data.
                        error_message.set(Some(format!("Save failed: {e}")));
                    }
                }
            });
        }
    };

    let stat_boxes = Ability::all().into_iter().map(|ability| {
        let label = ability.as_str().to_uppercase();
        let value = current.stats.get(ability);
        rsx! {
            div { key: "{ability}", class: "stat-box",
                label { "{label}" }
                input {
                    r#type: "number",
                    value: "{value}",
                    oninput: move |e| form.write().set_stat(ability, &e.value()),
                }
            }
        }
    });

    let on_cancel = move |_| {
        form.write().reset();
        error_message.set(None);
        success_message.set(None);
    };

    rsx! {
        div { class: "card",
            h2 {
                if editing { "Edit Character" } else { "Create Character" }
            }

            if let Some(msg) = error_message.read().as_ref() {
                div { class: "banner banner-error", "{msg}" }
            }
            if let Some(msg) = success_message.read().as_ref() {
                div { class: "banner banner-success", "{msg}" }
            }

            div { class: "form-row",
                FormField {
                    label: "Name",
                    required: true,
                    input {
                        r#type: "text",
                        value: "{current.name}",
                        placeholder: "Name",
                        oninput: move |e| form.write().name = e.value(),
                    }
                }
                FormField {
                    label: "Class",
                    select {
                        value: "{current.class}",
                        onchange: move |e| {
                            if let Ok(class) = e.value().parse::<CharacterClass>() {
                                form.write().class = class;
                            }
                        },
                        for class in CharacterClass::all().iter() {
                            option { key: "{class}", value: "{class}", "{class}" }
                        }
                    }
                }
                FormField {
                    label: "Level",
                    input {
                        class: "level-input",
                        r#type: "number",
                        min: "1",
                        value: "{current.level_input}",
                        oninput: move |e| form.write().level_input = e.value(),
                    }
                }
            }

            div { class: "form-row",
                FormField {
                    label: "Species",
                    select {
                        value: "{current.species}",
                        onchange: move |e| {
                            if let Ok(species) = e.value().parse::<Species>() {
                                form.write().species = species;
                            }
                        },
                        for species in Species::all().iter() {
                            option { key: "{species}", value: "{species}", "{species}" }
                        }
                    }
                }
                FormField {
                    label: "Background",
                    select {
                        value: "{current.background}",
                        onchange: move |e| {
                            if let Ok(background) = e.value().parse::<Background>() {
                                form.write().background = background;
                            }
                        },
                        for background in Background::all().iter() {
                            option { key: "{background}", value: "{background}", "{background}" }
                        }
                    }
                }
                FormField {
                    label: "Alignment",
                    select {
                        value: "{current.alignment}",
                        onchange: move |e| {
                            if let Ok(alignment) = e.value().parse::<Alignment>() {
                                form.write().alignment = alignment;
                            }
                        },
                        for alignment in Alignment::all().iter() {
                            option { key: "{alignment}", value: "{alignment}", "{alignment}" }
                        }
                    }
                }
            }

            div { class: "stats-grid", {stat_boxes} }

            h3 { "Skills" }
            div { class: "skills-grid",
                for skill in Skill::all().iter().copied() {
                    label { key: "{skill}", class: "skill-item",
                        input {
                            r#type: "checkbox",
                            checked: current.skills.contains(&skill),
                            onchange: move |_| form.write().toggle_skill(skill),
                        }
                        "{skill}"
                    }
                }
            }

            h3 { "Weapons" }
            input {
                class: "weapons-input",
                r#type: "text",
                placeholder: "E.g. Longsword, Shortbow",
                value: "{current.weapon_input}",
                oninput: move |e| form.write().weapon_input = e.value(),
            }

            div { class: "form-actions",
                button { class: "btn btn-save", onclick: on_submit,
                    if editing { "Update Character" } else { "Save Character" }
                }
                if editing {
                    button { class: "btn btn-cancel", onclick: on_cancel, "Cancel" }
                }
            }
        }
    }
}
