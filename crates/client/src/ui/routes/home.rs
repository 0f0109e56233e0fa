//! Legacy landing page.
//!
//! Kept as a placeholder entry screen; it has its own `/api/home`
//! contract and no roster functionality.

use dioxus::prelude::*;

use crate::application::dto::HomeInfo;
use crate::presentation::services::use_home_service;
use crate::ui::routes::Route;

#[component]
pub fn Home() -> Element {
    let home_service = use_home_service();
    let mut info: Signal<Option<HomeInfo>> = use_signal(|| None);

    {
        let svc = home_service.clone();
        use_effect(move || {
            let svc = svc.clone();
            spawn(async move {
                match svc.fetch_home().await {
                    Ok(data) => info.set(Some(data)),
                    Err(e) => tracing::warn!("Failed to load home info: {e}"),
                }
            });
        });
    }

    rsx! {
        div { class: "app",
            h1 { "D&D Character Vault" }

            div { class: "card",
                if let Some(data) = info.read().as_ref() {
                    p { "{data.message}" }
                    ul {
                        for person in data.people.iter() {
                            li { key: "{person}", "{person}" }
                        }
                    }
                }
                Link { class: "btn btn-save", to: Route::Roster {}, "Open the party roster" }
            }
        }
    }
}
