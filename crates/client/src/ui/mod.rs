use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use routes::Route;

static APP_CSS: &str = include_str!("../../assets/style.css");

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Shared state must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::RosterState::new);
    use_context_provider(presentation::state::FormState::new);

    rsx! {
        style { {APP_CSS} }
        Router::<routes::Route> {}
    }
}
