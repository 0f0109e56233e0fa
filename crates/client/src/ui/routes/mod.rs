//! Client routes.

use dioxus::prelude::*;

mod home;
mod roster;

pub use home::Home;
pub use roster::Roster;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// Legacy landing page (separate `/api/home` contract).
    #[route("/")]
    Home {},
    /// The character vault: form + party roster.
    #[route("/roster")]
    Roster {},
}
