//! Presentation state shared across components via context.

mod delete_confirm;
mod form_state;
mod roster_state;

pub use delete_confirm::DeleteConfirm;
pub use form_state::{CharacterForm, FormState};
pub use roster_state::RosterState;
