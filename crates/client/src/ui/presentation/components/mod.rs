pub mod common;

mod character_form;
mod roster_list;

pub use character_form::CharacterFormCard;
pub use roster_list::RosterList;
