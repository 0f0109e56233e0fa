//! Shared helpers used across the domain crate.

mod string;

pub use string::{join_weapon_list, split_weapon_list};
