//! CharVault client crate.
//!
//! Layered as ui / application / ports / infrastructure: the UI talks to
//! application services, services talk to the object-safe `RawApiPort`,
//! and the reqwest adapter in infrastructure implements that port against
//! the external Roster Service.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::{app, Route};
