//! Service providers for the presentation layer
//!
//! Dioxus context providers for the application services. Components use
//! the `use_*` hooks below instead of depending on infrastructure types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{HomeService, RosterService};
use crate::ports::outbound::RawApiPort;

/// All services wrapped for context provision.
#[derive(Clone)]
pub struct Services {
    pub roster: Arc<RosterService>,
    pub home: Arc<HomeService>,
}

impl Services {
    /// Create all services over the given API port.
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self {
            roster: Arc::new(RosterService::new(api.clone())),
            home: Arc::new(HomeService::new(api)),
        }
    }
}

/// Hook to access the RosterService from context
pub fn use_roster_service() -> Arc<RosterService> {
    let services = use_context::<Services>();
    services.roster.clone()
}

/// Hook to access the HomeService from context
pub fn use_home_service() -> Arc<HomeService> {
    let services = use_context::<Services>();
    services.home.clone()
}
