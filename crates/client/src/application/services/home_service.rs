//! Home Service - legacy `/api/home` entry screen.
//!
//! Kept as a placeholder landing page; it shares no contract with the
//! roster endpoints.

use std::sync::Arc;

use crate::application::dto::HomeInfo;
use crate::application::error::decode;
use crate::application::ServiceError;
use crate::ports::outbound::RawApiPort;

#[derive(Clone)]
pub struct HomeService {
    api: Arc<dyn RawApiPort>,
}

impl HomeService {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Fetch the landing-page greeting.
    pub async fn fetch_home(&self) -> Result<HomeInfo, ServiceError> {
        let value = self.api.get_json("/api/home").await?;
        decode(value)
    }
}
