//! CharVault - desktop client composition root.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charvault_client::infrastructure::{ApiAdapter, DEFAULT_API_URL};
use charvault_client::ports::outbound::RawApiPort;
use charvault_client::presentation::Services;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charvault=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CharVault");

    // Roster Service address: fixed local default, env override only.
    let base_url =
        std::env::var("CHARVAULT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let base_url = url::Url::parse(&base_url)
        .with_context(|| format!("invalid Roster Service address: {base_url}"))?;
    tracing::info!("Using Roster Service at {base_url}");

    let api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(base_url));

    dioxus::LaunchBuilder::new()
        .with_context(Services::new(api))
        .launch(charvault_client::app);

    Ok(())
}
