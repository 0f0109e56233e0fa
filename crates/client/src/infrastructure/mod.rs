//! Infrastructure adapters for the outbound ports.

mod http_client;

pub use http_client::{ApiAdapter, DEFAULT_API_URL};
