//! Outbound ports - boundaries the client depends on, implemented by
//! infrastructure adapters.

use thiserror::Error;

mod raw_api_port;

pub use raw_api_port::RawApiPort;

#[cfg(test)]
pub use raw_api_port::MockRawApiPort;

/// Errors crossing the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection, I/O).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The service answered with a status outside the success range.
    /// No error envelope is consumed from the body.
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// The response body could not be read as JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}
