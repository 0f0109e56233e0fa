//! Application-level errors for the service layer.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors surfaced by application services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The service answered successfully but the body did not match the
    /// expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A request payload could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ServiceError {
    /// The non-success HTTP status, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(ApiError::Status { status }) => Some(*status),
            _ => None,
        }
    }
}

/// Decode a JSON response body into a typed value.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ServiceError> {
    serde_json::from_value(value).map_err(|e| ServiceError::Decode(e.to_string()))
}

/// Encode a request payload as a JSON body.
pub(crate) fn encode<T: Serialize>(payload: &T) -> Result<Value, ServiceError> {
    serde_json::to_value(payload).map_err(|e| ServiceError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = ServiceError::from(ApiError::Status { status: 422 });
        assert_eq!(err.status(), Some(422));

        let err = ServiceError::from(ApiError::Transport("connection refused".into()));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_decode_reports_shape_mismatch() {
        let result: Result<Vec<String>, _> = decode(serde_json::json!({"not": "a list"}));
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }
}
