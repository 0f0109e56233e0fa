//! HTTP adapter for the Roster Service.
//!
//! Implements [`RawApiPort`] with reqwest. Deliberately bare: no timeout,
//! no retry, no request cancellation. Success is decided purely by the
//! HTTP status range.

use serde_json::Value;
use url::Url;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Fixed local address the Roster Service is assumed to listen on.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// reqwest-backed implementation of the raw API boundary.
#[derive(Clone)]
pub struct ApiAdapter {
    client: reqwest::Client,
    base: Url,
}

impl ApiAdapter {
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Transport(format!("invalid request path {path}: {e}")))
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let response = Self::check_status(response)?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Body read for mutation responses. A successful status is the only
    /// signal that matters there; a 201/204 with an empty or non-JSON
    /// body is still a success, so the body decodes to `Null` instead of
    /// failing.
    async fn read_json_lenient(response: reqwest::Response) -> Result<Value, ApiError> {
        let response = Self::check_status(response)?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self::parse_body_lenient(&bytes))
    }

    fn parse_body_lenient(bytes: &[u8]) -> Value {
        if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(bytes).unwrap_or(Value::Null)
        }
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read_json_lenient(response).await
    }

    async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .patch(self.endpoint(path)?)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read_json_lenient(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.endpoint(path)?)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check_status(response).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_against_base() {
        let adapter = ApiAdapter::new(Url::parse(DEFAULT_API_URL).expect("base url"));
        let url = adapter.endpoint("/api/characters/3").expect("join");
        assert_eq!(url.as_str(), "http://localhost:8080/api/characters/3");
    }

    #[test]
    fn test_default_api_url_parses() {
        assert!(Url::parse(DEFAULT_API_URL).is_ok());
    }

    #[test]
    fn test_lenient_body_tolerates_empty_and_non_json() {
        assert_eq!(ApiAdapter::parse_body_lenient(b""), Value::Null);
        assert_eq!(ApiAdapter::parse_body_lenient(b"Created"), Value::Null);
        assert_eq!(
            ApiAdapter::parse_body_lenient(br#"{"id": 5}"#),
            serde_json::json!({"id": 5})
        );
    }
}
