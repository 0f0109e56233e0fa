//! Raw API Port - Object-safe HTTP boundary
//!
//! Application services depend on this trait rather than a concrete HTTP
//! client, so the composition root can store it behind `Arc<dyn ...>` and
//! tests can substitute a mock.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
