use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GenerateRequest, GenerateResponse, Headers};

/// A completion backend.
///
/// Implementations issue exactly one request-response round trip per
/// [`Provider::generate`] call and never retry.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable identifier used in logs and errors (e.g. "openai").
    fn provider_id(&self) -> &str;

    /// Headers sent with every call, with `custom_headers` merged on top.
    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers;

    /// Run a non-streaming completion.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}
