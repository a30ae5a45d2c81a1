//! OpenAI provider implementation

use std::time::Duration;

use super::convert::{describe_api_error, from_openai_response, to_openai_request};
use super::types::{OpenAIConfig, OpenAIResponse};
use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::types::{GenerateRequest, GenerateResponse, Headers};
use async_trait::async_trait;
use reqwest::Client;

/// OpenAI provider
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Environment variable for API key
    pub const API_KEY_ENV: &'static str = "OPENAI_API_KEY";
    pub const BASE_URL_ENV: &'static str = "OPENAI_BASE_URL";
    pub const ORGANIZATION_ENV: &'static str = "OPENAI_ORGANIZATION";
    pub const PROJECT_ENV: &'static str = "OPENAI_PROJECT";

    /// Create a new OpenAI provider
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey("openai".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Create provider from environment
    pub fn from_env() -> Result<Self> {
        Self::new(Self::config_from_env()?)
    }

    /// Read `OPENAI_*` variables into a config without building a client.
    pub fn config_from_env() -> Result<OpenAIConfig> {
        let api_key = std::env::var(Self::API_KEY_ENV)
            .map_err(|_| Error::MissingApiKey("openai".to_string()))?;

        let mut config = OpenAIConfig::new(api_key);
        if let Ok(base_url) = std::env::var(Self::BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }
        if let Ok(org_id) = std::env::var(Self::ORGANIZATION_ENV) {
            config = config.with_organization_id(org_id);
        }
        if let Ok(project_id) = std::env::var(Self::PROJECT_ENV) {
            config = config.with_project_id(project_id);
        }
        Ok(config)
    }

    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }
}

#[async_trait]
impl Provider for OpenAIProvider {
    fn provider_id(&self) -> &str {
        "openai"
    }

    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers {
        let mut headers = Headers::new();

        headers.insert("Authorization", format!("Bearer {}", self.config.api_key));
        headers.insert("Content-Type", "application/json");

        if let Some(ref org_id) = self.config.organization_id {
            headers.insert("OpenAI-Organization", org_id);
        }

        if let Some(ref project_id) = self.config.project_id {
            headers.insert("OpenAI-Project", project_id);
        }

        if let Some(custom) = custom_headers {
            headers.merge_with(custom);
        }

        headers
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let openai_req = to_openai_request(&request);
        let headers = self.build_headers(request.options.headers.as_ref());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            url = %url,
            model = %openai_req.model,
            messages = openai_req.messages.len(),
            "sending chat completion"
        );

        let response = self
            .client
            .post(&url)
            .headers(headers.to_reqwest_headers())
            .json(&openai_req)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::provider_error(describe_api_error(status, &error_text)));
        }

        let openai_resp: OpenAIResponse = response.json().await?;
        from_openai_response(openai_resp)
    }
}
