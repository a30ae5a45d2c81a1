//! One completion call per request, shaped into a thread, a tweet or a bio.

use std::sync::Arc;
use std::time::Instant;

use threadloom_constant::generation::{
    BIO_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS, THREAD_MAX_TOKENS,
    TWEET_MAX_TOKENS,
};
use threadloom_llms::{GenerateRequest, Message, OpenAIConfig, OpenAIProvider, Provider};
use threadloom_observability::{provider_span, record_duration, record_error};
use tracing::{Instrument, debug, info, warn};

use crate::error::{Result, ThreadloomError};
use crate::prompt::{BIO_SYSTEM, THREAD_SYSTEM, TWEET_SYSTEM, bio_prompt, thread_prompt, tweet_prompt};
use crate::request::{BioRequest, ThreadRequest, TweetRequest};
use crate::segment::segment_thread;

/// Model and sampling parameters applied to every call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub thread_max_tokens: u32,
    pub tweet_max_tokens: u32,
    pub bio_max_tokens: u32,
    /// Client timeout for the OpenAI provider built by [`Generator::from_env`].
    pub timeout_secs: u64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            thread_max_tokens: THREAD_MAX_TOKENS,
            tweet_max_tokens: TWEET_MAX_TOKENS,
            bio_max_tokens: BIO_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GenerationSettings {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Stateless front door to the completion provider. Cheap to share behind
/// an `Arc`; holds no per-request state.
pub struct Generator {
    provider: Arc<dyn Provider>,
    settings: GenerationSettings,
}

impl Generator {
    pub fn new<P: Provider + 'static>(provider: P, settings: GenerationSettings) -> Self {
        Self::with_shared(Arc::new(provider), settings)
    }

    pub fn with_shared(provider: Arc<dyn Provider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    /// OpenAI-backed generator from `OPENAI_*` environment variables.
    /// Fails with [`ThreadloomError::MissingCredential`] when the key is unset.
    pub fn from_env(settings: GenerationSettings) -> Result<Self> {
        let config = OpenAIProvider::config_from_env()
            .map_err(credential_error)?
            .with_timeout_secs(settings.timeout_secs);
        Self::openai(config, settings)
    }

    pub fn openai(config: OpenAIConfig, settings: GenerationSettings) -> Result<Self> {
        let provider = OpenAIProvider::new(config).map_err(credential_error)?;
        Ok(Self::new(provider, settings))
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn provider_id(&self) -> &str {
        self.provider.provider_id()
    }

    /// Generate a numbered thread. Returns at most `thread_length` tweets;
    /// fewer is logged as a warning, not an error.
    pub async fn thread(&self, request: &ThreadRequest) -> Result<Vec<String>> {
        let length = request.validate()?;
        info!(
            length,
            tone = %request.tone,
            content_len = request.content.len(),
            "generating thread"
        );

        let prompt = thread_prompt(&request.content, length, &request.tone, &request.writing_style);
        let raw = self
            .complete("thread", THREAD_SYSTEM, prompt, self.settings.thread_max_tokens)
            .await?;

        let tweets = segment_thread(&raw, length);
        if tweets.len() < length {
            warn!(
                generated = tweets.len(),
                requested = length,
                "generated fewer tweets than requested"
            );
        }
        info!(count = tweets.len(), "generated thread");
        Ok(tweets)
    }

    pub async fn tweet(&self, request: &TweetRequest) -> Result<String> {
        request.validate()?;
        info!(topic = %request.topic, tone = %request.tone, "generating tweet");

        let prompt = tweet_prompt(&request.topic, &request.tone, &request.writing_style);
        self.complete("tweet", TWEET_SYSTEM, prompt, self.settings.tweet_max_tokens)
            .await
    }

    pub async fn bio(&self, request: &BioRequest) -> Result<String> {
        request.validate()?;
        info!(name = %request.name, tone = %request.tone, "generating bio");

        let prompt = bio_prompt(&request.name, &request.expertise, &request.interests, &request.tone);
        self.complete("bio", BIO_SYSTEM, prompt, self.settings.bio_max_tokens)
            .await
    }

    /// Single round trip, no retry. Returns the trimmed completion text.
    async fn complete(
        &self,
        operation: &'static str,
        system: &str,
        prompt: String,
        max_tokens: u32,
    ) -> Result<String> {
        let span = provider_span!(
            self.provider.provider_id(),
            self.settings.model.as_str(),
            operation
        );

        async {
            let request = GenerateRequest::new(
                self.settings.model.clone(),
                vec![Message::system(system), Message::user(prompt)],
            )
            .with_temperature(self.settings.temperature)
            .with_max_tokens(max_tokens);

            let start = Instant::now();
            let result = self.provider.generate(request).await;
            record_duration("duration_ms", start.elapsed());

            let response = result.map_err(|e| {
                record_error(&e);
                ThreadloomError::from(e)
            })?;

            if response.finish_reason.is_truncated() {
                warn!(max_tokens, "completion stopped at the output token limit");
            }
            debug!(
                prompt_tokens = response.usage.prompt_tokens,
                completion_tokens = response.usage.completion_tokens,
                "completion received"
            );

            let text = response.text.trim();
            if text.is_empty() {
                let err = ThreadloomError::EmptyCompletion;
                record_error(&err);
                return Err(err);
            }
            Ok(text.to_string())
        }
        .instrument(span)
        .await
    }
}

fn credential_error(err: threadloom_llms::Error) -> ThreadloomError {
    match err {
        threadloom_llms::Error::MissingApiKey(_) => {
            ThreadloomError::MissingCredential(OpenAIProvider::API_KEY_ENV.to_string())
        }
        other => ThreadloomError::Provider(other),
    }
}
