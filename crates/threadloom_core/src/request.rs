//! JSON payloads for the three generation operations.

use serde::{Deserialize, Serialize};
use threadloom_constant::generation::{DEFAULT_BIO_TONE, DEFAULT_THREAD_LENGTH, DEFAULT_TONE};

use crate::error::{Result, ThreadloomError};

fn default_thread_length() -> i64 {
    DEFAULT_THREAD_LENGTH
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

fn default_bio_tone() -> String {
    DEFAULT_BIO_TONE.to_string()
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ThreadloomError::invalid(format!("{field} must not be empty")));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadRequest {
    pub content: String,
    /// Signed so that negative values reach validation instead of failing
    /// deserialization.
    #[serde(default = "default_thread_length")]
    pub thread_length: i64,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default)]
    pub writing_style: String,
}

impl ThreadRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            thread_length: DEFAULT_THREAD_LENGTH,
            tone: default_tone(),
            writing_style: String::new(),
        }
    }

    /// Validate and return the requested number of tweets.
    pub fn validate(&self) -> Result<usize> {
        require("content", &self.content)?;
        if self.thread_length < 1 {
            return Err(ThreadloomError::invalid(format!(
                "thread_length must be at least 1, got {}",
                self.thread_length
            )));
        }
        usize::try_from(self.thread_length)
            .map_err(|_| ThreadloomError::invalid("thread_length is too large"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetRequest {
    pub topic: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default)]
    pub writing_style: String,
}

impl TweetRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            tone: default_tone(),
            writing_style: String::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("topic", &self.topic)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioRequest {
    pub name: String,
    pub expertise: String,
    pub interests: Vec<String>,
    #[serde(default = "default_bio_tone")]
    pub tone: String,
}

impl BioRequest {
    pub fn new(name: impl Into<String>, expertise: impl Into<String>, interests: Vec<String>) -> Self {
        Self {
            name: name.into(),
            expertise: expertise.into(),
            interests,
            tone: default_bio_tone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("expertise", &self.expertise)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadResponse {
    pub thread: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetResponse {
    pub tweet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioResponse {
    pub bio: String,
}
