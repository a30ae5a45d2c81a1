//! OpenAI provider module
//!
//! Chat Completions API: https://platform.openai.com/docs/api-reference/chat

mod convert;
mod provider;
mod types;

pub use provider::OpenAIProvider;
pub use types::{OpenAIConfig, OpenAIRequest, OpenAIResponse};
