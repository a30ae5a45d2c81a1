//! Conversion between unified types and OpenAI types

use super::types::{OpenAIErrorEnvelope, OpenAIMessage, OpenAIRequest, OpenAIResponse};
use crate::error::{Error, Result};
use crate::types::{
    FinishReason, FinishReasonKind, GenerateRequest, GenerateResponse, Message, Usage,
};
use serde_json::json;

/// Convert unified request to OpenAI request
pub fn to_openai_request(req: &GenerateRequest) -> OpenAIRequest {
    OpenAIRequest {
        model: req.model.clone(),
        messages: req.messages.iter().map(to_openai_message).collect(),
        temperature: req.options.temperature,
        max_tokens: req.options.max_tokens,
    }
}

fn to_openai_message(msg: &Message) -> OpenAIMessage {
    OpenAIMessage {
        role: msg.role.as_str().to_string(),
        content: Some(msg.content.clone()),
    }
}

/// Convert OpenAI response to unified response
pub fn from_openai_response(resp: OpenAIResponse) -> Result<GenerateResponse> {
    let choice = resp
        .choices
        .first()
        .ok_or_else(|| Error::invalid_response("No choices in response"))?;

    let text = choice
        .message
        .content
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| Error::invalid_response("No content in response"))?
        .to_string();

    let usage = resp
        .usage
        .map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        })
        .unwrap_or_default();

    Ok(GenerateResponse {
        text,
        usage,
        finish_reason: parse_finish_reason(&choice.finish_reason),
        metadata: Some(json!({
            "id": resp.id,
            "model": resp.model,
            "created": resp.created,
        })),
    })
}

/// Parse OpenAI finish reason to unified finish reason
pub fn parse_finish_reason(reason: &Option<String>) -> FinishReason {
    match reason.as_deref() {
        Some("stop") => FinishReason::with_raw(FinishReasonKind::Stop, "stop"),
        Some("length") => FinishReason::with_raw(FinishReasonKind::Length, "length"),
        Some("tool_calls") => FinishReason::with_raw(FinishReasonKind::ToolCalls, "tool_calls"),
        Some("content_filter") => {
            FinishReason::with_raw(FinishReasonKind::ContentFilter, "content_filter")
        }
        Some(raw) => FinishReason::with_raw(FinishReasonKind::Other, raw),
        None => FinishReason::other(),
    }
}

/// Build the message for a non-2xx answer, preferring the API's own
/// `error.message` over the raw body.
pub fn describe_api_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<OpenAIErrorEnvelope>(body) {
        Ok(envelope) => format!("OpenAI API error {}: {}", status, envelope.error.message),
        Err(_) => format!("OpenAI API error {}: {}", status, body.trim()),
    }
}
