//! Decoding of generation service responses
//!
//! The service answers with an OpenAI-style chat completion whose first
//! choice carries the schedule as JSON text. Models sometimes wrap that text
//! in a Markdown code fence, which is stripped before decoding.

use serde::Deserialize;

use crate::domain::entities::Schedule;
use crate::domain::ports::GenerationError;

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extract and decode the schedule from a chat-completions response body.
pub fn decode_chat_response(body: &str) -> Result<Schedule, GenerationError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::MalformedResponse {
            message: format!("response is not a chat completion: {}", e),
        })?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| GenerationError::MalformedResponse {
            message: "response has no message content".to_string(),
        })?;

    decode_schedule(&content)
}

/// Decode the `{ "schedule": [...], "summary": "..." }` payload.
pub fn decode_schedule(content: &str) -> Result<Schedule, GenerationError> {
    serde_json::from_str(strip_code_fence(content)).map_err(|e| {
        GenerationError::MalformedResponse {
            message: format!("schedule JSON does not match the expected shape: {}", e),
        }
    })
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}
