//! HTTP schedule generator
//!
//! Talks to an OpenAI-compatible chat-completions endpoint with a blocking
//! `reqwest` client. One POST per request; no retries.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use super::response::decode_chat_response;
use crate::config::GeneratorConfig;
use crate::domain::entities::Schedule;
use crate::domain::ports::{GenerationError, GenerationRequest, ScheduleGenerator};
use crate::domain::services::{render_prompt, SYSTEM_PROMPT};

/// Longest slice of an error body kept in `GenerationError::Service`
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    response_format: ResponseFormat,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// `ScheduleGenerator` backed by a chat-completions HTTP endpoint
#[derive(Clone)]
pub struct HttpScheduleGenerator {
    endpoint: String,
    model: String,
    temperature: f32,
    api_key: Option<String>,
    client: Client,
}

impl std::fmt::Debug for HttpScheduleGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpScheduleGenerator")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl HttpScheduleGenerator {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Transport {
                message: e.to_string(),
            })?;
        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            temperature: 0.2,
            api_key: None,
            client,
        })
    }

    /// Build from config, reading the API key from the configured env var.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        Self::from_config_with(config, |name| std::env::var(name).ok())
    }

    pub(crate) fn from_config_with<L>(
        config: &GeneratorConfig,
        lookup: L,
    ) -> Result<Self, GenerationError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let var = config.api_key_env.trim();
        let api_key = if var.is_empty() {
            None
        } else {
            let key = lookup(var).filter(|k| !k.trim().is_empty()).ok_or_else(|| {
                GenerationError::MissingApiKey {
                    var: var.to_string(),
                }
            })?;
            Some(key)
        };

        let mut generator = Self::new(&config.endpoint, &config.model, config.timeout())?
            .with_temperature(config.temperature);
        generator.api_key = api_key;
        Ok(generator)
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };
        serde_json::to_string(&body).map_err(|e| GenerationError::Transport {
            message: e.to_string(),
        })
    }
}

impl ScheduleGenerator for HttpScheduleGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<Schedule, GenerationError> {
        let body = self.request_body(&render_prompt(request))?;

        let mut req = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req.send().map_err(|e| GenerationError::Transport {
            message: e.to_string(),
        })?;

        let status = resp.status();
        let text = resp.text().map_err(|e| GenerationError::Transport {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(GenerationError::Service {
                status: status.as_u16(),
                body: truncate(&text, MAX_ERROR_BODY),
            });
        }

        decode_chat_response(&text)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
