//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Command payload (rosters, prompt, schedule)
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub kind: &'static str,
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, kind: &'static str, data: T) -> Self {
        Self {
            event: "data",
            command,
            kind,
            data,
        }
    }
}

/// Generation request status transition
#[derive(Debug, Clone, Serialize)]
pub struct StatusEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub status: &'static str,
}

impl<'a> StatusEvent<'a> {
    pub fn new(command: &'a str, status: &'static str) -> Self {
        Self {
            event: "status",
            command,
            status,
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}
