//! Failure classification for auth API calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages never inspect the variants; they render `user_message()`, which
//! prefers the backend's own `message` and falls back to a generic line.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Shown when a failure carries no usable backend message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    /// The backend answered 2xx but the body was unreadable.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a raw response body, keeping the backend's
    /// `message` field when the body is a JSON error envelope.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        Self::Status { status, message }
    }

    /// The backend-supplied message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Text for the form's error banner.
    pub fn user_message(&self) -> String {
        self.server_message()
            .unwrap_or(FALLBACK_ERROR_MESSAGE)
            .to_owned()
    }
}
