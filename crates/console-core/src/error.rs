//! Client-side error taxonomy
//!
//! Validation errors never reach this type: they are field-keyed maps that
//! block submission (see `validation`). Everything that comes back from an
//! awaited request is an `ApiError`.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx response, with the backend's `message` when it sent one
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, message: Option<String> },

    /// 2xx response that reported failure (`success: false` or no data)
    #[error("{}", .message.as_deref().unwrap_or("request was rejected"))]
    Rejected { message: Option<String> },

    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Aborted because the requesting view was torn down
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    /// Message supplied by the backend, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            _ => None,
        }
    }

    /// Text for a toast: the backend message, otherwise the caller's fallback
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// The stored token was rejected
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
