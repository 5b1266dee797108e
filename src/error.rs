//! Error Types
//!
//! Failures from the REST backend and from client-side form validation.

use thiserror::Error;

/// Failure of a call to the specialists API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS...)
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response, optionally carrying a human-readable message
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// 2xx response whose body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show the user: the server's message if it sent one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Client-side validation failure; shown inline, never sent to the network
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("ID number is required")]
    IdNumberRequired,

    #[error("Invalid email")]
    InvalidEmail,
}
