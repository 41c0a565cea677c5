//! Error types for the Telegram integration

use thiserror::Error;

/// Errors that can occur while talking to the Bot API
#[derive(Debug, Error)]
pub enum TelegramError {
    /// A required argument is missing or out of bounds; nothing was sent
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The server answered with an HTTP status other than 200
    #[error("HTTP {status}: {body}")]
    Transport {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body is not a valid envelope
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The envelope reported `ok: false`
    #[error("Telegram API error {code}: {description}")]
    Api {
        /// `error_code` from the envelope
        code: i64,
        /// `description` from the envelope
        description: String,
        /// Seconds to wait before repeating the request (flood control)
        retry_after: Option<u64>,
        /// New identifier of a group migrated to a supergroup
        migrate_to_chat_id: Option<i64>,
    },

    /// The HTTP exchange itself failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// An upload source could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TelegramError {
    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an API error without flood-control or migration hints
    #[must_use]
    pub fn api(code: i64, description: impl Into<String>) -> Self {
        Self::Api {
            code,
            description: description.into(),
            retry_after: None,
            migrate_to_chat_id: None,
        }
    }

    /// The API error code, or the HTTP status for transport errors
    #[must_use]
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            Self::Transport { status, .. } => Some(i64::from(*status)),
            _ => None,
        }
    }

    /// Check if repeating the same request may succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(err) => err.is_connect() || err.is_timeout(),
            Self::Transport { status, .. } => *status == 429 || *status >= 500,
            Self::Api { retry_after, .. } => retry_after.is_some(),
            _ => false,
        }
    }
}
