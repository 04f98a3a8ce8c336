//! Progress API error types.

use thiserror::Error;

/// Banner text used when an error carries no message of its own.
pub const CREATE_FALLBACK_MESSAGE: &str = "Failed to create progress";

/// Errors raised while talking to the progress API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("not authorized: {message}")]
    Unauthorized { message: String },

    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected response shape: {message}")]
    Decode { message: String },

    #[error("unexpected API error: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates rejection carrying the server's message.
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns the message shown to the user in the form banner.
    ///
    /// Rejections show the server's message unchanged; an empty message
    /// falls back to [`CREATE_FALLBACK_MESSAGE`].
    #[must_use]
    pub fn banner_text(&self) -> String {
        let text = match self {
            Self::Rejected { message, .. } => message.trim().to_string(),
            Self::RateLimited { .. } => self.to_string(),
            Self::Network { message }
            | Self::Unauthorized { message }
            | Self::Decode { message }
            | Self::Unexpected { message } => {
                if message.trim().is_empty() {
                    String::new()
                } else {
                    self.to_string()
                }
            }
        };

        if text.is_empty() {
            CREATE_FALLBACK_MESSAGE.to_string()
        } else {
            text
        }
    }
}
