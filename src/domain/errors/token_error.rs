//! Token storage error types.

use thiserror::Error;

/// Failures while reading or writing the stored API token.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum TokenError {
    #[error("invalid token: {reason}")]
    InvalidFormat { reason: String },

    #[error("secure storage not available: {message}")]
    StorageUnavailable { message: String },

    #[error("failed to retrieve stored token: {message}")]
    RetrievalFailed { message: String },

    #[error("failed to store token: {message}")]
    StorageFailed { message: String },

    #[error("failed to delete stored token: {message}")]
    DeletionFailed { message: String },
}

impl TokenError {
    /// Creates invalid format error.
    #[must_use]
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Creates storage unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
        }
    }

    /// Creates retrieval failed error.
    #[must_use]
    pub fn retrieval_failed(message: impl Into<String>) -> Self {
        Self::RetrievalFailed {
            message: message.into(),
        }
    }

    /// Creates storage failed error.
    #[must_use]
    pub fn storage_failed(message: impl Into<String>) -> Self {
        Self::StorageFailed {
            message: message.into(),
        }
    }

    /// Creates deletion failed error.
    #[must_use]
    pub fn deletion_failed(message: impl Into<String>) -> Self {
        Self::DeletionFailed {
            message: message.into(),
        }
    }
}
