//! Process draft validation errors.

use thiserror::Error;

/// Reasons a draft cannot be turned into a creation request.
///
/// Task positions are 1-based so they read naturally in the form banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum DraftError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("task {position}: {field} is required")]
    MissingTaskField {
        position: usize,
        field: &'static str,
    },

    #[error("start date must be YYYY-MM-DD, got \"{value}\"")]
    InvalidStartDate { value: String },

    #[error("task {position}: days must be a whole number, got \"{value}\"")]
    InvalidDays { position: usize, value: String },
}

impl DraftError {
    /// Creates missing scalar field error.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates missing task field error for the task at `index`.
    #[must_use]
    pub const fn missing_task_field(index: usize, field: &'static str) -> Self {
        Self::MissingTaskField {
            position: index + 1,
            field,
        }
    }

    /// Creates invalid days error for the task at `index`.
    #[must_use]
    pub fn invalid_days(index: usize, value: impl Into<String>) -> Self {
        Self::InvalidDays {
            position: index + 1,
            value: value.into(),
        }
    }
}
