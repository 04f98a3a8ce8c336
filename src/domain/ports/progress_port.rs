//! Progress API port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::ProcessRecord;
use crate::domain::errors::ApiError;

/// A task to create along with a new process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub days: u32,
}

impl NewTask {
    #[must_use]
    pub fn new(name: impl Into<String>, days: u32) -> Self {
        Self {
            name: name.into(),
            days,
        }
    }
}

/// Validated creation request for a process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProcess {
    pub process_name: String,
    pub category: String,
    pub start_date: NaiveDate,
    pub tasks: Vec<NewTask>,
}

impl NewProcess {
    #[must_use]
    pub fn new(
        process_name: impl Into<String>,
        category: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            process_name: process_name.into(),
            category: category.into(),
            start_date,
            tasks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<NewTask>) -> Self {
        self.tasks = tasks;
        self
    }
}

/// Port for the remote progress collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressPort: Send + Sync {
    /// Fetches all process records in server order.
    async fn list_progress(&self) -> Result<Vec<ProcessRecord>, ApiError>;

    /// Creates a process. The response body is not consumed.
    async fn create_progress(&self, process: NewProcess) -> Result<(), ApiError>;
}
