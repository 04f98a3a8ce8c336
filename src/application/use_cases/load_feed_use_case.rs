//! Feed loading use case.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::ProcessRecord;
use crate::domain::errors::ApiError;
use crate::domain::ports::ProgressPort;

/// Fetches the process feed once per call.
#[derive(Clone)]
pub struct LoadFeedUseCase {
    progress_port: Arc<dyn ProgressPort>,
}

impl LoadFeedUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(progress_port: Arc<dyn ProgressPort>) -> Self {
        Self { progress_port }
    }

    /// Loads all records in server order. No retry is attempted.
    ///
    /// # Errors
    /// Returns the port's error unchanged.
    pub async fn execute(&self) -> Result<Vec<ProcessRecord>, ApiError> {
        debug!("Loading progress feed");

        let records = self.progress_port.list_progress().await.map_err(|e| {
            warn!(error = %e, "Progress feed request failed");
            e
        })?;

        debug!(count = records.len(), "Progress feed loaded");
        Ok(records)
    }
}
