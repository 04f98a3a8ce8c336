//! Process creation use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::ProcessDraft;
use crate::domain::errors::{ApiError, DraftError};
use crate::domain::ports::{NewProcess, ProgressPort};

/// Validates drafts and sends creation requests.
#[derive(Clone)]
pub struct CreateProcessUseCase {
    progress_port: Arc<dyn ProgressPort>,
}

impl CreateProcessUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(progress_port: Arc<dyn ProgressPort>) -> Self {
        Self { progress_port }
    }

    /// Turns a draft into a request without touching the network.
    ///
    /// # Errors
    /// Returns the first validation problem of the draft.
    pub fn prepare(draft: &ProcessDraft) -> Result<NewProcess, DraftError> {
        draft.to_new_process().inspect_err(|e| {
            debug!(error = %e, "Draft rejected before submission");
        })
    }

    /// Sends one creation request. Attempted once, never retried.
    ///
    /// # Errors
    /// Returns the port's error unchanged.
    pub async fn execute(&self, process: NewProcess) -> Result<(), ApiError> {
        debug!(
            process = %process.process_name,
            tasks = process.tasks.len(),
            "Creating process"
        );

        match self.progress_port.create_progress(process).await {
            Ok(()) => {
                info!("Process created");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Process creation failed");
                Err(e)
            }
        }
    }
}
