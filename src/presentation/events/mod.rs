//! Event handling.

use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::entities::ProcessRecord;
use crate::domain::errors::ApiError;
use crate::presentation::widgets::LoadTicket;

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Completions and requests delivered to the app loop.
#[derive(Debug)]
pub enum AppEvent {
    /// A feed load finished.
    FeedLoaded {
        ticket: LoadTicket,
        result: Result<Vec<ProcessRecord>, ApiError>,
    },
    /// A create request finished.
    ProcessCreated { result: Result<(), ApiError> },
    /// Reload the page.
    Refresh,
}

/// Fire-and-forget handle that asks the app to reload the page.
///
/// Callers never learn whether or when the reload completed.
#[derive(Debug, Clone)]
pub struct RefreshTrigger {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl RefreshTrigger {
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }

    /// Requests a reload.
    pub fn request(&self) {
        if self.tx.send(AppEvent::Refresh).is_err() {
            debug!("Refresh requested after the app loop stopped");
        }
    }
}
