//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use entities::{AuthToken, ProcessDraft, ProcessRecord, Task};
pub use errors::{ApiError, DraftError, TokenError};
pub use ports::{NewProcess, NewTask, ProgressPort, TokenStoragePort};
