//! Domain entity definitions.

mod draft;
mod process;
mod token;

pub use draft::{ProcessDraft, START_DATE_FORMAT, TaskDraft, TaskField};
pub use process::{ProcessId, ProcessRecord, Task, TaskId};
pub use token::AuthToken;
