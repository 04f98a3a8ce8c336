mod progress_port;
mod token_storage_port;

pub use progress_port::{NewProcess, NewTask, ProgressPort};
pub use token_storage_port::TokenStoragePort;
