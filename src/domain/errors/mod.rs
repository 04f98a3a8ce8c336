//! Domain error types.

mod api_error;
mod draft_error;
mod token_error;

pub use api_error::{ApiError, CREATE_FALLBACK_MESSAGE};
pub use draft_error::DraftError;
pub use token_error::TokenError;
