//! Use case implementations.

mod create_process_use_case;
mod load_feed_use_case;
mod resolve_token_use_case;

pub use create_process_use_case::CreateProcessUseCase;
pub use load_feed_use_case::LoadFeedUseCase;
pub use resolve_token_use_case::ResolveTokenUseCase;
