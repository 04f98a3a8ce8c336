//! Token storage port.

use async_trait::async_trait;

use crate::domain::entities::AuthToken;
use crate::domain::errors::TokenError;

/// Port for persisting the API token between runs.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Retrieves stored token, `None` when nothing is stored.
    async fn get_token(&self) -> Result<Option<AuthToken>, TokenError>;

    /// Replaces the stored token.
    async fn store_token(&self, token: &AuthToken) -> Result<(), TokenError>;

    /// Deletes stored token. Deleting nothing is not an error.
    async fn delete_token(&self) -> Result<(), TokenError>;
}
