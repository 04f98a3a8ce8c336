//! Token resolution use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{ResolvedToken, TokenSource};
use crate::domain::entities::AuthToken;
use crate::domain::errors::TokenError;
use crate::domain::ports::TokenStoragePort;

/// Picks the API token from the keyring or the command line.
pub struct ResolveTokenUseCase {
    storage_port: Arc<dyn TokenStoragePort>,
}

impl ResolveTokenUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(storage_port: Arc<dyn TokenStoragePort>) -> Self {
        Self { storage_port }
    }

    /// Resolves token from keyring or CLI/Env.
    ///
    /// Priority:
    /// 1. CLI/Env token when `save` is set (it is stored first)
    /// 2. Keyring
    /// 3. CLI/Env
    ///
    /// A failing keyring is logged and skipped so the client can still run
    /// unauthenticated or with the CLI token.
    ///
    /// # Errors
    /// Returns error if `save` is set and the CLI token is invalid.
    pub async fn execute(
        &self,
        cli_token: Option<String>,
        save: bool,
    ) -> Result<Option<ResolvedToken>, TokenError> {
        let cli_token = cli_token.filter(|s| !s.trim().is_empty());

        if save {
            let raw = cli_token
                .as_deref()
                .ok_or_else(|| TokenError::invalid_format("--save-token needs --token"))?;
            let token = AuthToken::new(raw)
                .ok_or_else(|| TokenError::invalid_format("token contains whitespace"))?;

            let resolved = ResolvedToken::new(token, TokenSource::CommandLine);
            return match self.storage_port.store_token(&resolved.token).await {
                Ok(()) => {
                    info!("Token saved to system keyring");
                    Ok(Some(resolved.persisted()))
                }
                Err(e) => {
                    warn!(error = %e, "Failed to save token, using it for this session only");
                    Ok(Some(resolved))
                }
            };
        }

        debug!("Checking keyring for stored token");
        match self.storage_port.get_token().await {
            Ok(Some(token)) => {
                info!("Using token from system keyring");
                return Ok(Some(ResolvedToken::new(token, TokenSource::Keyring)));
            }
            Ok(None) => debug!("No token found in keyring"),
            Err(e) => debug!(error = %e, "Failed to check keyring"),
        }

        if let Some(raw) = cli_token {
            if let Some(token) = AuthToken::new(&raw) {
                info!("Using token from command line / environment");
                return Ok(Some(ResolvedToken::new(token, TokenSource::CommandLine)));
            }
            warn!("Command-line token has invalid format, ignoring it");
        }

        debug!("No token found in any source");
        Ok(None)
    }

    /// Deletes the stored token.
    ///
    /// # Errors
    /// Returns error if the keyring refuses the deletion.
    pub async fn forget(&self) -> Result<(), TokenError> {
        self.storage_port.delete_token().await.inspect(|()| {
            info!("Token removed from system keyring");
        })
    }
}
