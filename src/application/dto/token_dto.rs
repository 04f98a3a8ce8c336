//! Token resolution DTOs.

use crate::domain::entities::AuthToken;

/// Where the API token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Token from the system keyring.
    Keyring,
    /// Token from `--token` or `NEXUS_TOKEN`.
    CommandLine,
}

impl TokenSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Keyring => "system keyring",
            Self::CommandLine => "command line / environment",
        }
    }
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Resolved token with its source.
#[derive(Debug, Clone)]
pub struct ResolvedToken {
    /// The bearer token.
    pub token: AuthToken,
    /// Source of the token.
    pub source: TokenSource,
    /// Whether the token was written to the keyring during resolution.
    pub persisted: bool,
}

impl ResolvedToken {
    /// Creates new resolved token.
    #[must_use]
    pub const fn new(token: AuthToken, source: TokenSource) -> Self {
        Self {
            token,
            source,
            persisted: false,
        }
    }

    /// Marks the token as persisted.
    #[must_use]
    pub const fn persisted(mut self) -> Self {
        self.persisted = true;
        self
    }
}
