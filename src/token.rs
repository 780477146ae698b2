//! Session token lookup.
//!
//! The token source is opaque to the core: some secure store, keychain, or
//! in-memory cache. Lookups are best-effort by contract; a failure is logged
//! at the call site and the validation request proceeds without a token.

use async_trait::async_trait;
use derive_more::{Display, Error};
use tracing::instrument;

/// Session token lookup error.
///
/// Absorbed at the lookup boundary: callers log it and continue tokenless.
#[derive(Debug, Clone, Display, Error)]
#[display("Token lookup error: {} at {}:{}", message, file, line)]
pub struct TokenError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TokenError {
    /// Creates a new token lookup error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Opaque lookup for the current session identifier.
#[async_trait]
pub trait SessionTokenProvider: Send + Sync {
    /// Returns the session token, or `None` when no session exists yet.
    async fn session_id(&self) -> Result<Option<String>, TokenError>;
}

/// Token provider backed by a fixed value.
///
/// Covers the common cases directly: a known session for a logged-in user, or
/// no token at all for a guest.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    /// Creates a provider that always returns the given token.
    #[instrument(skip(token))]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Creates a provider with no token.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionTokenProvider for StaticTokenProvider {
    async fn session_id(&self) -> Result<Option<String>, TokenError> {
        Ok(self.token.clone())
    }
}
