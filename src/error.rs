//! Validation error taxonomy.

use derive_more::{Display, Error, From};

/// Errors surfaced by a validation exchange.
///
/// Token lookup failures never appear here; they are absorbed where the
/// lookup happens. A `Rejected` outcome is legitimate, not transient, and
/// must never be retried automatically.
#[derive(Debug, Display, Error, From)]
pub enum ValidationError {
    /// Network-level failure reaching the server, including timeout expiry.
    #[display("Validation transport failure: {_0}")]
    Transport(#[error(source)] reqwest::Error),

    /// Non-success response from the server.
    #[display("Validation rejected: {message}")]
    #[from(skip)]
    Rejected {
        /// Server-provided error message, or a generic fallback.
        message: String,
    },
}

impl ValidationError {
    /// Builds a rejection from an optional server message.
    pub fn rejected(message: Option<String>, status: reqwest::StatusCode) -> Self {
        Self::Rejected {
            message: message
                .unwrap_or_else(|| format!("Validation failed with status {status}")),
        }
    }

    /// Returns true for failures a caller may reasonably re-trigger.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
