//! User profile and found-set statistics.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Per-user counters, persisted across boards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Number of confirmed valid sets found.
    pub sets_found: u32,
}

impl UserStats {
    /// Returns the stats with the found-set counter bumped by one.
    pub fn increment(self) -> Self {
        Self {
            sets_found: self.sets_found + 1,
        }
    }
}

/// Local profile state for the player at this client.
///
/// Authentication is inferred from a non-empty username in local profile
/// state; it is not re-confirmed by the server per call. A guest profile has
/// an empty username and never accumulates stats.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    username: String,
    stats: UserStats,
}

impl UserProfile {
    /// Creates a profile for a logged-in user.
    #[instrument(skip(username))]
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        debug!(username = %username, "Creating user profile");
        Self {
            username,
            stats: UserStats::default(),
        }
    }

    /// Creates an unauthenticated guest profile.
    pub fn guest() -> Self {
        Self::default()
    }

    /// The user's display name; empty for a guest.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current counters.
    pub fn stats(&self) -> UserStats {
        self.stats
    }

    /// Whether stats updates apply to this profile.
    pub fn is_authenticated(&self) -> bool {
        !self.username.is_empty()
    }

    /// Records a confirmed valid set for this user.
    #[instrument(skip(self), fields(username = %self.username))]
    pub fn record_found_set(&mut self) {
        self.stats = self.stats.increment();
        info!(sets_found = self.stats.sets_found, "Recorded found set");
    }
}
