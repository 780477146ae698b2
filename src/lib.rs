//! Triad client library - client-side core for a Set-style card game.
//!
//! Players pick three cards from a shared board; the client stages the
//! selection, submits it to the authoritative server, and replaces its whole
//! view of the board with the server's response. The full-board resync is an
//! anti-cheat measure: partial updates could leak hidden card identity.
//!
//! # Architecture
//!
//! - **Selection**: effect-free state machine over the staged triple
//! - **Client**: HTTP validation exchange against the game server
//! - **Board**: authoritative board store with atomic whole-board replacement
//! - **Stats**: local user profile and found-set counters
//! - **Round**: orchestration tying one board view's state together
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use triad_client::{ClientConfig, GameRound, StaticTokenProvider, UserProfile, ValidationClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::new("http://localhost:3000");
//! let tokens = Arc::new(StaticTokenProvider::empty());
//! let client = ValidationClient::new(&config, tokens)?;
//!
//! let mut round = GameRound::new(client, UserProfile::new("ada"));
//! round.toggle_card("card-1").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod card;
mod client;
mod config;
mod error;
mod round;
mod selection;
mod stats;
mod token;

// Crate-level exports - Board storage
pub use board::{BoardStore, GRID_CARDS, GRID_WIDTH};

// Crate-level exports - Wire types
pub use card::{BoardSnapshot, Card, CardImage};

// Crate-level exports - Validation client
pub use client::{ValidationClient, ValidationOutcome};

// Crate-level exports - Configuration
pub use config::{ClientConfig, ConfigError};

// Crate-level exports - Error taxonomy
pub use error::ValidationError;

// Crate-level exports - Round orchestration
pub use round::GameRound;

// Crate-level exports - Selection state machine
pub use selection::{Effect, SELECTION_SIZE, SelectionPhase, SelectionState, SelectionTriple};

// Crate-level exports - User profile
pub use stats::{UserProfile, UserStats};

// Crate-level exports - Session tokens
pub use token::{SessionTokenProvider, StaticTokenProvider, TokenError};
