//! Per-turn selection → validate → resync orchestration.
//!
//! [`GameRound`] owns every piece of mutable state for one board view:
//! selection, board, and profile live behind a single `&mut self`, so
//! mutations never need locking and a validation response is applied only
//! after it is fully received, never speculatively.

use tracing::{debug, info, instrument, warn};

use crate::board::BoardStore;
use crate::card::BoardSnapshot;
use crate::client::{ValidationClient, ValidationOutcome};
use crate::error::ValidationError;
use crate::selection::{Effect, SelectionState};
use crate::stats::UserProfile;

/// One board view's worth of game state and the client that syncs it.
#[derive(Debug)]
pub struct GameRound {
    selection: SelectionState,
    board: BoardStore,
    profile: UserProfile,
    client: ValidationClient,
}

impl GameRound {
    /// Creates a round with an empty board, awaiting provisioning.
    #[instrument(skip(client, profile), fields(username = %profile.username()))]
    pub fn new(client: ValidationClient, profile: UserProfile) -> Self {
        info!("Creating game round");
        Self {
            selection: SelectionState::new(),
            board: BoardStore::new(),
            profile,
            client,
        }
    }

    /// Creates a round seeded with an already-provisioned board.
    #[instrument(skip(client, profile, board), fields(cards = board.len()))]
    pub fn with_board(
        client: ValidationClient,
        profile: UserProfile,
        board: BoardSnapshot,
    ) -> Self {
        info!("Creating game round with provisioned board");
        Self {
            selection: SelectionState::new(),
            board: BoardStore::with_board(board),
            profile,
            client,
        }
    }

    /// The staged selection and auto-found flags.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The authoritative board.
    pub fn board(&self) -> &BoardStore {
        &self.board
    }

    /// The local user profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Toggles a card and runs any validation the transition triggers.
    ///
    /// Returns `Ok(Some(outcome))` when this toggle filled the selection and
    /// the server answered, `Ok(None)` when no validation was due. On a
    /// successful exchange the board is replaced (when the response carries
    /// one), stats are bumped for an authenticated user iff the set was
    /// valid, and the staged selection clears regardless of the verdict.
    ///
    /// # Errors
    ///
    /// A failed exchange surfaces as [`ValidationError`] and leaves the
    /// staged selection and board exactly as they were before the call, so
    /// the caller decides whether to re-trigger or reset.
    #[instrument(skip(self))]
    pub async fn toggle_card(
        &mut self,
        id: &str,
    ) -> Result<Option<ValidationOutcome>, ValidationError> {
        let effects = self.selection.toggle(id);

        let mut result = None;
        for effect in effects {
            match effect {
                Effect::Validate(triple) => {
                    debug!(?triple, "Running triggered validation");
                    let outcome = self.client.validate(&triple).await.inspect_err(|err| {
                        warn!(error = %err, "Validation failed, selection left intact");
                    })?;
                    self.apply_outcome(&outcome);
                    result = Some(outcome);
                }
            }
        }

        Ok(result)
    }

    /// Applies a successful validation response to local state.
    #[instrument(skip(self, outcome), fields(is_valid_set = outcome.is_valid_set))]
    fn apply_outcome(&mut self, outcome: &ValidationOutcome) {
        if let Some(board) = &outcome.board {
            self.board.replace(board.clone());
        } else {
            debug!("Response carried no board, keeping current one");
        }

        if outcome.is_valid_set && self.profile.is_authenticated() {
            self.profile.record_found_set();
        }

        // The server owns the verdict; clearing is not conditioned on it.
        self.selection.clear();
    }

    /// Re-runs validation for a full selection left over from a failed
    /// exchange. Returns `Ok(None)` when the selection is not full.
    ///
    /// Meant for transport failures; a rejected set is a legitimate outcome
    /// and resubmitting the same triple will be rejected again.
    #[instrument(skip(self))]
    pub async fn retry_validation(
        &mut self,
    ) -> Result<Option<ValidationOutcome>, ValidationError> {
        let Some(triple) = self.selection.triple() else {
            debug!("No full selection to revalidate");
            return Ok(None);
        };

        let outcome = self.client.validate(&triple).await?;
        self.apply_outcome(&outcome);
        Ok(Some(outcome))
    }

    /// Abandons a staged selection, e.g. after a failed exchange.
    #[instrument(skip(self))]
    pub fn reset_selection(&mut self) {
        self.selection.clear();
    }

    /// Replaces the auto-found flags with the server's latest advisory set.
    pub fn set_auto_found(&mut self, ids: Vec<String>) {
        self.selection.set_auto_found(ids);
    }
}
