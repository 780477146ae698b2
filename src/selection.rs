//! Staged-selection state machine.
//!
//! The state machine is effect-free: [`SelectionState::toggle`] mutates the
//! staged set and returns the effects the caller must perform. Reaching three
//! staged cards emits exactly one [`Effect::Validate`] carrying a latched copy
//! of the triple, so an in-flight validation never contends with toggles made
//! after it was triggered.

use tracing::{debug, instrument};

/// Number of cards in a complete selection.
pub const SELECTION_SIZE: usize = 3;

/// Phase of the staged selection, derived from its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// No cards staged.
    Empty,
    /// One or two cards staged.
    Partial,
    /// Three cards staged; a validation has been triggered for them.
    Full,
}

/// A latched triple of card ids, fixed at the moment the selection filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTriple([String; SELECTION_SIZE]);

impl SelectionTriple {
    /// The three unique card ids, in the order they were staged.
    pub fn ids(&self) -> &[String; SELECTION_SIZE] {
        &self.0
    }
}

/// Effects requested by a selection transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Submit the latched triple to the validation server.
    Validate(SelectionTriple),
}

/// The staged selection plus the server-flagged auto-found set.
///
/// `auto_found` is advisory: the rendering layer uses it for emphasis, and the
/// server wholesale-replaces it whenever it flags a set.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    staged: Vec<String>,
    auto_found: Vec<String>,
}

impl SelectionState {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, derived from the staged count.
    pub fn phase(&self) -> SelectionPhase {
        match self.staged.len() {
            0 => SelectionPhase::Empty,
            SELECTION_SIZE.. => SelectionPhase::Full,
            _ => SelectionPhase::Partial,
        }
    }

    /// Ids currently staged, in staging order.
    pub fn staged(&self) -> &[String] {
        &self.staged
    }

    /// Returns true if the given card is staged.
    pub fn is_staged(&self, id: &str) -> bool {
        self.staged.iter().any(|staged| staged == id)
    }

    /// Ids of the server-flagged auto-found set.
    pub fn auto_found(&self) -> &[String] {
        &self.auto_found
    }

    /// Returns true if the given card belongs to the auto-found set.
    pub fn is_auto_found(&self, id: &str) -> bool {
        self.auto_found.iter().any(|found| found == id)
    }

    /// Toggles a card in or out of the staged selection.
    ///
    /// A staged id is always removed, from any phase. An unstaged id is added
    /// while fewer than three cards are staged; the addition that makes three
    /// emits exactly one [`Effect::Validate`] with the triple latched. An
    /// unstaged id against a full selection is a no-op.
    #[instrument(skip(self), fields(staged = self.staged.len()))]
    pub fn toggle(&mut self, id: &str) -> Vec<Effect> {
        // Deselection wins over capacity: a staged id comes out even mid-flight.
        if let Some(pos) = self.staged.iter().position(|staged| staged == id) {
            self.staged.remove(pos);
            debug!(id, remaining = self.staged.len(), "Card deselected");
            return Vec::new();
        }

        if self.staged.len() >= SELECTION_SIZE {
            debug!(id, "Selection saturated, toggle ignored");
            return Vec::new();
        }

        self.staged.push(id.to_string());
        debug!(id, staged = self.staged.len(), "Card staged");

        if self.staged.len() == SELECTION_SIZE {
            let triple = SelectionTriple([
                self.staged[0].clone(),
                self.staged[1].clone(),
                self.staged[2].clone(),
            ]);
            debug!(?triple, "Selection full, triggering validation");
            return vec![Effect::Validate(triple)];
        }

        Vec::new()
    }

    /// The staged triple, when the selection is full.
    pub fn triple(&self) -> Option<SelectionTriple> {
        if self.staged.len() == SELECTION_SIZE {
            Some(SelectionTriple([
                self.staged[0].clone(),
                self.staged[1].clone(),
                self.staged[2].clone(),
            ]))
        } else {
            None
        }
    }

    /// Resets the staged selection to empty. Auto-found flags are untouched.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        debug!(cleared = self.staged.len(), "Clearing staged selection");
        self.staged.clear();
    }

    /// Wholesale-replaces the auto-found set with the server's flags.
    #[instrument(skip(self, ids))]
    pub fn set_auto_found(&mut self, ids: Vec<String>) {
        debug!(count = ids.len(), "Replacing auto-found set");
        self.auto_found = ids;
    }
}
