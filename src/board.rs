//! Authoritative board storage with whole-board resync.

use crate::card::{BoardSnapshot, Card};
use tracing::{debug, instrument};

/// Number of cards in the base grid.
pub const GRID_CARDS: usize = 12;

/// Cards per grid row.
pub const GRID_WIDTH: usize = 4;

/// Holds the authoritative board and replaces it atomically on every
/// validation exchange.
///
/// The server is the sole source of truth for hidden card identity, so it
/// returns the complete board on every call rather than a diff. Readers must
/// treat every card as invalidated across a validation round trip; nothing
/// here caches identities between replacements.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    cards: BoardSnapshot,
}

impl BoardStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with an already-provisioned board.
    #[instrument(skip(cards), fields(count = cards.len()))]
    pub fn with_board(cards: BoardSnapshot) -> Self {
        debug!("Seeding board store");
        Self { cards }
    }

    /// Atomically substitutes the entire board. There is no partial update path.
    #[instrument(skip(self, cards), fields(old = self.cards.len(), new = cards.len()))]
    pub fn replace(&mut self, cards: BoardSnapshot) {
        debug!("Replacing board");
        self.cards = cards;
    }

    /// All cards in server order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards on the board.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if no board has been provisioned yet.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The base grid: the first twelve cards, in order.
    pub fn grid(&self) -> &[Card] {
        let end = self.cards.len().min(GRID_CARDS);
        &self.cards[..end]
    }

    /// Grid rows of four, for the renderer's layout contract.
    pub fn grid_rows(&self) -> impl Iterator<Item = &[Card]> {
        self.grid().chunks(GRID_WIDTH)
    }

    /// Extra cards beyond the base grid, appended when the base twelve hold
    /// no valid set. Empty for a twelve-card board.
    pub fn extras(&self) -> &[Card] {
        if self.cards.len() > GRID_CARDS {
            &self.cards[GRID_CARDS..]
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardImage;

    fn card(id: &str) -> Card {
        Card::new(id.to_string(), CardImage::new(vec![1, 2, 3]))
    }

    fn board(count: usize) -> BoardSnapshot {
        (0..count).map(|i| card(&format!("c{i}"))).collect()
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut store = BoardStore::with_board(board(12));
        store.replace(board(15));
        assert_eq!(store.len(), 15);
        assert_eq!(store.cards()[0].id, "c0");
    }

    #[test]
    fn test_grid_and_extras_split_at_twelve() {
        let store = BoardStore::with_board(board(15));
        assert_eq!(store.grid().len(), 12);
        assert_eq!(store.extras().len(), 3);
        assert_eq!(store.extras()[0].id, "c12");
    }

    #[test]
    fn test_no_extras_for_base_board() {
        let store = BoardStore::with_board(board(12));
        assert!(store.extras().is_empty());
    }

    #[test]
    fn test_grid_rows_are_four_wide() {
        let store = BoardStore::with_board(board(12));
        let rows: Vec<_> = store.grid_rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_order_preserved() {
        let store = BoardStore::with_board(board(15));
        let ids: Vec<_> = store.cards().iter().map(|c| c.id.as_str()).collect();
        let expected: Vec<String> = (0..15).map(|i| format!("c{i}")).collect();
        assert_eq!(ids, expected);
    }
}
