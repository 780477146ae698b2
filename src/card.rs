//! Wire-level card and board types shared with the validation server.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Raw bytes of a card's vector-graphics document.
///
/// The server ships images as `{"data": [byte, ...]}`. Decoding for display is
/// the renderer's job; the core only carries the bytes through intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct CardImage {
    /// Raw image bytes.
    pub data: Vec<u8>,
}

/// A single card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Card {
    /// Card identifier, unique within one board snapshot.
    #[serde(rename = "_id")]
    pub id: String,
    /// Self-contained vector-graphics document for this card.
    pub image: CardImage,
}

/// The complete, ordered sequence of visible cards at a point in time.
///
/// Order encodes grid position and must be preserved end-to-end.
pub type BoardSnapshot = Vec<Card>;
