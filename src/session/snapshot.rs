//! Read-only session snapshots for renderers.
//!
//! A `SessionSnapshot` shares the session's card vector (an `im::Vector`,
//! so taking one is O(1)) and hides the symbol of every face-down card
//! when viewed or serialized.

use im::Vector;
use serde::{Serialize, Serializer};

use super::flip_back::Generation;
use super::state::TurnState;
use crate::cards::Card;
use crate::core::SymbolId;

/// What a renderer may see of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardView<'a> {
    /// `None` while the card is face-down.
    pub symbol: Option<&'a SymbolId>,
    pub flipped: bool,
    pub matched: bool,
}

impl<'a> From<&'a Card> for CardView<'a> {
    fn from(card: &'a Card) -> Self {
        Self {
            symbol: card.visible_symbol(),
            flipped: card.is_flipped(),
            matched: card.is_matched(),
        }
    }
}

/// Session state as seen after a command completes.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    #[serde(serialize_with = "serialize_views")]
    pub(crate) cards: Vector<Card>,
    pub score: usize,
    pub pairs: usize,
    pub complete: bool,
    pub turn: TurnState,
    pub generation: Generation,
}

fn serialize_views<S: Serializer>(cards: &Vector<Card>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(cards.iter().map(CardView::from))
}

impl SessionSnapshot {
    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// View of the card at `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<CardView<'_>> {
        self.cards.get(index).map(CardView::from)
    }

    /// Views of every card in grid order.
    pub fn views(&self) -> impl Iterator<Item = CardView<'_>> {
        self.cards.iter().map(CardView::from)
    }

    /// The pending card of the current turn, if any.
    #[must_use]
    pub fn pending(&self) -> Option<usize> {
        self.turn.pending()
    }
}
