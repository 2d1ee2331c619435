//! Card tiles - runtime card state.
//!
//! A `Card` is one tile on the table. Its lifecycle is
//! `FaceDown -> FaceUp -> Matched`, or back to `FaceDown` after a mismatch.
//! Mutation is crate-private so only the session can drive it.

use serde::{Deserialize, Serialize};

use crate::core::SymbolId;

/// A card tile.
///
/// ## Invariant
///
/// A matched card is always flipped. `flip_down` refuses to touch a
/// matched card, so no code path can break this.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    symbol: SymbolId,
    flipped: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(symbol: SymbolId) -> Self {
        Self {
            symbol,
            flipped: false,
            matched: false,
        }
    }

    /// The pictured symbol.
    #[must_use]
    pub fn symbol(&self) -> &SymbolId {
        &self.symbol
    }

    /// Is the card face-up?
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Has this card's pair been confirmed?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Can this card be selected? Face-down cards only.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// The symbol if face-up, `None` while hidden.
    #[must_use]
    pub fn visible_symbol(&self) -> Option<&SymbolId> {
        self.flipped.then_some(&self.symbol)
    }

    pub(crate) fn flip_up(&mut self) {
        self.flipped = true;
    }

    /// Turn the card face-down. Returns false for matched cards, which stay up.
    pub(crate) fn flip_down(&mut self) -> bool {
        if self.matched {
            return false;
        }
        self.flipped = false;
        true
    }

    pub(crate) fn mark_matched(&mut self) {
        self.flipped = true;
        self.matched = true;
    }
}
