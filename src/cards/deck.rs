//! Deck builder - paired, shuffled card sequences.
//!
//! Given N distinct symbols, produces 2N face-down cards (two per symbol)
//! in a uniformly random order.
//!
//! ```
//! use train_your_memory::cards::DeckBuilder;
//! use train_your_memory::core::{GameRng, SymbolId};
//!
//! let symbols = vec![SymbolId::new("a"), SymbolId::new("b")];
//! let deck = DeckBuilder::new(&symbols).build(&mut GameRng::new(1));
//!
//! assert_eq!(deck.len(), 4);
//! assert_eq!(deck.iter().filter(|c| c.symbol().as_str() == "a").count(), 2);
//! ```

use super::Card;
use crate::core::{GameRng, SymbolId};

/// Builds a paired deck from a symbol set.
///
/// Symbols must be distinct. The builder does not check this; duplicate
/// symbols would yield four cards sharing one symbol. Validate with
/// `GameConfig::validate` at the boundary.
#[derive(Clone, Copy, Debug)]
pub struct DeckBuilder<'a> {
    symbols: &'a [SymbolId],
}

impl<'a> DeckBuilder<'a> {
    #[must_use]
    pub fn new(symbols: &'a [SymbolId]) -> Self {
        Self { symbols }
    }

    /// Number of cards `build` will produce.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.symbols.len() * 2
    }

    /// Build and shuffle the deck.
    ///
    /// The only side effect is advancing `rng`.
    #[must_use]
    pub fn build(&self, rng: &mut GameRng) -> Vec<Card> {
        debug_assert!(
            {
                let mut sorted: Vec<_> = self.symbols.iter().collect();
                sorted.sort();
                sorted.windows(2).all(|w| w[0] != w[1])
            },
            "deck symbols must be distinct"
        );

        let mut deck: Vec<Card> = self
            .symbols
            .iter()
            .flat_map(|symbol| [Card::new(symbol.clone()), Card::new(symbol.clone())])
            .collect();
        rng.shuffle(&mut deck);
        deck
    }
}
