//! Card system: tiles and the deck builder.
//!
//! ## Key Types
//!
//! - `Card`: One tile with a symbol, flip state and match state
//! - `DeckBuilder`: Produces a shuffled deck with every symbol paired

pub mod card;
pub mod deck;

pub use card::Card;
pub use deck::DeckBuilder;
