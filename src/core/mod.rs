//! Core types: symbols, RNG, configuration.
//!
//! These are the leaf building blocks shared by the deck builder,
//! the session and the layout helpers.

pub mod config;
pub mod rng;
pub mod symbol;

pub use config::{GameConfig, GridConfig, DEFAULT_FLIP_BACK_DELAY, DEFAULT_SYMBOLS};
pub use rng::GameRng;
pub use symbol::SymbolId;
