//! # train-your-memory
//!
//! Core logic for a memory-matching ("pairs") game: a grid of face-down
//! cards, two reveals per turn, matched pairs stay up and score a point,
//! mismatched pairs flip back after a delay.
//!
//! ## Design Principles
//!
//! 1. **No UI**: Rendering, animation and input devices are external. The
//!    core takes commands and hands out snapshots.
//!
//! 2. **No ambient state**: A `Session` owns every card and the score.
//!    Presentation layers read it through snapshots.
//!
//! 3. **Time is a value**: A mismatch returns a generation-keyed `FlipBack`
//!    instead of capturing the session in a timer closure, so a reset can
//!    never be undone by a late callback.
//!
//! ## Modules
//!
//! - `core`: Symbols, deterministic RNG, configuration
//! - `cards`: Card tiles and the deck builder
//! - `session`: Turn state machine, scoring, flip-back tasks, snapshots
//! - `scheduler`: Virtual-time queue for pending flip-backs
//! - `table`: Host-facing driver with renderer notification
//! - `layout`: Grid geometry and tap hit-testing
//! - `error`: Error types

pub mod cards;
pub mod core;
pub mod error;
pub mod layout;
pub mod scheduler;
pub mod session;
pub mod table;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GridConfig, SymbolId};

pub use crate::cards::{Card, DeckBuilder};

pub use crate::session::{
    CardView, FlipBack, Generation, Selection, Session, SessionSnapshot, TurnState,
};

pub use crate::scheduler::Scheduler;

pub use crate::table::{NoopObserver, SnapshotLog, StateObserver, Table};

pub use crate::layout::{GridLayout, Rect};

pub use crate::error::{ConfigError, SessionError};
