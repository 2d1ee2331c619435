//! Game session: turn state machine, scoring, deferred flip-back.
//!
//! ## Key Types
//!
//! - `Session`: Owns the cards, the turn state and the score
//! - `Selection`: Outcome of one `select_card` command
//! - `FlipBack`: Generation-keyed deferred task for a mismatched pair
//! - `SessionSnapshot`: Read-only view handed to renderers

pub mod flip_back;
pub mod snapshot;
pub mod state;

pub use flip_back::{FlipBack, Generation};
pub use snapshot::{CardView, SessionSnapshot};
pub use state::{Selection, Session, TurnState};
