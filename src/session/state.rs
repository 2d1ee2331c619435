//! The game session state machine.
//!
//! ## Turn States
//!
//! - `Idle`: no card pending; the next selection opens a turn
//! - `AwaitingResolution`: one card pending; the next distinct selection
//!   resolves the turn immediately
//!
//! ## Resolution
//!
//! A match marks both cards matched and scores a point. A mismatch returns
//! to `Idle` at once, leaving both cards face-up, and hands the caller a
//! `FlipBack` to apply once the delay has elapsed. The session keeps every
//! issued `FlipBack` until it is applied, and refuses tokens it does not
//! hold, so each one flips its pair down at most once.

use im::Vector;
use log::{debug, info, trace};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::flip_back::{FlipBack, Generation};
use super::snapshot::SessionSnapshot;
use crate::cards::{Card, DeckBuilder};
use crate::core::{GameConfig, GameRng, SymbolId};
use crate::error::{ConfigError, SessionError};

/// Session-level turn state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    #[default]
    Idle,
    AwaitingResolution { pending: usize },
}

impl TurnState {
    /// The pending card index, if a turn is open.
    #[must_use]
    pub fn pending(self) -> Option<usize> {
        match self {
            TurnState::Idle => None,
            TurnState::AwaitingResolution { pending } => Some(pending),
        }
    }
}

/// Result of `Session::select_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Selection {
    /// Card was already face-up or matched. Nothing changed.
    Ignored,
    /// First card of a turn; now pending.
    Pending { index: usize },
    /// Second card matched the pending one.
    Matched { first: usize, second: usize },
    /// Second card did not match. Apply the task after its delay.
    Mismatched(FlipBack),
}

impl Selection {
    /// The deferred flip-back, for mismatches.
    #[must_use]
    pub fn flip_back(&self) -> Option<FlipBack> {
        match self {
            Selection::Mismatched(task) => Some(*task),
            _ => None,
        }
    }
}

/// A single memory game: cards, turn state and score.
///
/// All mutation goes through `select_card`, `flip_back` and `reset`.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    cards: Vector<Card>,
    turn: TurnState,
    score: usize,
    generation: Generation,
    /// Issued flip-backs not yet applied.
    outstanding: FxHashSet<FlipBack>,
    next_serial: u64,
    rng: GameRng,
}

impl Session {
    /// Create a session and deal the first deck.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let cards = deal(&config.symbols, &mut rng);
        info!(
            "new session: {} pairs, seed {}",
            config.pair_count(),
            config.seed
        );

        Ok(Self {
            config,
            cards,
            turn: TurnState::Idle,
            score: 0,
            generation: Generation::default(),
            outstanding: FxHashSet::default(),
            next_serial: 0,
            rng,
        })
    }

    // === Commands ===

    /// Select (tap) the card at `index`.
    ///
    /// Face-up and matched cards are ignored, including the pending card
    /// itself, so a turn always compares two distinct cards.
    pub fn select_card(&mut self, index: usize) -> Result<Selection, SessionError> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?;

        if !card.is_selectable() {
            trace!("ignored selection of card {index}");
            return Ok(Selection::Ignored);
        }
        card.flip_up();

        match self.turn {
            TurnState::Idle => {
                debug!("card {index} pending");
                self.turn = TurnState::AwaitingResolution { pending: index };
                Ok(Selection::Pending { index })
            }
            TurnState::AwaitingResolution { pending } => {
                self.turn = TurnState::Idle;
                Ok(self.resolve(pending, index))
            }
        }
    }

    /// Apply a deferred flip-back.
    ///
    /// Returns true if any card was turned face-down. Tasks from an
    /// earlier generation, and tasks already applied, are ignored.
    pub fn flip_back(&mut self, task: &FlipBack) -> bool {
        if !task.is_current(self.generation) {
            trace!(
                "stale flip-back from {} ignored in {}",
                task.generation,
                self.generation
            );
            return false;
        }
        if !self.outstanding.remove(task) {
            trace!("flip-back #{} is not outstanding", task.serial);
            return false;
        }

        let mut changed = false;
        for index in task.indices() {
            if let Some(card) = self.cards.get_mut(index) {
                if card.is_flipped() {
                    changed |= card.flip_down();
                }
            }
        }
        if changed {
            debug!("flipped back cards {} and {}", task.first, task.second);
        }
        changed
    }

    /// Discard every card and the score, and deal a fresh deck.
    ///
    /// The generation advances, so any outstanding `FlipBack` becomes a no-op.
    pub fn reset(&mut self) {
        self.cards = deal(&self.config.symbols, &mut self.rng);
        self.turn = TurnState::Idle;
        self.score = 0;
        self.outstanding.clear();
        self.generation = self.generation.next();
        info!("session reset to {}", self.generation);
    }

    // === Queries ===

    /// Cards in grid order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card at `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Matched pairs so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Total pairs in the deck.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.config.pair_count()
    }

    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// The pending card of the current turn.
    #[must_use]
    pub fn pending(&self) -> Option<usize> {
        self.turn.pending()
    }

    /// Mismatched pairs still face-up, waiting for their flip-back.
    #[must_use]
    pub fn awaiting_flip_back(&self) -> usize {
        self.outstanding.len()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The symbol set this session deals from.
    #[must_use]
    pub fn symbols(&self) -> &[SymbolId] {
        &self.config.symbols
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True when every card is matched. An empty deck is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Snapshot for renderers. O(1): the card vector is shared.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            cards: self.cards.clone(),
            score: self.score,
            pairs: self.pairs(),
            complete: self.is_complete(),
            turn: self.turn,
            generation: self.generation,
        }
    }

    fn resolve(&mut self, first: usize, second: usize) -> Selection {
        if self.cards[first].symbol() == self.cards[second].symbol() {
            for index in [first, second] {
                if let Some(card) = self.cards.get_mut(index) {
                    card.mark_matched();
                }
            }
            self.score += 1;
            debug!("cards {first} and {second} matched, score {}", self.score);
            if self.is_complete() {
                info!("all {} pairs matched", self.score);
            }
            Selection::Matched { first, second }
        } else {
            debug!("cards {first} and {second} mismatched");
            let task = FlipBack::new(self.generation, first, second, self.config.flip_back_delay)
                .with_serial(self.next_serial);
            self.next_serial = self.next_serial.wrapping_add(1);
            self.outstanding.insert(task);
            Selection::Mismatched(task)
        }
    }
}

/// Each deal draws from its own fork so resets stay reproducible.
fn deal(symbols: &[SymbolId], rng: &mut GameRng) -> Vector<Card> {
    DeckBuilder::new(symbols).build(&mut rng.fork()).into()
}
