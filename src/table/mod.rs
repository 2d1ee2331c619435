//! Host-facing driver: session + scheduler + observer.
//!
//! A `Table` is what a presentation layer talks to. It forwards taps to the
//! session, queues mismatch flip-backs on its scheduler, fires them as the
//! host reports elapsed time, and pushes a snapshot to the observer after
//! each change.
//!
//! ```
//! use std::time::Duration;
//! use train_your_memory::core::GameConfig;
//! use train_your_memory::table::{SnapshotLog, Table};
//!
//! let config = GameConfig::new(["a", "b"]).with_seed(1);
//! let mut table = Table::new(config, SnapshotLog::new()).unwrap();
//!
//! let _ = table.select_card(0).unwrap();
//! table.advance(Duration::from_secs(1));
//! table.reset();
//!
//! assert_eq!(table.observer().len(), 2);
//! assert_eq!(table.session().score(), 0);
//! ```

pub mod observer;

pub use observer::{NoopObserver, SnapshotLog, StateObserver};

use std::time::Duration;

use log::debug;

use crate::core::GameConfig;
use crate::error::{ConfigError, SessionError};
use crate::scheduler::Scheduler;
use crate::session::{FlipBack, Selection, Session, SessionSnapshot};

/// A running game wired to a renderer.
#[derive(Debug)]
pub struct Table<O: StateObserver = NoopObserver> {
    session: Session,
    scheduler: Scheduler,
    observer: O,
}

impl<O: StateObserver> Table<O> {
    /// Deal a new game.
    pub fn new(config: GameConfig, observer: O) -> Result<Self, ConfigError> {
        Ok(Self {
            session: Session::new(config)?,
            scheduler: Scheduler::new(),
            observer,
        })
    }

    /// Select the card at `index`, scheduling a flip-back on mismatch.
    ///
    /// Out-of-range indices are returned as errors and do not notify.
    pub fn select_card(&mut self, index: usize) -> Result<Selection, SessionError> {
        let selection = self.session.select_card(index)?;
        if let Some(task) = selection.flip_back() {
            self.scheduler.schedule(task);
        }
        self.notify();
        Ok(selection)
    }

    /// Report elapsed time. Fires due flip-backs; returns how many changed state.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let mut applied = 0;
        for task in self.scheduler.advance(elapsed) {
            if self.apply_flip_back(&task) {
                applied += 1;
            }
        }
        applied
    }

    /// Apply a flip-back directly, for hosts that run their own timers.
    ///
    /// The task is taken off the scheduler so it cannot fire again. Stale
    /// and already-applied tasks are ignored.
    pub fn apply_flip_back(&mut self, task: &FlipBack) -> bool {
        let _ = self.scheduler.cancel(task);
        let changed = self.session.flip_back(task);
        if changed {
            self.notify();
        }
        changed
    }

    /// Start over with a fresh deal, cancelling pending flip-backs.
    pub fn reset(&mut self) {
        let cancelled = self.scheduler.cancel_all();
        if cancelled > 0 {
            debug!("reset cancelled {cancelled} pending flip-backs");
        }
        self.session.reset();
        self.notify();
    }

    // === Accessors ===

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    fn notify(&mut self) {
        let snapshot = self.session.snapshot();
        self.observer.on_change(&snapshot);
    }
}
