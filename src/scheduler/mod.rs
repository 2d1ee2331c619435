//! Virtual-time scheduler for deferred flip-backs.
//!
//! The crate never sleeps or spawns threads. The host's event loop calls
//! `advance` with the time that has passed, and gets back every task whose
//! delay has elapsed, in due order.
//!
//! ```
//! use std::time::Duration;
//! use train_your_memory::scheduler::Scheduler;
//! use train_your_memory::session::{FlipBack, Generation};
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule(FlipBack::new(Generation::default(), 0, 1, Duration::from_secs(1)));
//!
//! assert!(scheduler.advance(Duration::from_millis(600)).is_empty());
//! assert_eq!(scheduler.advance(Duration::from_millis(400)).len(), 1);
//! ```

use std::time::Duration;

use smallvec::SmallVec;

use crate::session::FlipBack;

/// Tasks fired by one `advance` call. Usually zero or one.
pub type Fired = SmallVec<[FlipBack; 2]>;

#[derive(Clone, Debug)]
struct Entry {
    due: Duration,
    task: FlipBack,
}

/// Single-threaded one-shot timer queue on a virtual clock.
///
/// Tasks with the same due time fire in the order they were scheduled.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    /// Sorted by due time; ties keep insertion order.
    queue: Vec<Entry>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// When the next task fires, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.first().map(|e| e.due)
    }

    /// Queue a task to fire after its delay.
    pub fn schedule(&mut self, task: FlipBack) {
        let due = self.now.saturating_add(task.delay);
        let at = self.queue.partition_point(|e| e.due <= due);
        self.queue.insert(at, Entry { due, task });
    }

    /// Move the clock forward and take every task now due.
    pub fn advance(&mut self, elapsed: Duration) -> Fired {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;
        let split = self.queue.partition_point(|e| e.due <= now);
        self.queue.drain(..split).map(|e| e.task).collect()
    }

    /// Drop one scheduled task. Returns false if it was not queued.
    pub fn cancel(&mut self, task: &FlipBack) -> bool {
        match self.queue.iter().position(|e| e.task == *task) {
            Some(at) => {
                self.queue.remove(at);
                true
            }
            None => false,
        }
    }

    /// Drop every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }
}
