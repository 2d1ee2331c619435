//! Deferred flip-back tasks.
//!
//! A mismatch leaves both cards face-up for a delay. Rather than capturing
//! the session in a timer closure, the session hands back a `FlipBack`
//! value keyed to its current `Generation`. The host (or `Scheduler`)
//! applies it later with `Session::flip_back`; after a reset the generation
//! has moved on and the stale task does nothing.
//!
//! Tokens are single-use. The session remembers which ones are outstanding,
//! and each carries a per-session `serial`, so replaying a copy after it was
//! applied never touches cards a later turn has turned up.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session generation. Advances on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// A pending flip-back of one mismatched pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlipBack {
    /// Session generation that produced the mismatch.
    pub generation: Generation,
    /// Per-session mismatch counter; distinguishes repeat mismatches of the
    /// same pair.
    pub serial: u64,
    /// The pending card of the turn.
    pub first: usize,
    /// The second selection of the turn.
    pub second: usize,
    /// How long the pair stays face-up.
    pub delay: Duration,
}

impl FlipBack {
    #[must_use]
    pub fn new(generation: Generation, first: usize, second: usize, delay: Duration) -> Self {
        Self {
            generation,
            serial: 0,
            first,
            second,
            delay,
        }
    }

    #[must_use]
    pub fn with_serial(mut self, serial: u64) -> Self {
        self.serial = serial;
        self
    }

    /// Both card indices.
    #[must_use]
    pub fn indices(&self) -> [usize; 2] {
        [self.first, self.second]
    }

    /// Does this task belong to the given generation?
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_next() {
        let g = Generation::default();
        assert_eq!(g.raw(), 0);
        assert_eq!(g.next(), Generation::new(1));
        assert_eq!(Generation::new(u64::MAX).next(), Generation::new(0));
    }

    #[test]
    fn test_is_current() {
        let task = FlipBack::new(Generation::new(3), 0, 5, Duration::from_secs(1));

        assert!(task.is_current(Generation::new(3)));
        assert!(!task.is_current(Generation::new(4)));
        assert_eq!(task.indices(), [0, 5]);
    }

    #[test]
    fn test_serial_distinguishes_tasks() {
        let task = FlipBack::new(Generation::new(0), 1, 2, Duration::from_secs(1));

        assert_eq!(task.serial, 0);
        assert_ne!(task, task.with_serial(1));
        assert_eq!(task.with_serial(1).indices(), task.indices());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Generation::new(2)), "Gen(2)");
    }
}
