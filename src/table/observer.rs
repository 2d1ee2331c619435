//! Renderer notification.
//!
//! A `Table` calls its observer after every command and after every
//! flip-back that changed the cards. Observers only ever see snapshots.

use crate::session::SessionSnapshot;

/// Receives session state after each change.
pub trait StateObserver {
    fn on_change(&mut self, snapshot: &SessionSnapshot);
}

/// Observer that ignores every change.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StateObserver for NoopObserver {
    fn on_change(&mut self, _snapshot: &SessionSnapshot) {}
}

/// Observer that keeps every snapshot it is given.
///
/// Snapshots share card storage with the session, so keeping many is cheap.
#[derive(Clone, Debug, Default)]
pub struct SnapshotLog {
    snapshots: Vec<SessionSnapshot>,
}

impl SnapshotLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Most recent snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&SessionSnapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SessionSnapshot> {
        self.snapshots.iter()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl StateObserver for SnapshotLog {
    fn on_change(&mut self, snapshot: &SessionSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
}
