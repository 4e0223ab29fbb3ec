//! Local mirror of a live collection.
//!
//! The mirror is only ever replaced wholesale by a snapshot. Connection trouble
//! changes the status but never the items, so the last good snapshot stays on
//! screen while the subscription reconnects or after it gives up.

use std::rc::Rc;

/// What the subscription reports to its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent<T> {
    /// The complete current content of the collection.
    Snapshot(Vec<T>),
    /// The connection dropped; reconnect attempt `attempt` is scheduled.
    Reconnecting { attempt: u32 },
    /// Retries are exhausted. No further events follow.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncStatus {
    /// Waiting for the first snapshot.
    #[default]
    Connecting,
    Live,
    Reconnecting {
        attempt: u32,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mirror<T> {
    items: Rc<Vec<T>>,
    status: SyncStatus,
    received_snapshot: bool,
}

impl<T> Default for Mirror<T> {
    fn default() -> Self {
        Self {
            items: Rc::new(Vec::new()),
            status: SyncStatus::Connecting,
            received_snapshot: false,
        }
    }
}

impl<T> Mirror<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one subscription event. Returns `true` when anything observable
    /// changed.
    pub fn apply(&mut self, event: SyncEvent<T>) -> bool {
        match event {
            SyncEvent::Snapshot(items) => {
                self.items = Rc::new(items);
                self.received_snapshot = true;
                self.status = SyncStatus::Live;
                true
            }
            SyncEvent::Reconnecting { attempt } => {
                self.set_status(SyncStatus::Reconnecting { attempt })
            }
            SyncEvent::Failed(reason) => self.set_status(SyncStatus::Failed { reason }),
        }
    }

    fn set_status(&mut self, status: SyncStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        true
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Shared handle on the current snapshot, cheap to pass down to views.
    pub fn shared(&self) -> Rc<Vec<T>> {
        Rc::clone(&self.items)
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    /// True until the first snapshot arrives, unless the subscription failed
    /// before that.
    pub fn is_loading(&self) -> bool {
        !self.received_snapshot && !matches!(self.status, SyncStatus::Failed { .. })
    }

    /// True when the items shown may lag behind the store.
    pub fn is_stale(&self) -> bool {
        self.received_snapshot
            && matches!(
                self.status,
                SyncStatus::Reconnecting { .. } | SyncStatus::Failed { .. }
            )
    }
}
