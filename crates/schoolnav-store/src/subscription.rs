//! Change subscriptions.
//!
//! Consumers that render navigation (a live sidebar, a route guard cache)
//! register a callback and are told which subject changed after every
//! successful write.

use schoolnav_models::{Email, Role};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Identifies the override that was just written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionChange {
    pub role: Role,
    pub subject: Email,
}

/// Token returned by [`crate::PermissionStore::subscribe`].
///
/// Hand it back to [`crate::PermissionStore::unsubscribe`] to stop receiving
/// changes. Dropping the token does not unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "keep the subscription to be able to unsubscribe"]
pub struct Subscription(u64);

type Callback = Arc<dyn Fn(&PermissionChange) + Send + Sync>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: AtomicU64,
    entries: Mutex<Vec<(Subscription, Callback)>>,
}

impl Subscribers {
    pub(crate) fn add(&self, callback: Callback) -> Subscription {
        let subscription = Subscription(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((subscription, callback));
        subscription
    }

    pub(crate) fn remove(&self, subscription: Subscription) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|(id, _)| *id != subscription);
        entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Invoke every live callback. The list is snapshotted first so a
    /// callback may subscribe or unsubscribe without deadlocking.
    pub(crate) fn notify(&self, change: &PermissionChange) {
        let snapshot: Vec<Callback> = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in snapshot {
            callback(change);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.len())
            .finish_non_exhaustive()
    }
}
