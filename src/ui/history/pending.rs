// SPDX-License-Identifier: MPL-2.0
//! Soft deletions waiting for their undo window to elapse.
//!
//! Each entry owns a snapshot of the removed item so that an undo can restore
//! it exactly. Entries leave the set in exactly one of three ways: undo,
//! expiry sweep, or drain on close. Every path removes the entry before the
//! caller issues a delete request, so an id is committed at most once.

use crate::config::UNDO_WINDOW_MS;
use crate::domain::notification::{NotificationId, NotificationItem};
use crate::ui::toasts::{Manager, UndoToast};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Grace period between a soft delete and its commit.
pub const UNDO_WINDOW: Duration = Duration::from_millis(UNDO_WINDOW_MS);

/// A soft-deleted item not yet permanently deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub item: NotificationItem,
    pub created_at: Instant,
    pub expires_at: Instant,
}

impl PendingDeletion {
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Pending deletions and the undo toasts mirroring them.
#[derive(Debug, Default)]
pub struct SoftDeletes {
    entries: HashMap<NotificationId, PendingDeletion>,
    toasts: Manager,
}

impl SoftDeletes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a soft delete of `item` at `now`.
    ///
    /// An existing entry for the same id is replaced along with its toast,
    /// restarting the undo window.
    pub fn insert(&mut self, item: NotificationItem, label: impl Into<String>, now: Instant) {
        let id = item.id;
        let expires_at = now + UNDO_WINDOW;
        self.entries.insert(
            id,
            PendingDeletion {
                item,
                created_at: now,
                expires_at,
            },
        );
        self.toasts.push(UndoToast::new(id, label, expires_at));
    }

    /// Cancels the pending deletion of `id` and returns the item snapshot.
    ///
    /// Returns `None` when nothing is pending for `id` or its window has
    /// already elapsed; an elapsed entry is left for the next sweep.
    pub fn undo(&mut self, id: NotificationId, now: Instant) -> Option<NotificationItem> {
        if self.entries.get(&id)?.is_expired(now) {
            return None;
        }
        self.toasts.remove(id);
        self.entries.remove(&id).map(|pending| pending.item)
    }

    /// Removes every expired entry and returns the ids to commit.
    ///
    /// Ids are returned in ascending order.
    pub fn sweep(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut expired: Vec<NotificationId> = self
            .entries
            .values()
            .filter(|pending| pending.is_expired(now))
            .map(|pending| pending.item.id)
            .collect();
        expired.sort_unstable();

        for id in &expired {
            self.entries.remove(id);
            self.toasts.remove(*id);
        }
        expired
    }

    /// Removes every entry regardless of expiry and returns the ids to commit.
    pub fn drain_all(&mut self) -> Vec<NotificationId> {
        let mut ids: Vec<NotificationId> = self.entries.drain().map(|(id, _)| id).collect();
        ids.sort_unstable();
        self.toasts.clear();
        ids
    }

    /// Drops every entry without committing anything.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.toasts.clear();
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&PendingDeletion> {
        self.entries.get(&id)
    }

    /// Pending ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        let mut ids: Vec<NotificationId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn toasts(&self) -> &Manager {
        &self.toasts
    }
}
