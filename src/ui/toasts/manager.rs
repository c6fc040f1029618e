// SPDX-License-Identifier: MPL-2.0
//! Undo toast queue.
//!
//! The `Manager` limits the number of visible toasts and keeps the rest in a
//! FIFO queue, promoting them as visible toasts go away.

use super::undo_toast::UndoToast;
use crate::config::MAX_VISIBLE_TOASTS;
use crate::domain::notification::NotificationId;
use std::collections::VecDeque;

/// Holds at most one toast per notification id.
#[derive(Debug, Default, Clone)]
pub struct Manager {
    /// Currently visible toasts (newest first).
    visible: VecDeque<UndoToast>,
    /// Queued toasts waiting to be displayed.
    queue: VecDeque<UndoToast>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast, replacing any toast with the same id in place.
    pub fn push(&mut self, toast: UndoToast) {
        if let Some(existing) = self
            .visible
            .iter_mut()
            .chain(self.queue.iter_mut())
            .find(|t| t.id() == toast.id())
        {
            *existing = toast;
            return;
        }

        if self.visible.len() < MAX_VISIBLE_TOASTS {
            self.visible.push_front(toast);
        } else {
            self.queue.push_back(toast);
        }
    }

    /// Removes the toast for `id`.
    ///
    /// Returns `true` if a toast was found and removed.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|t| t.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|t| t.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    pub fn visible(&self) -> impl Iterator<Item = &UndoToast> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.visible
            .iter()
            .chain(self.queue.iter())
            .any(|t| t.id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE_TOASTS {
            match self.queue.pop_front() {
                Some(toast) => self.visible.push_back(toast),
                None => break,
            }
        }
    }
}
