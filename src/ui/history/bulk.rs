// SPDX-License-Identifier: MPL-2.0
//! Confirmation prompt guarding "delete all".

use crate::domain::notification::NotificationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulkDelete {
    #[default]
    Closed,
    Confirming,
}

impl BulkDelete {
    /// Opens the prompt. Returns `false` if it was already open.
    pub fn request(&mut self) -> bool {
        let opened = *self == Self::Closed;
        *self = Self::Confirming;
        opened
    }

    /// Dismisses the prompt without side effects.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_confirming();
        *self = Self::Closed;
        was_open
    }

    /// Closes the prompt and reports whether a confirmation was pending.
    ///
    /// The caller performs the deletion only when this returns `true`.
    pub fn confirm(&mut self) -> bool {
        self.cancel()
    }

    #[must_use]
    pub fn is_confirming(&self) -> bool {
        *self == Self::Confirming
    }
}

/// Ids a confirmed bulk delete must commit: the visible rows plus rows still
/// waiting in their undo window, without duplicates.
#[must_use]
pub fn targets(visible: Vec<NotificationId>, pending: Vec<NotificationId>) -> Vec<NotificationId> {
    let mut ids = visible;
    for id in pending {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}
