// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit and integration tests.
//!
//! [`InMemoryDirectory`] is a scriptable [`NotificationDirectory`] that keeps
//! its notifications in memory and records every call it receives.

use crate::application::port::{ApiError, ApiResult, NotificationDirectory};
use crate::domain::notification::{NotificationId, NotificationItem, NotificationKind};
use futures_util::future::{ready, BoxFuture};
use futures_util::FutureExt;
use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard};

/// A call received by [`InMemoryDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCall {
    UnreadCount,
    List { top: u32 },
    MarkRead(NotificationId),
    MarkAllRead,
    Delete(NotificationId),
}

#[derive(Debug, Default)]
struct State {
    items: Vec<NotificationItem>,
    calls: Vec<DirectoryCall>,
    unread_script: VecDeque<ApiResult<u32>>,
    list_error: Option<ApiError>,
    failing_deletes: HashSet<NotificationId>,
}

/// In-memory notification backend.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    state: Mutex<State>,
}

impl InMemoryDirectory {
    #[must_use]
    pub fn with_items(items: Vec<NotificationItem>) -> Self {
        let directory = Self::default();
        directory.lock().items = items;
        directory
    }

    /// Queues responses for the next `unread_count` calls.
    ///
    /// Once the script is empty, the number of unread items is returned.
    pub fn script_unread(&self, responses: impl IntoIterator<Item = ApiResult<u32>>) {
        self.lock().unread_script.extend(responses);
    }

    /// Makes every `list` call fail with `error` (or succeed again with `None`).
    pub fn fail_list_with(&self, error: Option<ApiError>) {
        self.lock().list_error = error;
    }

    /// Makes `delete` fail for `id`.
    pub fn fail_delete_of(&self, id: NotificationId) {
        self.lock().failing_deletes.insert(id);
    }

    #[must_use]
    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.lock().calls.clone()
    }

    /// Number of `delete` calls received for `id`.
    #[must_use]
    pub fn delete_calls_for(&self, id: NotificationId) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| **call == DirectoryCall::Delete(id))
            .count()
    }

    #[must_use]
    pub fn remaining_ids(&self) -> Vec<NotificationId> {
        self.lock().items.iter().map(|item| item.id).collect()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panicking test must not poison the fake for the assertions that follow.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl NotificationDirectory for InMemoryDirectory {
    fn unread_count(&self) -> BoxFuture<'static, ApiResult<u32>> {
        let mut state = self.lock();
        state.calls.push(DirectoryCall::UnreadCount);
        let result = state.unread_script.pop_front().unwrap_or_else(|| {
            let unread = state.items.iter().filter(|item| !item.is_read).count();
            Ok(u32::try_from(unread).unwrap_or(u32::MAX))
        });
        ready(result).boxed()
    }

    fn list(&self, top: u32) -> BoxFuture<'static, ApiResult<Vec<NotificationItem>>> {
        let mut state = self.lock();
        state.calls.push(DirectoryCall::List { top });
        let result = match &state.list_error {
            Some(error) => Err(error.clone()),
            None => Ok(state.items.iter().take(top as usize).cloned().collect()),
        };
        ready(result).boxed()
    }

    fn mark_read(&self, id: NotificationId) -> BoxFuture<'static, ApiResult<()>> {
        let mut state = self.lock();
        state.calls.push(DirectoryCall::MarkRead(id));
        let result = match state.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.is_read = true;
                Ok(())
            }
            None => Err(ApiError::NotFound),
        };
        ready(result).boxed()
    }

    fn mark_all_read(&self) -> BoxFuture<'static, ApiResult<()>> {
        let mut state = self.lock();
        state.calls.push(DirectoryCall::MarkAllRead);
        state.items.iter_mut().for_each(|item| item.is_read = true);
        ready(Ok(())).boxed()
    }

    fn delete(&self, id: NotificationId) -> BoxFuture<'static, ApiResult<()>> {
        let mut state = self.lock();
        state.calls.push(DirectoryCall::Delete(id));
        let result = if state.failing_deletes.contains(&id) {
            Err(ApiError::Status(500))
        } else {
            state.items.retain(|item| item.id != id);
            Ok(())
        };
        ready(result).boxed()
    }
}

/// Builds an unread booking notification with the given id.
#[must_use]
pub fn sample_item(id: u64) -> NotificationItem {
    NotificationItem {
        id: NotificationId::new(id),
        kind: NotificationKind::BookingCreated,
        message: format!("Booking #{id} confirmed"),
        is_read: false,
        sent_at: "2024-05-01T10:00:00Z".to_string(),
    }
}

/// Builds `count` sample items with ids `count..=1` (newest first).
#[must_use]
pub fn sample_items(count: u64) -> Vec<NotificationItem> {
    (1..=count).rev().map(sample_item).collect()
}
