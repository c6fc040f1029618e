// SPDX-License-Identifier: MPL-2.0
//! Directory used when no HTTP client could be configured.
//!
//! Every call fails with the configuration error, so the history shows it
//! inline and the bell keeps retrying harmlessly.

use crate::application::port::{ApiError, ApiResult, NotificationDirectory};
use crate::domain::notification::{NotificationId, NotificationItem};
use futures_util::future::{ready, BoxFuture};
use futures_util::FutureExt;

#[derive(Debug, Clone)]
pub struct OfflineDirectory {
    reason: ApiError,
}

impl OfflineDirectory {
    #[must_use]
    pub fn new(reason: ApiError) -> Self {
        Self { reason }
    }

    fn fail<T: Send + 'static>(&self) -> BoxFuture<'static, ApiResult<T>> {
        ready(Err(self.reason.clone())).boxed()
    }
}

impl NotificationDirectory for OfflineDirectory {
    fn unread_count(&self) -> BoxFuture<'static, ApiResult<u32>> {
        self.fail()
    }

    fn list(&self, _top: u32) -> BoxFuture<'static, ApiResult<Vec<NotificationItem>>> {
        self.fail()
    }

    fn mark_read(&self, _id: NotificationId) -> BoxFuture<'static, ApiResult<()>> {
        self.fail()
    }

    fn mark_all_read(&self) -> BoxFuture<'static, ApiResult<()>> {
        self.fail()
    }

    fn delete(&self, _id: NotificationId) -> BoxFuture<'static, ApiResult<()>> {
        self.fail()
    }
}
