// SPDX-License-Identifier: MPL-2.0
//! Permanent deletion of notifications.
//!
//! Deletes are best-effort: every id gets its own request, all requests run
//! concurrently, and one failure never prevents the others from completing.

use crate::application::port::{ApiError, SharedDirectory};
use crate::domain::notification::NotificationId;
use futures_util::future::join_all;

/// Outcome of a batch of permanent deletes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    /// Ids the backend confirmed as deleted.
    pub deleted: Vec<NotificationId>,
    /// Ids whose request failed, with the reason.
    pub failed: Vec<(NotificationId, ApiError)>,
}

impl DeletionReport {
    /// Total number of ids that were sent.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }
}

/// Sends one `DELETE` per id concurrently and waits for all of them.
pub async fn delete_all(directory: SharedDirectory, ids: Vec<NotificationId>) -> DeletionReport {
    let requests = ids.into_iter().map(|id| {
        let request = directory.delete(id);
        async move { (id, request.await) }
    });

    let mut report = DeletionReport::default();
    for (id, result) in join_all(requests).await {
        match result {
            Ok(()) => report.deleted.push(id),
            Err(error) => report.failed.push((id, error)),
        }
    }
    report
}
