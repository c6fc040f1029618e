// SPDX-License-Identifier: MPL-2.0
//! Notification directory port definition.
//!
//! Backend contract consumed by the admin panel:
//!
//! | Operation        | Request                              | Response                 |
//! |------------------|--------------------------------------|--------------------------|
//! | `unread_count`   | `GET notifications/unread-count`     | `{ count }`              |
//! | `list`           | `GET notifications?top=N`            | `{ items: [...] }`       |
//! | `mark_read`      | `PUT notifications/{id}/read`        | empty                    |
//! | `mark_all_read`  | `PUT notifications/read-all`         | empty                    |
//! | `delete`         | `DELETE notifications/{id}`          | empty                    |
//!
//! `list` returns the newest `N` items. There is no offset: callers ask for a
//! growing prefix and replace their copy wholesale.

use crate::domain::notification::{NotificationId, NotificationItem};
use futures_util::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// ApiError
// =============================================================================

/// Errors that can occur when talking to the notification backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the credentials (HTTP 401).
    Unauthorized,

    /// The resource does not exist (HTTP 404).
    NotFound,

    /// Any other non-success HTTP status.
    Status(u16),

    /// The request never completed (connection, timeout, TLS).
    Transport(String),

    /// The response body did not match the expected shape.
    Decode(String),

    /// The client could not be built from the configuration.
    InvalidConfig(String),
}

impl ApiError {
    /// Returns the i18n key of the message shown for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "error-api-unauthorized",
            ApiError::NotFound => "error-api-not-found",
            ApiError::Status(_) => "error-api-status",
            ApiError::Transport(_) => "error-api-transport",
            ApiError::Decode(_) => "error-api-decode",
            ApiError::InvalidConfig(_) => "error-api-invalid-config",
        }
    }

    /// Returns `true` when the error means "no session or no data".
    ///
    /// A feed load failing this way yields an empty, exhausted feed instead
    /// of an error message.
    #[must_use]
    pub fn is_no_session(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::NotFound)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "not authenticated"),
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Status(code) => write!(f, "unexpected status {code}"),
            ApiError::Transport(msg) => write!(f, "request failed: {msg}"),
            ApiError::Decode(msg) => write!(f, "invalid response: {msg}"),
            ApiError::InvalidConfig(msg) => write!(f, "invalid API configuration: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result alias for directory operations.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// NotificationDirectory Trait
// =============================================================================

/// Port for the notification backend.
///
/// Implementations attach the caller's authorization to every request.
///
/// # Example
///
/// ```ignore
/// use front_desk::application::port::SharedDirectory;
///
/// async fn newest(directory: SharedDirectory) -> usize {
///     directory.list(30).await.map(|items| items.len()).unwrap_or(0)
/// }
/// ```
pub trait NotificationDirectory: Send + Sync + fmt::Debug {
    /// Fetches the number of unread notifications.
    fn unread_count(&self) -> BoxFuture<'static, ApiResult<u32>>;

    /// Fetches the newest `top` notifications, newest first.
    fn list(&self, top: u32) -> BoxFuture<'static, ApiResult<Vec<NotificationItem>>>;

    /// Marks one notification as read.
    fn mark_read(&self, id: NotificationId) -> BoxFuture<'static, ApiResult<()>>;

    /// Marks every notification as read.
    fn mark_all_read(&self) -> BoxFuture<'static, ApiResult<()>>;

    /// Permanently deletes one notification.
    fn delete(&self, id: NotificationId) -> BoxFuture<'static, ApiResult<()>>;
}

/// Directory shared between the bell, the history panel and background tasks.
pub type SharedDirectory = Arc<dyn NotificationDirectory>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_session_covers_401_and_404_only() {
        assert!(ApiError::Unauthorized.is_no_session());
        assert!(ApiError::NotFound.is_no_session());
        assert!(!ApiError::Status(500).is_no_session());
        assert!(!ApiError::Transport("reset".into()).is_no_session());
        assert!(!ApiError::Decode("eof".into()).is_no_session());
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let errors = [
            ApiError::Unauthorized,
            ApiError::NotFound,
            ApiError::Status(500),
            ApiError::Transport(String::new()),
            ApiError::Decode(String::new()),
            ApiError::InvalidConfig(String::new()),
        ];
        let mut keys: Vec<_> = errors.iter().map(ApiError::i18n_key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), errors.len());
    }

    #[test]
    fn display_includes_status_code() {
        assert_eq!(ApiError::Status(503).to_string(), "unexpected status 503");
    }
}
