// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::{ErrorType, WarningType};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // History Panel
    // ==========================================================================
    /// Open the notification history panel.
    OpenHistory,

    /// Close the notification history panel.
    CloseHistory,

    /// Request the next page of notifications.
    LoadMore,

    /// Explicitly reload the feed.
    Reload,

    // ==========================================================================
    // Deletion
    // ==========================================================================
    /// Soft-delete a single notification.
    SoftDelete {
        /// Notification id.
        id: u64,
    },

    /// Restore a soft-deleted notification.
    Undo {
        /// Notification id.
        id: u64,
    },

    /// Open the bulk-delete confirmation prompt.
    RequestBulkDelete,

    /// Confirm bulk deletion.
    ConfirmBulkDelete {
        /// Number of ids sent for deletion.
        count: usize,
    },

    /// Dismiss the bulk-delete prompt.
    CancelBulkDelete,

    // ==========================================================================
    // Read State
    // ==========================================================================
    /// Mark one notification as read.
    MarkRead {
        /// Notification id.
        id: u64,
    },

    /// Mark every notification as read.
    MarkAllRead,

    // ==========================================================================
    // Navigation
    // ==========================================================================
    /// Follow a booking reference out of a notification.
    OpenBooking {
        /// Referenced booking id.
        booking_id: u64,
    },

    /// Switch the interface language.
    ChangeLanguage {
        /// New locale tag.
        locale: String,
    },
}

/// Non-critical issue with its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// Failure surfaced to the user, with its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// Completed background operations with their timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AppOperation {
    /// A feed page was fetched.
    FeedLoad {
        /// Requested prefix size.
        top: u32,
        /// Items returned by the backend.
        item_count: usize,
        /// Round-trip time in milliseconds.
        duration_ms: u64,
    },

    /// Permanent deletes were sent for expired or confirmed ids.
    CommitDeletes {
        /// Number of ids committed.
        count: usize,
        /// Number of requests that failed.
        failed: usize,
    },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for ordering)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Warning {
        event: WarningEvent,
    },
    Error {
        event: ErrorEvent,
    },
    Operation {
        operation: AppOperation,
    },
}

impl std::fmt::Display for DiagnosticEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserAction { action, details } => match details {
                Some(details) => write!(f, "action {action:?} ({details})"),
                None => write!(f, "action {action:?}"),
            },
            Self::Warning { event } => {
                write!(f, "warning {:?}: {}", event.warning_type, event.message)
            }
            Self::Error { event } => write!(f, "error {:?}: {}", event.error_type, event.message),
            Self::Operation { operation } => write!(f, "operation {operation:?}"),
        }
    }
}
