// SPDX-License-Identifier: MPL-2.0
//! Message sanitization and warning/error type definitions.
//!
//! This module provides:
//! - Type enums for categorizing warnings and errors
//! - Message sanitization to remove credentials and query strings

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// Warning and Error Type Enums
// =============================================================================

/// Categories of warnings that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A best-effort request (poll, delete, mark read) failed.
    NetworkError,
    /// The backend reported no session or no data.
    SessionMissing,
    /// The settings file could not be read or written.
    ConfigurationIssue,
    Other,
}

/// Categories of errors that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The notification feed could not be loaded.
    LoadFailed,
    /// The backend answered with an unexpected payload.
    DecodeError,
    Other,
}

// =============================================================================
// Message Sanitization
// =============================================================================

static BEARER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)bearer\s+[A-Za-z0-9\-._~+/]+=*").expect("bearer regex should compile")
});

static QUERY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Keeps scheme, host and path; drops everything from `?` up to whitespace.
    Regex::new(r#"(https?://[^\s?"']+)\?[^\s"')]*"#).expect("query regex should compile")
});

/// Sanitizes a message by removing sensitive information.
///
/// # Examples
///
/// ```
/// use front_desk::diagnostics::sanitize_message;
///
/// let msg = "401 for Bearer abc.def-123";
/// assert_eq!(sanitize_message(msg), "401 for Bearer <redacted>");
///
/// let msg = "GET http://host/api/notifications?top=30 failed";
/// assert_eq!(sanitize_message(msg), "GET http://host/api/notifications?<query> failed");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    let without_tokens = BEARER_PATTERN.replace_all(message, "Bearer <redacted>");
    QUERY_PATTERN
        .replace_all(&without_tokens, "$1?<query>")
        .into_owned()
}
