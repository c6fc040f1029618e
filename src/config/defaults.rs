// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Bell**: Unread counter polling and pulse indicator
//! - **History**: Undo window, expiry sweep and paging
//! - **Gesture**: Hover dwell and swipe-to-delete distances
//! - **API**: Backend endpoint and request timeout
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Bell Defaults
// ==========================================================================

/// Delay between the completion of one unread-count poll and the next request (ms).
pub const UNREAD_POLL_INTERVAL_MS: u64 = 10_000;

/// How long the bell pulses after the unread count increases (ms).
pub const UNREAD_PULSE_MS: u64 = 1_200;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Grace period between a soft delete and its permanent commit (ms).
pub const UNDO_WINDOW_MS: u64 = 5_000;

/// Expiry sweep period while deletions are pending (ms).
pub const EXPIRY_SWEEP_MS: u64 = 500;

/// Default number of notifications fetched per page.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Minimum page size accepted from the config file.
pub const MIN_PAGE_SIZE: u32 = 5;

/// Maximum page size accepted from the config file.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Maximum number of undo toasts shown at once (others are queued).
pub const MAX_VISIBLE_TOASTS: usize = 3;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Continuous hover time after which a row reveals its delete affordance (ms).
pub const HOVER_DWELL_MS: u64 = 3_000;

/// Swipe distance beyond which releasing deletes the row.
pub const SWIPE_DELETE_THRESHOLD: f32 = 110.0;

/// Maximum swipe distance a row can travel.
pub const SWIPE_MAX_OFFSET: f32 = 180.0;

/// Period of the gesture tick that completes hover dwells (ms).
pub const GESTURE_TICK_MS: u64 = 100;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Backend base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Default request timeout in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout in seconds.
pub const MIN_API_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout in seconds.
pub const MAX_API_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(UNREAD_POLL_INTERVAL_MS > 0);
    assert!(UNREAD_PULSE_MS < UNREAD_POLL_INTERVAL_MS);

    assert!(EXPIRY_SWEEP_MS > 0);
    assert!(EXPIRY_SWEEP_MS < UNDO_WINDOW_MS);

    assert!(MIN_PAGE_SIZE > 0);
    assert!(MAX_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
    assert!(MAX_VISIBLE_TOASTS > 0);

    assert!(SWIPE_DELETE_THRESHOLD > 0.0);
    assert!(SWIPE_MAX_OFFSET > SWIPE_DELETE_THRESHOLD);
    assert!(GESTURE_TICK_MS < HOVER_DWELL_MS);

    assert!(MIN_API_TIMEOUT_SECS > 0);
    assert!(MAX_API_TIMEOUT_SECS >= MIN_API_TIMEOUT_SECS);
    assert!(DEFAULT_API_TIMEOUT_SECS >= MIN_API_TIMEOUT_SECS);
    assert!(DEFAULT_API_TIMEOUT_SECS <= MAX_API_TIMEOUT_SECS);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
