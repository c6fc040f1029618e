// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting activity and failure events.
//!
//! Components never print or surface best-effort failures (unread polls,
//! permanent deletes, mark-read requests) directly. They log them here, where
//! they are kept in a memory-bounded circular buffer and optionally echoed to
//! stderr when `FRONT_DESK_LOG` is set.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer and drains the event channel
//! - [`DiagnosticsHandle`]: Cheap, cloneable, non-blocking sender
//!
//! # Privacy
//!
//! Warning and error messages pass through [`sanitize_message`] so bearer
//! tokens and URL query strings never reach the buffer.

mod buffer;
mod collector;
mod events;
mod sanitizer;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, ENV_LOG};
pub use events::{
    AppOperation, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent,
};
pub use sanitizer::{sanitize_message, ErrorType, WarningType};
