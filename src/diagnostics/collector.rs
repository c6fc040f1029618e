// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! various parts of the application and stores them in a circular buffer.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    sanitize_message, AppOperation, BufferCapacity, CircularBuffer, DiagnosticEvent,
    DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent,
};

/// Environment variable that enables echoing events to stderr.
pub const ENV_LOG: &str = "FRONT_DESK_LOG";

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be moved into async tasks.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action event.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs a user action event with optional details.
    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    /// Logs a warning event. The message is sanitized first.
    pub fn log_warning(&self, warning_event: WarningEvent) {
        let event = WarningEvent {
            message: sanitize_message(&warning_event.message),
            ..warning_event
        };
        self.send(DiagnosticEventKind::Warning { event });
    }

    /// Logs an error event. The message is sanitized first.
    pub fn log_error(&self, error_event: ErrorEvent) {
        let event = ErrorEvent {
            message: sanitize_message(&error_event.message),
            ..error_event
        };
        self.send(DiagnosticEventKind::Error { event });
    }

    /// Logs an application operation event with performance metrics.
    pub fn log_operation(&self, operation: AppOperation) {
        self.send(DiagnosticEventKind::Operation { operation });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
///
/// The collector receives events through a channel and stores them in a
/// memory-bounded circular buffer. Old events are automatically evicted
/// when the buffer reaches capacity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Echo drained events to stderr.
    echo: bool,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("echo", &self.echo)
            .field("started_at", &self.collection_started_at_utc)
            .finish_non_exhaustive()
    }
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    ///
    /// Echoing to stderr is enabled when [`ENV_LOG`] is set to a non-empty value.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let echo = std::env::var(ENV_LOG).is_ok_and(|value| !value.is_empty());
        Self::with_echo(capacity, echo)
    }

    #[must_use]
    pub fn with_echo(capacity: BufferCapacity, echo: bool) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            echo,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            if self.echo {
                let offset = event
                    .timestamp
                    .saturating_duration_since(self.collection_started_at);
                eprintln!("[front-desk] +{}ms {}", offset.as_millis(), event.kind);
            }
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Wall-clock time at which collection started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.collection_started_at_utc
    }

    /// Returns how long the collector has been running.
    #[must_use]
    pub fn collection_duration(&self) -> Duration {
        self.collection_started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    fn collector() -> DiagnosticsCollector {
        DiagnosticsCollector::with_echo(BufferCapacity::new(16), false)
    }

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = collector();
        let handle = collector.handle();

        handle.log_action(UserAction::Reload);
        handle.log_action(UserAction::SoftDelete { id: 3 });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn warnings_are_sanitized_before_storage() {
        let mut collector = collector();
        collector.handle().log_warning(WarningEvent::new(
            WarningType::NetworkError,
            "rejected Bearer secret-token",
        ));
        collector.process_pending();

        let stored = collector.iter().next().expect("one event");
        match &stored.kind {
            DiagnosticEventKind::Warning { event } => {
                assert!(!event.message.contains("secret-token"));
            }
            other => panic!("expected warning, got {other:?}"),
        }
    }

    #[test]
    fn errors_are_sanitized_before_storage() {
        let mut collector = collector();
        collector.handle().log_error(ErrorEvent::new(
            ErrorType::LoadFailed,
            "http://h/api/notifications?top=30 timed out",
        ));
        collector.process_pending();

        let stored = collector.iter().next().expect("one event");
        assert!(matches!(
            &stored.kind,
            DiagnosticEventKind::Error { event } if event.message.contains("<query>")
        ));
    }

    #[test]
    fn buffer_evicts_oldest_when_full() {
        let mut collector = collector();
        let handle = collector.handle();
        for id in 0..20 {
            handle.log_action(UserAction::Undo { id });
        }
        collector.process_pending();

        assert_eq!(collector.len(), 16);
        let first = collector.iter().next().expect("events");
        assert!(matches!(
            first.kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::Undo { id: 4 },
                ..
            }
        ));
    }

    #[test]
    fn dropped_collector_does_not_break_handles() {
        let handle = collector().handle();
        handle.log_action(UserAction::MarkAllRead);
    }
}
