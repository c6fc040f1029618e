// SPDX-License-Identifier: MPL-2.0
//! Notification history panel state and update logic.
//!
//! The panel composes the feed, the per-row gestures, the pending soft
//! deletions and the bulk-delete prompt. All network work leaves through
//! `Task`s; results come back as messages and are applied here.

use super::bulk::{self, BulkDelete};
use super::feed::{Feed, LoadMode, LoadOutcome, LoadRequest};
use super::gesture::{self, RowGesture};
use super::pending::SoftDeletes;
use crate::application::deletion::{delete_all, DeletionReport};
use crate::application::port::{ApiError, ApiResult, SharedDirectory};
use crate::config::{EXPIRY_SWEEP_MS, GESTURE_TICK_MS};
use crate::diagnostics::{
    AppOperation, DiagnosticsHandle, ErrorEvent, ErrorType, UserAction, WarningEvent, WarningType,
};
use crate::domain::notification::{BookingReference, NotificationId, NotificationItem};
use crate::ui::toasts;
use iced::{event, mouse, touch, Event, Subscription, Task};
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// Window-level pointer input, independent of which row is under it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { x: f32 },
    /// Mouse button or finger down. Mouse presses carry no position.
    Pressed { x: Option<f32> },
    Released,
    Lost,
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Reload,
    LoadMore,
    Loaded {
        request: LoadRequest,
        result: ApiResult<Vec<NotificationItem>>,
    },
    RowEntered(NotificationId),
    RowExited(NotificationId),
    RowPressed(NotificationId),
    Pointer(PointerEvent),
    GestureTick,
    /// Delete affordance clicked on an armed row.
    DeleteRow(NotificationId),
    Toast(toasts::Message),
    SweepTick,
    Committed(DeletionReport),
    MarkRead(NotificationId),
    MarkedRead {
        id: NotificationId,
        result: ApiResult<()>,
    },
    MarkAllRead,
    MarkedAllRead(ApiResult<()>),
    OpenBooking(BookingReference),
    RequestBulkDelete,
    CancelBulkDelete,
    ConfirmBulkDelete,
    BulkDeleted(DeletionReport),
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Closed,
    /// Broadcast to the rest of the application: focus this booking.
    OpenAdminBookings { booking_id: u64 },
    /// Every notification was marked read.
    UnreadCleared,
}

/// Dependencies the panel needs while handling a message.
pub struct Context<'a> {
    pub directory: &'a SharedDirectory,
    pub diagnostics: &'a DiagnosticsHandle,
    pub now: Instant,
}

#[derive(Debug)]
pub struct State {
    open: bool,
    feed: Feed,
    pending: SoftDeletes,
    bulk: BulkDelete,
    gestures: HashMap<NotificationId, RowGesture>,
    /// Row that owns the current press, if any.
    dragging: Option<NotificationId>,
    pointer_x: Option<f32>,
    /// Row press seen before the window-level press that carries its position.
    press_row: Option<NotificationId>,
    /// Window-level press seen before the row press it belongs to.
    press_x: Option<f32>,
    /// Ids whose permanent delete has been sent but not answered yet.
    committing: HashSet<NotificationId>,
    load_started_at: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            open: false,
            feed: Feed::new(page_size),
            pending: SoftDeletes::new(),
            bulk: BulkDelete::default(),
            gestures: HashMap::new(),
            dragging: None,
            pointer_x: None,
            press_row: None,
            press_x: None,
            committing: HashSet::new(),
            load_started_at: None,
        }
    }

    /// Opens the panel and loads the first page.
    pub fn open(&mut self, ctx: &Context<'_>) -> Task<Message> {
        if self.open {
            return Task::none();
        }
        self.open = true;
        ctx.diagnostics.log_action(UserAction::OpenHistory);
        self.start_load(LoadMode::Open, ctx)
    }

    /// Closes the panel, committing every deletion still in its undo window.
    pub fn close(&mut self, ctx: &Context<'_>) -> Task<Message> {
        if !self.open {
            return Task::none();
        }
        self.open = false;
        self.feed.cancel();
        self.bulk.cancel();
        self.reset_pointer();
        ctx.diagnostics.log_action(UserAction::CloseHistory);
        let pending = self.pending.drain_all();
        let ids = self.begin_commit(pending);
        commit(ctx.directory, ids, Message::Committed)
    }

    pub fn handle_message(&mut self, message: Message, ctx: &Context<'_>) -> (Effect, Task<Message>) {
        let now = ctx.now;
        match message {
            Message::Close => {
                let task = self.close(ctx);
                (Effect::Closed, task)
            }
            Message::Reload => {
                ctx.diagnostics.log_action(UserAction::Reload);
                (Effect::None, self.start_load(LoadMode::Reload, ctx))
            }
            Message::LoadMore => {
                let task = self.start_load(LoadMode::Append, ctx);
                (Effect::None, task)
            }
            Message::Loaded { request, result } => {
                self.apply_load(request, result, ctx);
                (Effect::None, Task::none())
            }
            Message::RowEntered(id) => {
                self.gesture_event(id, gesture::Event::HoverEnter, ctx);
                (Effect::None, Task::none())
            }
            Message::RowExited(id) => {
                self.gesture_event(id, gesture::Event::HoverLeave, ctx);
                (Effect::None, Task::none())
            }
            Message::RowPressed(id) => {
                match self.press_x.take() {
                    Some(x) if self.dragging.is_none() => self.begin_drag(id, x, ctx),
                    _ => self.press_row = Some(id),
                }
                (Effect::None, Task::none())
            }
            Message::Pointer(pointer) => {
                self.pointer_event(pointer, ctx);
                (Effect::None, Task::none())
            }
            Message::GestureTick => {
                for gesture in self.gestures.values_mut() {
                    gesture.handle(gesture::Event::Tick, now);
                }
                self.gestures.retain(|_, gesture| !gesture.is_at_rest());
                (Effect::None, Task::none())
            }
            Message::DeleteRow(id) => {
                self.soft_delete(id, ctx);
                (Effect::None, Task::none())
            }
            Message::Toast(toasts::Message::Undo(id)) => {
                if let Some(item) = self.pending.undo(id, now) {
                    self.feed.restore(item);
                    ctx.diagnostics
                        .log_action(UserAction::Undo { id: id.value() });
                }
                (Effect::None, Task::none())
            }
            Message::SweepTick => {
                let expired = self.pending.sweep(now);
                let ids = self.begin_commit(expired);
                (Effect::None, commit(ctx.directory, ids, Message::Committed))
            }
            Message::Committed(report) | Message::BulkDeleted(report) => {
                self.finish_commit(&report);
                log_deletions(&report, ctx.diagnostics);
                (Effect::None, Task::none())
            }
            Message::MarkRead(id) => {
                if !self.feed.mark_read(id) {
                    return (Effect::None, Task::none());
                }
                ctx.diagnostics
                    .log_action(UserAction::MarkRead { id: id.value() });
                let task = Task::perform(ctx.directory.mark_read(id), move |result| {
                    Message::MarkedRead { id, result }
                });
                (Effect::None, task)
            }
            Message::MarkedRead { id, result } => {
                if let Err(error) = result {
                    ctx.diagnostics.log_warning(WarningEvent::new(
                        WarningType::NetworkError,
                        format!("mark read failed for {id}: {error}"),
                    ));
                }
                (Effect::None, Task::none())
            }
            Message::MarkAllRead => {
                self.feed.mark_all_read();
                ctx.diagnostics.log_action(UserAction::MarkAllRead);
                let task = Task::perform(ctx.directory.mark_all_read(), Message::MarkedAllRead);
                (Effect::UnreadCleared, task)
            }
            Message::MarkedAllRead(result) => {
                if let Err(error) = result {
                    ctx.diagnostics.log_warning(WarningEvent::new(
                        WarningType::NetworkError,
                        format!("mark all read failed: {error}"),
                    ));
                }
                (Effect::None, Task::none())
            }
            Message::OpenBooking(booking) => {
                ctx.diagnostics.log_action(UserAction::OpenBooking {
                    booking_id: booking.id(),
                });
                (
                    Effect::OpenAdminBookings {
                        booking_id: booking.id(),
                    },
                    Task::none(),
                )
            }
            Message::RequestBulkDelete => {
                if self.bulk.request() {
                    ctx.diagnostics.log_action(UserAction::RequestBulkDelete);
                }
                (Effect::None, Task::none())
            }
            Message::CancelBulkDelete => {
                if self.bulk.cancel() {
                    ctx.diagnostics.log_action(UserAction::CancelBulkDelete);
                }
                (Effect::None, Task::none())
            }
            Message::ConfirmBulkDelete => {
                if !self.bulk.confirm() {
                    return (Effect::None, Task::none());
                }
                let targets = bulk::targets(self.feed.ids(), self.pending.drain_all());
                let ids = self.begin_commit(targets);
                self.feed.clear_exhausted();
                self.reset_pointer();
                ctx.diagnostics
                    .log_action(UserAction::ConfirmBulkDelete { count: ids.len() });
                (Effect::None, commit(ctx.directory, ids, Message::BulkDeleted))
            }
        }
    }

    /// Timers and window-level pointer input needed while the panel is open.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.open {
            return Subscription::none();
        }

        let pointer = event::listen_with(pointer_event).map(Message::Pointer);

        let dwell = if self.gestures.values().any(RowGesture::awaiting_dwell) {
            iced::time::every(Duration::from_millis(GESTURE_TICK_MS)).map(|_| Message::GestureTick)
        } else {
            Subscription::none()
        };

        let sweep = if self.pending.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(Duration::from_millis(EXPIRY_SWEEP_MS)).map(|_| Message::SweepTick)
        };

        Subscription::batch([pointer, dwell, sweep])
    }

    fn start_load(&mut self, mode: LoadMode, ctx: &Context<'_>) -> Task<Message> {
        let Some(request) = self.feed.begin_load(mode) else {
            return Task::none();
        };
        if mode == LoadMode::Append {
            ctx.diagnostics.log_action(UserAction::LoadMore);
        }
        self.load_started_at = Some(ctx.now);
        Task::perform(ctx.directory.list(request.top), move |result| {
            Message::Loaded { request, result }
        })
    }

    fn apply_load(
        &mut self,
        request: LoadRequest,
        result: ApiResult<Vec<NotificationItem>>,
        ctx: &Context<'_>,
    ) {
        let failure = result.as_ref().err().cloned();
        let mut hidden = self.pending.ids();
        hidden.extend(self.committing.iter().copied());
        match self.feed.finish(request, result, &hidden) {
            LoadOutcome::Stale => {}
            LoadOutcome::Loaded { count } => {
                let duration_ms = self
                    .load_started_at
                    .map(|started| ctx.now.saturating_duration_since(started).as_millis() as u64)
                    .unwrap_or_default();
                ctx.diagnostics.log_operation(AppOperation::FeedLoad {
                    top: request.top,
                    item_count: count,
                    duration_ms,
                });
            }
            LoadOutcome::NoSession => {
                ctx.diagnostics.log_warning(WarningEvent::new(
                    WarningType::SessionMissing,
                    "feed unavailable without a session",
                ));
            }
            LoadOutcome::Failed => {
                let error_type = match failure {
                    Some(ApiError::Decode(_)) => ErrorType::DecodeError,
                    _ => ErrorType::LoadFailed,
                };
                let message = failure.map(|error| error.to_string()).unwrap_or_default();
                ctx.diagnostics.log_error(ErrorEvent::new(
                    error_type,
                    format!("feed load (top={}) failed: {message}", request.top),
                ));
            }
        }
    }

    fn pointer_event(&mut self, pointer: PointerEvent, ctx: &Context<'_>) {
        match pointer {
            PointerEvent::Moved { x } => {
                self.pointer_x = Some(x);
                if let Some(id) = self.dragging {
                    self.gesture_event(id, gesture::Event::Move { x }, ctx);
                }
            }
            PointerEvent::Pressed { x } => {
                if let Some(x) = x {
                    self.pointer_x = Some(x);
                }
                let Some(x) = x.or(self.pointer_x) else {
                    return;
                };
                match self.press_row.take() {
                    Some(id) if self.dragging.is_none() => self.begin_drag(id, x, ctx),
                    _ => self.press_x = Some(x),
                }
            }
            PointerEvent::Released => {
                self.press_row = None;
                self.press_x = None;
                if let Some(id) = self.dragging.take() {
                    self.gesture_event(id, gesture::Event::Release, ctx);
                }
            }
            PointerEvent::Lost => {
                self.press_row = None;
                self.press_x = None;
                if let Some(id) = self.dragging.take() {
                    self.gesture_event(id, gesture::Event::Cancel, ctx);
                }
            }
        }
    }

    fn begin_drag(&mut self, id: NotificationId, x: f32, ctx: &Context<'_>) {
        self.dragging = Some(id);
        self.gesture_event(id, gesture::Event::Press { x }, ctx);
    }

    fn gesture_event(&mut self, id: NotificationId, event: gesture::Event, ctx: &Context<'_>) {
        if self.feed.get(id).is_none() {
            return;
        }
        let gesture = self.gestures.entry(id).or_default();
        let effect = gesture.handle(event, ctx.now);
        if gesture.is_at_rest() {
            self.gestures.remove(&id);
        }
        if effect == gesture::Effect::Delete {
            self.soft_delete(id, ctx);
        }
    }

    fn soft_delete(&mut self, id: NotificationId, ctx: &Context<'_>) {
        let Some(item) = self.feed.remove(id) else {
            return;
        };
        let label = item.display_message().text;
        self.pending.insert(item, label, ctx.now);
        self.gestures.remove(&id);
        if self.dragging == Some(id) {
            self.dragging = None;
        }
        ctx.diagnostics
            .log_action(UserAction::SoftDelete { id: id.value() });
    }

    /// Marks `ids` as being deleted and returns those not already in flight.
    fn begin_commit(&mut self, ids: Vec<NotificationId>) -> Vec<NotificationId> {
        ids.into_iter()
            .filter(|id| self.committing.insert(*id))
            .collect()
    }

    fn finish_commit(&mut self, report: &DeletionReport) {
        let answered = report
            .deleted
            .iter()
            .chain(report.failed.iter().map(|(id, _)| id));
        for id in answered {
            self.committing.remove(id);
        }
    }

    fn reset_pointer(&mut self) {
        self.gestures.clear();
        self.dragging = None;
        self.press_row = None;
        self.press_x = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    #[must_use]
    pub fn pending(&self) -> &SoftDeletes {
        &self.pending
    }

    #[must_use]
    pub fn toasts(&self) -> &toasts::Manager {
        self.pending.toasts()
    }

    #[must_use]
    pub fn is_confirming_bulk_delete(&self) -> bool {
        self.bulk.is_confirming()
    }

    /// Ids with a permanent delete in flight, in ascending order.
    #[must_use]
    pub fn in_flight_deletes(&self) -> Vec<NotificationId> {
        let mut ids: Vec<_> = self.committing.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Gesture state of a row; rows without one are at rest.
    #[must_use]
    pub fn gesture(&self, id: NotificationId) -> RowGesture {
        self.gestures.get(&id).copied().unwrap_or_default()
    }
}

/// Sends the permanent deletes for `ids`, if any.
fn commit(
    directory: &SharedDirectory,
    ids: Vec<NotificationId>,
    on_done: fn(DeletionReport) -> Message,
) -> Task<Message> {
    if ids.is_empty() {
        return Task::none();
    }
    Task::perform(delete_all(directory.clone(), ids), on_done)
}

fn log_deletions(report: &DeletionReport, diagnostics: &DiagnosticsHandle) {
    for (id, error) in &report.failed {
        diagnostics.log_warning(WarningEvent::new(
            WarningType::NetworkError,
            format!("permanent delete failed for {id}: {error}"),
        ));
    }
    diagnostics.log_operation(AppOperation::CommitDeletes {
        count: report.attempted(),
        failed: report.failed.len(),
    });
}

fn pointer_event(event: Event, _status: event::Status, _window: iced::window::Id) -> Option<PointerEvent> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(PointerEvent::Moved { x: position.x })
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(PointerEvent::Pressed { x: None })
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(PointerEvent::Released)
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(PointerEvent::Lost),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => Some(PointerEvent::Pressed {
            x: Some(position.x),
        }),
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(PointerEvent::Moved { x: position.x })
        }
        Event::Touch(touch::Event::FingerLifted { .. }) => Some(PointerEvent::Released),
        Event::Touch(touch::Event::FingerLost { .. }) => Some(PointerEvent::Lost),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
    use crate::test_utils::{sample_item, sample_items, InMemoryDirectory};
    use std::sync::Arc;

    struct Harness {
        backend: Arc<InMemoryDirectory>,
        directory: SharedDirectory,
        collector: DiagnosticsCollector,
        diagnostics: DiagnosticsHandle,
        origin: Instant,
    }

    impl Harness {
        fn new() -> Self {
            let collector = DiagnosticsCollector::with_echo(BufferCapacity::new(64), false);
            let diagnostics = collector.handle();
            let backend = Arc::new(InMemoryDirectory::with_items(sample_items(3)));
            Self {
                directory: backend.clone(),
                backend,
                collector,
                diagnostics,
                origin: Instant::now(),
            }
        }

        fn at(&self, ms: u64) -> Context<'_> {
            Context {
                directory: &self.directory,
                diagnostics: &self.diagnostics,
                now: self.origin + Duration::from_millis(ms),
            }
        }
    }

    fn id(value: u64) -> NotificationId {
        NotificationId::new(value)
    }

    /// Opens the panel and answers the first load with `items`.
    fn opened(harness: &Harness, items: Vec<NotificationItem>) -> State {
        let mut state = State::new(30);
        let _ = state.open(&harness.at(0));
        let request = LoadRequest {
            top: 30,
            append: false,
            generation: 1,
        };
        state.handle_message(
            Message::Loaded {
                request,
                result: Ok(items),
            },
            &harness.at(0),
        );
        state
    }

    fn send(state: &mut State, harness: &Harness, at: u64, message: Message) -> Effect {
        state.handle_message(message, &harness.at(at)).0
    }

    /// Runs the in-flight deletes against the backend and reports back.
    async fn settle_deletes(state: &mut State, harness: &Harness, at: u64) {
        let ids = state.in_flight_deletes();
        if ids.is_empty() {
            return;
        }
        let report = delete_all(harness.directory.clone(), ids).await;
        send(state, harness, at, Message::Committed(report));
    }

    fn loaded(generation: u64, items: Vec<NotificationItem>) -> Message {
        Message::Loaded {
            request: LoadRequest {
                top: 30,
                append: false,
                generation,
            },
            result: Ok(items),
        }
    }

    #[test]
    fn open_loads_first_page() {
        let harness = Harness::new();
        let state = opened(&harness, sample_items(3));

        assert!(state.is_open());
        assert_eq!(state.feed().items().len(), 3);
        assert!(!state.feed().is_loading());
    }

    #[test]
    fn swipe_past_threshold_soft_deletes_row() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));

        send(&mut state, &harness, 10, Message::RowEntered(id(2)));
        send(&mut state, &harness, 20, Message::RowPressed(id(2)));
        send(
            &mut state,
            &harness,
            20,
            Message::Pointer(PointerEvent::Pressed { x: Some(300.0) }),
        );
        send(
            &mut state,
            &harness,
            40,
            Message::Pointer(PointerEvent::Moved { x: 150.0 }),
        );
        assert_eq!(state.gesture(id(2)).phase(), gesture::Phase::DeleteReady);

        send(&mut state, &harness, 60, Message::Pointer(PointerEvent::Released));

        assert!(state.feed().get(id(2)).is_none());
        assert!(state.pending().contains(id(2)));
        assert!(state.toasts().contains(id(2)));
    }

    #[test]
    fn short_swipe_snaps_back_without_delete() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));

        send(
            &mut state,
            &harness,
            0,
            Message::Pointer(PointerEvent::Moved { x: 300.0 }),
        );
        send(
            &mut state,
            &harness,
            5,
            Message::Pointer(PointerEvent::Pressed { x: None }),
        );
        send(&mut state, &harness, 5, Message::RowPressed(id(1)));
        send(
            &mut state,
            &harness,
            30,
            Message::Pointer(PointerEvent::Moved { x: 200.0 }),
        );
        send(&mut state, &harness, 50, Message::Pointer(PointerEvent::Released));

        assert!(state.feed().get(id(1)).is_some());
        assert!(state.pending().is_empty());
        assert_eq!(state.gesture(id(1)).offset().value(), 0.0);
    }

    #[test]
    fn undo_within_window_restores_item_at_head() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));

        send(&mut state, &harness, 0, Message::DeleteRow(id(1)));
        send(
            &mut state,
            &harness,
            2_000,
            Message::Toast(toasts::Message::Undo(id(1))),
        );

        assert_eq!(state.feed().items()[0].id, id(1));
        assert!(state.pending().is_empty());
        assert!(state.toasts().is_empty());
    }

    #[test]
    fn sweep_removes_expired_entries_and_toasts() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));
        send(&mut state, &harness, 0, Message::DeleteRow(id(3)));

        send(&mut state, &harness, 4_500, Message::SweepTick);
        assert!(state.pending().contains(id(3)));

        send(&mut state, &harness, 5_001, Message::SweepTick);
        assert!(state.pending().is_empty());
        assert!(!state.toasts().contains(id(3)));

        send(
            &mut state,
            &harness,
            5_100,
            Message::Toast(toasts::Message::Undo(id(3))),
        );
        assert!(state.feed().get(id(3)).is_none());
    }

    #[test]
    fn close_commits_pending_deletions() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));
        send(&mut state, &harness, 0, Message::DeleteRow(id(1)));

        let effect = send(&mut state, &harness, 100, Message::Close);

        assert_eq!(effect, Effect::Closed);
        assert!(!state.is_open());
        assert!(state.pending().is_empty());
        assert!(state.toasts().is_empty());
    }

    #[test]
    fn bulk_delete_requires_confirmation() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));

        send(&mut state, &harness, 0, Message::ConfirmBulkDelete);
        assert_eq!(state.feed().items().len(), 3);

        send(&mut state, &harness, 0, Message::RequestBulkDelete);
        send(&mut state, &harness, 0, Message::CancelBulkDelete);
        assert_eq!(state.feed().items().len(), 3);
        assert!(!state.is_confirming_bulk_delete());
    }

    #[test]
    fn confirmed_bulk_delete_clears_everything() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));
        send(&mut state, &harness, 0, Message::DeleteRow(id(2)));

        send(&mut state, &harness, 10, Message::RequestBulkDelete);
        send(&mut state, &harness, 20, Message::ConfirmBulkDelete);

        assert!(state.feed().is_empty());
        assert!(state.feed().is_exhausted());
        assert!(state.pending().is_empty());
        assert!(state.toasts().is_empty());
        assert!(!state.is_confirming_bulk_delete());
    }

    #[test]
    fn booking_action_emits_broadcast_effect() {
        let harness = Harness::new();
        let mut state = opened(&harness, vec![sample_item(1)]);

        let effect = send(
            &mut state,
            &harness,
            0,
            Message::OpenBooking(BookingReference::new(42)),
        );

        assert_eq!(effect, Effect::OpenAdminBookings { booking_id: 42 });
    }

    #[test]
    fn mark_all_read_clears_unread_locally() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(2));

        let effect = send(&mut state, &harness, 0, Message::MarkAllRead);

        assert_eq!(effect, Effect::UnreadCleared);
        assert!(state.feed().items().iter().all(|item| item.is_read));
    }

    #[test]
    fn failed_load_is_logged_and_keeps_items() {
        let mut harness = Harness::new();
        let mut state = opened(&harness, sample_items(2));
        let request = LoadRequest {
            top: 30,
            append: false,
            generation: 2,
        };
        send(&mut state, &harness, 0, Message::Reload);
        send(
            &mut state,
            &harness,
            50,
            Message::Loaded {
                request,
                result: Err(ApiError::Status(503)),
            },
        );

        assert_eq!(state.feed().items().len(), 2);
        assert_eq!(state.feed().error(), Some(&ApiError::Status(503)));

        harness.collector.process_pending();
        assert!(harness.collector.iter().any(|event| matches!(
            event.kind,
            crate::diagnostics::DiagnosticEventKind::Error { .. }
        )));
    }

    #[test]
    fn hover_dwell_arms_row_through_ticks() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(1));

        send(&mut state, &harness, 0, Message::RowEntered(id(1)));
        send(&mut state, &harness, 2_900, Message::GestureTick);
        assert!(!state.gesture(id(1)).shows_delete_affordance());

        send(&mut state, &harness, 3_000, Message::GestureTick);
        assert_eq!(state.gesture(id(1)).phase(), gesture::Phase::Armed);

        send(&mut state, &harness, 3_100, Message::RowExited(id(1)));
        assert!(state.gesture(id(1)).is_at_rest());
    }

    #[tokio::test]
    async fn undone_item_is_never_deleted() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));

        send(&mut state, &harness, 0, Message::DeleteRow(id(2)));
        send(
            &mut state,
            &harness,
            2_000,
            Message::Toast(toasts::Message::Undo(id(2))),
        );
        for at in [5_001, 10_000] {
            send(&mut state, &harness, at, Message::SweepTick);
            settle_deletes(&mut state, &harness, at).await;
        }

        assert_eq!(state.feed().items()[0].id, id(2));
        assert_eq!(harness.backend.delete_calls_for(id(2)), 0);
    }

    #[tokio::test]
    async fn expired_item_is_deleted_exactly_once() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));

        send(&mut state, &harness, 0, Message::DeleteRow(id(2)));
        send(&mut state, &harness, 5_001, Message::SweepTick);
        assert_eq!(state.in_flight_deletes(), vec![id(2)]);
        send(&mut state, &harness, 5_501, Message::SweepTick);
        settle_deletes(&mut state, &harness, 5_600).await;
        send(&mut state, &harness, 6_001, Message::SweepTick);
        settle_deletes(&mut state, &harness, 6_100).await;

        assert_eq!(harness.backend.delete_calls_for(id(2)), 1);
        assert!(!state.toasts().contains(id(2)));
        assert!(state.in_flight_deletes().is_empty());
    }

    #[tokio::test]
    async fn reload_answered_before_delete_lands_keeps_item_hidden() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));

        send(&mut state, &harness, 0, Message::DeleteRow(id(1)));
        send(&mut state, &harness, 100, Message::Reload);
        send(&mut state, &harness, 5_001, Message::SweepTick);
        send(&mut state, &harness, 5_050, loaded(2, sample_items(3)));

        assert!(state.feed().get(id(1)).is_none());
        assert_eq!(state.feed().items().len(), 2);

        settle_deletes(&mut state, &harness, 5_200).await;
        assert_eq!(harness.backend.delete_calls_for(id(1)), 1);
        assert!(state.in_flight_deletes().is_empty());
    }

    #[test]
    fn reopen_before_close_commit_lands_keeps_item_hidden() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));

        send(&mut state, &harness, 0, Message::DeleteRow(id(3)));
        send(&mut state, &harness, 100, Message::Close);
        let _ = state.open(&harness.at(200));
        send(&mut state, &harness, 250, loaded(2, sample_items(3)));

        assert!(state.feed().get(id(3)).is_none());
        assert_eq!(state.in_flight_deletes(), vec![id(3)]);
    }

    #[tokio::test]
    async fn reload_after_bulk_delete_shows_nothing_in_flight() {
        let harness = Harness::new();
        let mut state = opened(&harness, sample_items(3));

        send(&mut state, &harness, 0, Message::RequestBulkDelete);
        send(&mut state, &harness, 10, Message::ConfirmBulkDelete);
        send(&mut state, &harness, 20, Message::Reload);
        send(&mut state, &harness, 30, loaded(3, sample_items(3)));

        assert!(state.feed().is_empty());

        let report = delete_all(harness.directory.clone(), state.in_flight_deletes()).await;
        send(&mut state, &harness, 40, Message::BulkDeleted(report));
        assert!(state.in_flight_deletes().is_empty());
        assert!(harness.backend.remaining_ids().is_empty());
    }
}
