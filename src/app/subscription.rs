// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! - A slow tick always runs to drain diagnostics.
//! - A fast tick runs while the bell pulses so the pulse ends on time.
//! - The history panel adds its own pointer and timer subscriptions while
//!   it is open.
//! - Window close requests are routed to the app for teardown.

use super::{App, Message};
use crate::config::GESTURE_TICK_MS;
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Period of the diagnostics drain tick.
const DIAGNOSTICS_TICK: Duration = Duration::from_secs(1);

impl App {
    pub(super) fn subscription(&self) -> Subscription<Message> {
        let diagnostics_tick = time::every(DIAGNOSTICS_TICK).map(Message::Tick);

        let pulse_tick = if self.bell.has_pulse() {
            time::every(Duration::from_millis(GESTURE_TICK_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        let history = self.history.subscription().map(Message::History);

        let close_requests = event::listen_with(window_close_request);

        Subscription::batch([diagnostics_tick, pulse_tick, history, close_requests])
    }
}

fn window_close_request(
    event: Event,
    _status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_request_is_routed_with_its_window() {
        let window_id = window::Id::unique();

        let message = window_close_request(
            Event::Window(window::Event::CloseRequested),
            event::Status::Ignored,
            window_id,
        );

        assert!(matches!(message, Some(Message::WindowCloseRequested(id)) if id == window_id));
    }

    #[test]
    fn other_window_events_are_ignored() {
        let message = window_close_request(
            Event::Window(window::Event::Focused),
            event::Status::Ignored,
            window::Id::unique(),
        );

        assert!(message.is_none());
    }
}
