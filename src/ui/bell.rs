// SPDX-License-Identifier: MPL-2.0
//! Notification bell with the unread counter poller.
//!
//! Polling is a chain of tasks rather than a fixed-rate timer: a request
//! completes, then the next one is scheduled [`UNREAD_POLL_INTERVAL_MS`]
//! later, so two requests never overlap. Every task carries the generation
//! it was started under; [`Bell::stop`] bumps the generation so that late
//! results and timers from a stopped chain change nothing.

use crate::application::port::{ApiResult, SharedDirectory};
use crate::config::{UNREAD_POLL_INTERVAL_MS, UNREAD_PULSE_MS};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, stack, text, tooltip, Container, Text};
use iced::{alignment, Element, Length, Task};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(UNREAD_POLL_INTERVAL_MS);
const PULSE_DURATION: Duration = Duration::from_millis(UNREAD_PULSE_MS);

/// Badge text is capped to keep the bell compact.
const BADGE_CAP: u32 = 99;

#[derive(Debug, Clone)]
pub enum Message {
    /// An unread-count request finished.
    Fetched {
        generation: u64,
        result: ApiResult<u32>,
    },
    /// The interval after the previous request elapsed.
    Due { generation: u64 },
    Pressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ToggleHistory,
}

#[derive(Debug, Default)]
pub struct Bell {
    count: u32,
    pulse_until: Option<Instant>,
    generation: u64,
    active: bool,
}

impl Bell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new poll chain with an immediate request.
    ///
    /// Any chain already running is abandoned.
    pub fn start(&mut self, directory: &SharedDirectory) -> Task<Message> {
        self.generation += 1;
        self.active = true;
        fetch(directory, self.generation)
    }

    /// Stops polling. Results still in flight are ignored.
    pub fn stop(&mut self) {
        self.generation += 1;
        self.active = false;
        self.pulse_until = None;
    }

    pub fn handle(
        &mut self,
        message: Message,
        directory: &SharedDirectory,
        diagnostics: &DiagnosticsHandle,
        now: Instant,
    ) -> (Event, Task<Message>) {
        match message {
            Message::Fetched { generation, result } => {
                if !self.owns(generation) {
                    return (Event::None, Task::none());
                }
                match result {
                    Ok(count) => {
                        self.observe(count, now);
                    }
                    Err(error) => diagnostics.log_warning(WarningEvent::new(
                        WarningType::NetworkError,
                        format!("unread count poll failed: {error}"),
                    )),
                }
                (Event::None, schedule(generation))
            }
            Message::Due { generation } => {
                if !self.owns(generation) {
                    return (Event::None, Task::none());
                }
                (Event::None, fetch(directory, generation))
            }
            Message::Pressed => (Event::ToggleHistory, Task::none()),
        }
    }

    /// Records a polled count. Returns `true` if the bell started pulsing.
    pub fn observe(&mut self, count: u32, now: Instant) -> bool {
        let increased = count > self.count;
        self.count = count;
        if increased {
            self.pulse_until = Some(now + PULSE_DURATION);
        }
        increased
    }

    /// Resets the count after everything was marked read.
    pub fn clear_count(&mut self) {
        self.count = 0;
    }

    /// Forgets an elapsed pulse so the redraw tick can stop.
    pub fn expire_pulse(&mut self, now: Instant) {
        if !self.is_pulsing(now) {
            self.pulse_until = None;
        }
    }

    #[must_use]
    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse_until.is_some_and(|until| now < until)
    }

    /// Returns whether a pulse still needs redraw ticks.
    #[must_use]
    pub fn has_pulse(&self) -> bool {
        self.pulse_until.is_some()
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn owns(&self, generation: u64) -> bool {
        self.active && generation == self.generation
    }

    /// Renders the bell button with its unread badge.
    pub fn view<'a>(&'a self, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        let glyph = Text::new("\u{1F514}")
            .size(typography::TITLE_MD)
            .align_x(alignment::Horizontal::Center);

        let bell_button = button(
            Container::new(glyph)
                .center_x(Length::Fixed(sizing::BELL_BUTTON))
                .center_y(Length::Fixed(sizing::BELL_BUTTON)),
        )
        .on_press(Message::Pressed)
        .padding(0)
        .style(styles::button::subtle);

        let content: Element<'a, Message> = if self.count > 0 {
            stack![bell_button, self.badge(now)].into()
        } else {
            bell_button.into()
        };

        tooltip(
            content,
            Container::new(Text::new(i18n.tr("bell-tooltip")).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(container::rounded_box),
            tooltip::Position::Bottom,
        )
        .into()
    }

    fn badge<'a>(&self, now: Instant) -> Element<'a, Message> {
        let pulsing = self.is_pulsing(now);
        let label = if self.count > BADGE_CAP {
            format!("{BADGE_CAP}+")
        } else {
            self.count.to_string()
        };
        let size = if pulsing {
            sizing::BADGE * sizing::BADGE_PULSE_SCALE
        } else {
            sizing::BADGE
        };

        let badge = Container::new(
            Text::new(label)
                .size(typography::BADGE)
                .wrapping(text::Wrapping::None),
        )
        .center_x(Length::Shrink)
        .center_y(Length::Fixed(size))
        .padding([0.0, spacing::XXS])
        .style(styles::container::badge(pulsing));

        Container::new(badge)
            .width(Length::Fixed(sizing::BELL_BUTTON))
            .align_x(alignment::Horizontal::Right)
            .into()
    }
}

fn fetch(directory: &SharedDirectory, generation: u64) -> Task<Message> {
    Task::perform(directory.unread_count(), move |result| Message::Fetched {
        generation,
        result,
    })
}

fn schedule(generation: u64) -> Task<Message> {
    Task::perform(poll_delay(), move |()| Message::Due { generation })
}

async fn poll_delay() {
    tokio::time::sleep(POLL_INTERVAL).await;
}
