// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{persistence, App, Message};
use crate::diagnostics::UserAction;
use crate::ui::bell;
use crate::ui::history::{self, Effect as HistoryEffect};
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::{window, Task};
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();

        match message {
            Message::Navbar(message) => self.handle_navbar_message(message),
            Message::Bell(message) => self.handle_bell_message(message),
            Message::History(message) => self.handle_history_message(message),
            Message::Tick(now) => {
                self.now = now;
                self.diagnostics.process_pending();
                self.bell.expire_pulse(now);
                Task::none()
            }
            Message::WindowCloseRequested(window_id) => self.shutdown(window_id),
        }
    }

    /// Stops the unread poller and commits pending deletions, then closes
    /// the window once the deletes have been answered.
    pub(super) fn shutdown(&mut self, window_id: window::Id) -> Task<Message> {
        self.bell.stop();
        let ctx = history::Context {
            directory: &self.directory,
            diagnostics: &self.diagnostics_handle,
            now: self.now,
        };
        let commit = self.history.close(&ctx).map(Message::History);
        commit.chain(window::close(window_id))
    }

    fn handle_navbar_message(&mut self, message: navbar::Message) -> Task<Message> {
        match navbar::update(message, &mut self.language_menu_open) {
            NavbarEvent::None => Task::none(),
            NavbarEvent::Bell(message) => self.handle_bell_message(message),
            NavbarEvent::LanguageSelected(tag) => {
                if persistence::apply_language_change(&mut self.i18n, &mut self.config, &tag) {
                    self.diagnostics_handle
                        .log_action(UserAction::ChangeLanguage { locale: tag });
                    persistence::persist_config(&self.config, &self.diagnostics_handle);
                }
                Task::none()
            }
            NavbarEvent::CycleTheme => {
                self.theme_mode = self.theme_mode.next();
                self.config.general.theme_mode = self.theme_mode;
                persistence::persist_config(&self.config, &self.diagnostics_handle);
                Task::none()
            }
            NavbarEvent::ClearBookingFocus => {
                self.booking_focus = None;
                Task::none()
            }
            NavbarEvent::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn handle_bell_message(&mut self, message: bell::Message) -> Task<Message> {
        let (event, task) =
            self.bell
                .handle(message, &self.directory, &self.diagnostics_handle, self.now);
        let task = task.map(Message::Bell);

        match event {
            bell::Event::None => task,
            bell::Event::ToggleHistory => {
                let ctx = history::Context {
                    directory: &self.directory,
                    diagnostics: &self.diagnostics_handle,
                    now: self.now,
                };
                let history_task = if self.history.is_open() {
                    self.history.close(&ctx)
                } else {
                    self.history.open(&ctx)
                };
                Task::batch([task, history_task.map(Message::History)])
            }
        }
    }

    fn handle_history_message(&mut self, message: history::Message) -> Task<Message> {
        let ctx = history::Context {
            directory: &self.directory,
            diagnostics: &self.diagnostics_handle,
            now: self.now,
        };
        let (effect, task) = self.history.handle_message(message, &ctx);

        match effect {
            HistoryEffect::None | HistoryEffect::Closed => {}
            HistoryEffect::OpenAdminBookings { booking_id } => {
                self.booking_focus = Some(booking_id);
            }
            HistoryEffect::UnreadCleared => self.bell.clear_count(),
        }

        task.map(Message::History)
    }
}
