// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits on top; the history panel docks to the right edge while
//! open, and undo toasts float above everything in the bottom-right corner.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::history;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::toasts;
use iced::{
    widget::{stack, Column, Container, Row, Space, Text},
    Element, Length,
};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let navbar = navbar::view(NavbarViewContext {
            i18n: &self.i18n,
            bell: &self.bell,
            now: self.now,
            language_menu_open: self.language_menu_open,
            theme_mode: self.theme_mode,
            booking_focus: self.booking_focus,
            notice: self.notice.as_deref(),
        })
        .map(Message::Navbar);

        let mut body = Row::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(self.view_workspace());

        if self.history.is_open() {
            body = body.push(history::view(&self.history, &self.i18n).map(Message::History));
        }

        let content = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(navbar)
            .push(body);

        let toasts = toasts::view_overlay(self.history.toasts(), &self.i18n, self.now)
            .map(|message| Message::History(history::Message::Toast(message)));

        stack![content, toasts].into()
    }

    /// Area left of the history panel: hints at where bookings open.
    fn view_workspace(&self) -> Element<'_, Message> {
        let text = match self.booking_focus {
            Some(id) => self
                .i18n
                .tr_with_args("workspace-booking-focus", &[("id", &id.to_string())]),
            None => self.i18n.tr("workspace-hint"),
        };

        Container::new(
            Column::new()
                .spacing(spacing::XS)
                .push(Space::new().height(Length::Fixed(spacing::LG)))
                .push(Text::new(text).size(typography::BODY)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
    }
}
