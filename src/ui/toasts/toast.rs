// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering undo toasts.
//!
//! Each toast shows the deleted notification's label, the seconds left in the
//! undo window, and an Undo button.

use super::manager::Manager;
use super::undo_toast::UndoToast;
use crate::domain::notification::NotificationId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Undo(NotificationId),
}

fn view<'a>(toast: &'a UndoToast, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("toast-deleted-title")).size(typography::CAPTION);
    let label = Text::new(toast.label())
        .size(typography::BODY)
        .wrapping(text::Wrapping::WordOrGlyph);
    let seconds = toast.remaining_secs(now).to_string();
    let countdown = Text::new(i18n.tr_with_args("toast-undo-countdown", &[("seconds", &seconds)]))
        .size(typography::CAPTION);

    let undo = button(Text::new(i18n.tr("toast-undo")).size(typography::BODY))
        .on_press(Message::Undo(toast.id()))
        .padding(spacing::XXS)
        .style(styles::button::link);

    let body = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(title)
        .push(label)
        .push(countdown);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(body)
        .push(undo);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast)
        .into()
}

/// Renders the visible toasts stacked in the bottom-right corner.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    if manager.visible_count() == 0 {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    }

    let mut column = Column::with_children(manager.visible().map(|toast| view(toast, i18n, now)))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    if manager.queued_count() > 0 {
        let more = manager.queued_count().to_string();
        column = column.push(
            Text::new(i18n.tr_with_args("toast-more-pending", &[("count", &more)]))
                .size(typography::CAPTION),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}
