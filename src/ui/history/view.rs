// SPDX-License-Identifier: MPL-2.0
//! Rendering of the history panel.

use super::component::{Message, State};
use crate::application::port::ApiError;
use crate::domain::notification::NotificationItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Local, NaiveDateTime};
use iced::widget::{
    button, center, mouse_area, opaque, scrollable, stack, text, Column, Container, Row, Space,
    Text,
};
use iced::{alignment, Color, Element, Length};

const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Formats a backend timestamp for display.
///
/// RFC 3339 timestamps are shown in local time. Timestamps without an
/// offset are shown as-is. Anything else is returned unchanged.
#[must_use]
pub fn format_sent_at(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(DATE_FORMAT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}

/// Renders the panel, with the bulk-delete prompt on top when open.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header(state, i18n));

    if let Some(error) = state.feed().error() {
        content = content.push(error_banner(error, i18n));
    }

    let mut rows = Column::new().spacing(spacing::XS).width(Length::Fill);
    for item in state.feed().items() {
        rows = rows.push(row(state, item, i18n));
    }
    rows = rows.push(footer(state, i18n));

    content = content.push(scrollable(rows).height(Length::Fill));

    let panel = Container::new(content)
        .width(Length::Fixed(sizing::HISTORY_PANEL_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel);

    if state.is_confirming_bulk_delete() {
        stack![panel, confirm_dialog(state, i18n)].into()
    } else {
        panel.into()
    }
}

fn header<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("history-title")).size(typography::TITLE_MD);

    let has_items = !state.feed().is_empty();
    let mark_all = button(Text::new(i18n.tr("history-mark-all-read")).size(typography::CAPTION))
        .on_press_maybe(has_items.then_some(Message::MarkAllRead))
        .style(styles::button::link);
    let reload = button(Text::new(i18n.tr("history-reload")).size(typography::CAPTION))
        .on_press(Message::Reload)
        .style(styles::button::link);
    let delete_all = button(Text::new(i18n.tr("history-delete-all")).size(typography::CAPTION))
        .on_press_maybe(
            (has_items || !state.pending().is_empty()).then_some(Message::RequestBulkDelete),
        )
        .style(styles::button::danger);
    let close = button(Text::new(i18n.tr("history-close")).size(typography::CAPTION))
        .on_press(Message::Close)
        .style(styles::button::subtle);

    Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(title)
                .push(Space::new().width(Length::Fill))
                .push(close),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(mark_all)
                .push(reload)
                .push(Space::new().width(Length::Fill))
                .push(delete_all),
        )
        .into()
}

fn error_banner<'a>(error: &ApiError, i18n: &'a I18n) -> Element<'a, Message> {
    let message = match error {
        ApiError::Status(code) => {
            i18n.tr_with_args(error.i18n_key(), &[("status", &code.to_string())])
        }
        _ => i18n.tr(error.i18n_key()),
    };

    Container::new(Text::new(message).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::error_banner)
        .into()
}

fn row<'a>(state: &'a State, item: &'a NotificationItem, i18n: &'a I18n) -> Element<'a, Message> {
    let gesture = state.gesture(item.id);
    let display = item.display_message();

    let is_read = item.is_read;
    let title = Text::new(i18n.tr(item.kind.title_key()))
        .size(typography::TITLE_SM)
        .style(move |theme: &iced::Theme| text::Style {
            color: is_read.then(|| Color {
                a: opacity::READ_TEXT,
                ..theme.palette().text
            }),
        });
    let message = Text::new(display.text)
        .size(typography::BODY)
        .wrapping(text::Wrapping::WordOrGlyph);
    let sent_at = Text::new(format_sent_at(&item.sent_at)).size(typography::CAPTION);

    let mut body = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(title)
        .push(message)
        .push(sent_at);

    let mut actions = Row::new().spacing(spacing::XS);
    if !item.is_read {
        actions = actions.push(
            button(Text::new(i18n.tr("history-mark-read")).size(typography::CAPTION))
                .on_press(Message::MarkRead(item.id))
                .style(styles::button::link),
        );
    }
    if let Some(booking) = display.booking {
        actions = actions.push(
            button(Text::new(i18n.tr("history-view-booking")).size(typography::CAPTION))
                .on_press(Message::OpenBooking(booking))
                .style(styles::button::link),
        );
    }
    if gesture.shows_delete_affordance() && !gesture.is_dragging() {
        actions = actions.push(
            button(Text::new(i18n.tr("history-delete")).size(typography::CAPTION))
                .on_press(Message::DeleteRow(item.id))
                .style(styles::button::danger),
        );
    }
    body = body.push(actions);

    let mut line = Row::new().spacing(spacing::XS);
    if !item.is_read {
        line = line.push(
            Container::new(Space::new())
                .width(Length::Fixed(sizing::UNREAD_DOT))
                .height(Length::Fixed(sizing::UNREAD_DOT))
                .style(styles::container::unread_dot),
        );
    }
    line = line.push(body);

    let card = Container::new(line)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::row(item.is_read));

    let offset = gesture.offset();
    let mut swipe = Row::new()
        .width(Length::Fill)
        .height(Length::Shrink)
        .push(card);
    if offset.value() > 0.0 {
        let hint = if offset.exceeds_delete_threshold() {
            i18n.tr("history-swipe-release")
        } else {
            i18n.tr("history-swipe-hint")
        };
        swipe = swipe.push(
            Container::new(Text::new(hint).size(typography::CAPTION))
                .width(Length::Fixed(offset.value()))
                .height(Length::Fixed(sizing::ROW_MIN_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::swipe_strip(
                    offset.exceeds_delete_threshold(),
                )),
        );
    }

    mouse_area(swipe)
        .on_enter(Message::RowEntered(item.id))
        .on_exit(Message::RowExited(item.id))
        .on_press(Message::RowPressed(item.id))
        .into()
}

fn footer<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let feed = state.feed();
    let content: Element<'a, Message> = if feed.is_loading() {
        Text::new(i18n.tr("history-loading"))
            .size(typography::CAPTION)
            .into()
    } else if feed.is_empty() {
        Text::new(i18n.tr("history-empty"))
            .size(typography::BODY)
            .into()
    } else if feed.is_exhausted() {
        Text::new(i18n.tr("history-end"))
            .size(typography::CAPTION)
            .into()
    } else {
        button(Text::new(i18n.tr("history-load-more")).size(typography::BODY))
            .on_press(Message::LoadMore)
            .style(styles::button::primary)
            .into()
    };

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn confirm_dialog<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let count = (state.feed().items().len() + state.pending().len()).to_string();

    let dialog = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("bulk-confirm-title")).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr_with_args("bulk-confirm-body", &[("count", &count)]))
                .size(typography::BODY),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(Space::new().width(Length::Fill))
                .push(
                    button(Text::new(i18n.tr("bulk-confirm-no")))
                        .on_press(Message::CancelBulkDelete)
                        .style(styles::button::subtle),
                )
                .push(
                    button(Text::new(i18n.tr("bulk-confirm-yes")))
                        .on_press(Message::ConfirmBulkDelete)
                        .style(styles::button::danger),
                ),
        );

    let card = Container::new(dialog)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::toast);

    opaque(
        center(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim),
    )
}
