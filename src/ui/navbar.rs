// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for the admin panel.
//!
//! Hosts the notification bell, the active booking focus, the language
//! switcher, the theme toggle and the configuration notice.

use crate::i18n::fluent::I18n;
use crate::ui::bell::{self, Bell};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};
use std::time::Instant;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub bell: &'a Bell,
    pub now: Instant,
    pub language_menu_open: bool,
    pub theme_mode: ThemeMode,
    /// Booking most recently opened from a notification.
    pub booking_focus: Option<u64>,
    /// I18n key of a notice to show until dismissed.
    pub notice: Option<&'a str>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Bell(bell::Message),
    ToggleLanguageMenu,
    SelectLanguage(String),
    CycleTheme,
    ClearBookingFocus,
    DismissNotice,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Bell(bell::Message),
    LanguageSelected(String),
    CycleTheme,
    ClearBookingFocus,
    DismissNotice,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, language_menu_open: &mut bool) -> Event {
    match message {
        Message::Bell(message) => Event::Bell(message),
        Message::ToggleLanguageMenu => {
            *language_menu_open = !*language_menu_open;
            Event::None
        }
        Message::SelectLanguage(locale) => {
            *language_menu_open = false;
            Event::LanguageSelected(locale)
        }
        Message::CycleTheme => Event::CycleTheme,
        Message::ClearBookingFocus => Event::ClearBookingFocus,
        Message::DismissNotice => Event::DismissNotice,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if let Some(key) = ctx.notice {
        content = content.push(build_notice(ctx.i18n, key));
    }

    if ctx.language_menu_open {
        content = content.push(build_language_menu(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let language_button = button(
        Text::new(ctx.i18n.tr("navbar-language")).size(typography::CAPTION),
    )
    .on_press(Message::ToggleLanguageMenu)
    .style(styles::button::subtle);

    let theme_label = ctx.i18n.tr_with_args(
        "navbar-theme",
        &[("mode", &ctx.i18n.tr(ctx.theme_mode.i18n_key()))],
    );
    let theme_button = button(Text::new(theme_label).size(typography::CAPTION))
        .on_press(Message::CycleTheme)
        .style(styles::button::subtle);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill));

    if let Some(booking_id) = ctx.booking_focus {
        let label = ctx
            .i18n
            .tr_with_args("navbar-booking-focus", &[("id", &booking_id.to_string())]);
        row = row.push(
            button(Text::new(label).size(typography::CAPTION))
                .on_press(Message::ClearBookingFocus)
                .style(styles::button::link),
        );
    }

    row = row
        .push(language_button)
        .push(theme_button)
        .push(ctx.bell.view(ctx.i18n, ctx.now).map(Message::Bell));

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::navbar)
        .into()
}

fn build_notice<'a>(i18n: &'a I18n, key: &str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr(key))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("navbar-dismiss")).size(typography::CAPTION))
                .on_press(Message::DismissNotice)
                .style(styles::button::link),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::error_banner)
        .into()
}

/// Build the dropdown listing every available language.
fn build_language_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.i18n.current_locale().to_string();

    let items = ctx.i18n.available_locales.iter().map(|locale| -> Element<'a, Message> {
        let tag = locale.to_string();
        let label = ctx.i18n.tr(&format!("language-name-{tag}"));
        let style: fn(&Theme, button::Status) -> button::Style = if tag == current {
            styles::button::primary
        } else {
            styles::button::subtle
        };
        button(Text::new(label).size(typography::BODY))
            .on_press(Message::SelectLanguage(tag))
            .padding([spacing::XXS, spacing::SM])
            .width(Length::Fill)
            .style(style)
            .into()
    });

    let menu = Column::with_children(items).spacing(spacing::XXS);

    let dropdown = Container::new(menu)
        .width(Length::Fixed(sizing::DIALOG_WIDTH / 2.0))
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        });

    Container::new(dropdown)
        .width(Length::Fill)
        .padding([0.0, spacing::MD])
        .align_x(Horizontal::Right)
        .into()
}
