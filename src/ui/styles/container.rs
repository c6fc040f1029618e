// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface of the history panel and dialogs, derived from the theme.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Navbar strip.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// One notification row. Unread rows carry a brand-tinted background.
pub fn row(is_read: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let background = if is_read {
            palette.background.base.color
        } else {
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::UNREAD_500
            }
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: palette.background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Strip revealed behind a swiped row; solid once release would delete.
pub fn swipe_strip(delete_ready: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = if delete_ready {
            1.0
        } else {
            opacity::SWIPE_HINT
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::DANGER_500
            })),
            text_color: Some(palette::WHITE),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Backdrop dimming the panel behind the bulk-delete prompt.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SCRIM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Toast card with a brand accent border.
pub fn toast(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette::BRAND_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Unread-count badge on the bell.
pub fn badge(pulsing: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(if pulsing {
            palette::WARNING_500
        } else {
            palette::DANGER_500
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small dot marking unread rows.
pub fn unread_dot(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::UNREAD_500)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline error banner of the history panel.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::DANGER_500
        })),
        border: Border {
            color: palette::DANGER_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_rows_are_tinted() {
        let read = row(true)(&Theme::Light);
        let unread = row(false)(&Theme::Light);
        assert_ne!(read.background, unread.background);
    }

    #[test]
    fn swipe_strip_is_solid_when_delete_ready() {
        let ready = swipe_strip(true)(&Theme::Dark);
        match ready.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn pulsing_badge_changes_color() {
        assert_ne!(
            badge(true)(&Theme::Light).background,
            badge(false)(&Theme::Light).background
        );
    }
}
