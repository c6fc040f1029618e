// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button for the main action of a surface.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::BRAND_500, palette::BRAND_400, status)
}

/// Filled red button for destructive confirmations.
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::DANGER_500,
        Color {
            a: opacity::OVERLAY_HOVER_DANGER,
            ..palette::DANGER_500
        },
        status,
    )
}

fn filled(base: Color, hovered: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => hovered,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base
        },
        button::Status::Active | button::Status::Pressed => base,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button that only shows a background on hover.
pub fn subtle(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };
    let text_color = if status == button::Status::Disabled {
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base.text
        }
    } else {
        base.text
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only brand link, used for "View booking" and "Undo".
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_400,
        button::Status::Active => palette::BRAND_500,
        button::Status::Disabled => palette::GRAY_400,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn danger_button_is_red() {
        let style = danger(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::DANGER_500))
        );
    }

    #[test]
    fn subtle_button_is_transparent_at_rest() {
        let style = subtle(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
    }

    #[test]
    fn disabled_primary_is_faded() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }
}
