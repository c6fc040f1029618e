// SPDX-License-Identifier: MPL-2.0
//! Light, dark, or system-following theme selection.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Returns the Iced theme to render with.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Next mode in the navbar toggle cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    /// i18n key of the toggle label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_system() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        // System mode depends on the desktop; it must just not panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn cycle_visits_every_mode() {
        let start = ThemeMode::System;
        assert_eq!(start.next().next().next(), start);
        assert_ne!(start.next(), start);
    }

    #[test]
    fn serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .expect("serialize");
        assert_eq!(text.trim(), "mode = \"dark\"");
    }
}
