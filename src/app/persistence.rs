// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Saves the language and theme preferences when they change in the navbar.

use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use crate::i18n::fluent::I18n;
use unic_langid::LanguageIdentifier;

/// Writes `config` to disk, logging failures.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the handlers directly and must not touch the user's settings file.
pub fn persist_config(config: &Config, diagnostics: &DiagnosticsHandle) {
    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(config) {
        diagnostics.log_warning(WarningEvent::new(
            WarningType::ConfigurationIssue,
            format!("failed to save settings: {error}"),
        ));
    }
}

/// Applies the newly selected locale and records it in `config`.
///
/// Returns `false` when `tag` is not one of the bundled languages.
pub fn apply_language_change(i18n: &mut I18n, config: &mut Config, tag: &str) -> bool {
    let Ok(locale) = tag.parse::<LanguageIdentifier>() else {
        return false;
    };
    if !i18n.available_locales.contains(&locale) {
        return false;
    }
    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_change_updates_i18n_and_config() {
        let mut config = Config::default();
        let mut i18n = I18n::new(Some("en-US".into()), &config);

        assert!(apply_language_change(&mut i18n, &mut config, "vi"));

        assert_eq!(i18n.current_locale().to_string(), "vi");
        assert_eq!(config.general.language.as_deref(), Some("vi"));
    }

    #[test]
    fn unknown_or_invalid_language_is_rejected() {
        let mut config = Config::default();
        let mut i18n = I18n::default();

        assert!(!apply_language_change(&mut i18n, &mut config, "not a tag!"));
        assert!(!apply_language_change(&mut i18n, &mut config, "ja"));
        assert!(config.general.language.is_none());
    }
}
