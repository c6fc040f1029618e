// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the bell, the navbar and
//! the notification history.
//!
//! The `App` struct wires together the notification directory, localization,
//! diagnostics and persisted preferences, and translates component effects
//! into side effects like config persistence or the booking focus.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{ApiError, SharedDirectory};
use crate::config::{self, Config, DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY};
use crate::diagnostics::{
    BufferCapacity, DiagnosticsCollector, DiagnosticsHandle, WarningEvent, WarningType,
};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{HttpDirectory, OfflineDirectory};
use crate::ui::bell::Bell;
use crate::ui::history;
use crate::ui::theming::ThemeMode;
use iced::{window, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    directory: SharedDirectory,
    diagnostics: DiagnosticsCollector,
    diagnostics_handle: DiagnosticsHandle,
    bell: Bell,
    history: history::State,
    theme_mode: ThemeMode,
    /// Whether the language dropdown is open.
    language_menu_open: bool,
    /// Booking broadcast by the last "view booking" action.
    booking_focus: Option<u64>,
    /// I18n key of the startup notice shown in the navbar.
    notice: Option<String>,
    /// Time of the message being processed; views render against it.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("directory", &self.directory)
            .field("history_open", &self.history.is_open())
            .field("unread", &self.bell.count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 600;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the notification directory for `config`, with `api_url`
/// overriding the configured base URL.
///
/// Falls back to an [`OfflineDirectory`] carrying the error when the HTTP
/// client cannot be built.
fn build_directory(config: &Config, api_url: Option<String>) -> (SharedDirectory, Option<ApiError>) {
    let mut api = config.api.clone();
    if let Some(url) = api_url {
        api.base_url = url;
    }

    match HttpDirectory::new(&api) {
        Ok(directory) => (Arc::new(directory), None),
        Err(error) => (Arc::new(OfflineDirectory::new(error.clone())), Some(error)),
    }
}

impl App {
    /// Initializes application state and starts the unread-count poller.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::new(
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        ));
        let diagnostics_handle = diagnostics.handle();

        if let Some(key) = &config_warning {
            diagnostics_handle.log_warning(WarningEvent::new(
                WarningType::ConfigurationIssue,
                format!("settings file ignored, using defaults ({key})"),
            ));
        }

        let (directory, directory_error) = build_directory(&config, flags.api_url);
        if let Some(error) = &directory_error {
            diagnostics_handle.log_warning(WarningEvent::new(
                WarningType::ConfigurationIssue,
                format!("notification API unavailable: {error}"),
            ));
        }

        let notice = directory_error
            .map(|error| error.i18n_key().to_string())
            .or(config_warning);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            history: history::State::new(config.feed.page_size()),
            config,
            directory,
            diagnostics,
            diagnostics_handle,
            bell: Bell::new(),
            language_menu_open: false,
            booking_focus: None,
            notice,
            now: Instant::now(),
        };

        let task = app.bell.start(&app.directory).map(Message::Bell);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match self.bell.count() {
            0 => app_name,
            count => format!("({count}) {app_name}"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationId;
    use crate::test_utils::{sample_items, InMemoryDirectory};
    use crate::ui::history::feed::LoadRequest;

    fn test_app(directory: SharedDirectory) -> App {
        let config = Config::default();
        let diagnostics = DiagnosticsCollector::with_echo(BufferCapacity::new(32), false);
        let diagnostics_handle = diagnostics.handle();
        App {
            i18n: I18n::default(),
            theme_mode: config.general.theme_mode,
            history: history::State::new(config.feed.page_size()),
            config,
            directory,
            diagnostics,
            diagnostics_handle,
            bell: Bell::new(),
            language_menu_open: false,
            booking_focus: None,
            notice: None,
            now: Instant::now(),
        }
    }

    #[test]
    fn close_request_stops_polling_and_commits_pending_deletes() {
        let directory: SharedDirectory = Arc::new(InMemoryDirectory::with_items(sample_items(2)));
        let mut app = test_app(directory);
        let _ = app.bell.start(&app.directory);
        let ctx = history::Context {
            directory: &app.directory,
            diagnostics: &app.diagnostics_handle,
            now: app.now,
        };
        let _ = app.history.open(&ctx);
        let loaded = history::Message::Loaded {
            request: LoadRequest {
                top: 30,
                append: false,
                generation: 1,
            },
            result: Ok(sample_items(2)),
        };
        let _ = app.history.handle_message(loaded, &ctx);
        let _ = app
            .history
            .handle_message(history::Message::DeleteRow(NotificationId::new(1)), &ctx);

        let _ = app.shutdown(window::Id::unique());

        assert!(!app.bell.is_active());
        assert!(!app.history.is_open());
        assert!(app.history.pending().is_empty());
        assert_eq!(app.history.in_flight_deletes(), vec![NotificationId::new(1)]);
    }

    #[test]
    fn window_waits_for_close_request() {
        assert!(!window_settings().exit_on_close_request);
    }

    #[test]
    fn invalid_api_url_falls_back_to_offline_directory() {
        let (_directory, error) =
            build_directory(&Config::default(), Some("ftp://hotel.example".into()));

        assert!(matches!(error, Some(ApiError::InvalidConfig(_))));
    }

    #[test]
    fn default_config_builds_http_directory() {
        let (directory, error) = build_directory(&Config::default(), None);

        assert!(error.is_none());
        assert!(format!("{directory:?}").contains("HttpDirectory"));
    }

    #[test]
    fn api_url_flag_overrides_config() {
        let (directory, error) =
            build_directory(&Config::default(), Some("https://hotel.example/api".into()));

        assert!(error.is_none());
        assert!(format!("{directory:?}").contains("hotel.example"));
    }
}
