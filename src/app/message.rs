// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::bell;
use crate::ui::history;
use crate::ui::navbar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// Unread-count poll chain.
    Bell(bell::Message),
    History(history::Message),
    /// Periodic tick draining diagnostics and expiring the bell pulse.
    Tick(Instant),
    /// The user asked to close the window; polling stops and pending
    /// deletions are committed before it closes.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `vi`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FRONT_DESK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional backend base URL for this session only.
    pub api_url: Option<String>,
}
