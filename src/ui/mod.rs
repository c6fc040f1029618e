// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`bell`] - Notification bell and unread counter poller
//! - [`history`] - Notification history with paging, swipe-to-delete and undo
//! - [`toasts`] - Undo toasts for soft-deleted notifications
//! - [`navbar`] - Navigation bar with language switcher and theme toggle
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod bell;
pub mod design_tokens;
pub mod history;
pub mod navbar;
pub mod styles;
pub mod theming;
pub mod toasts;
