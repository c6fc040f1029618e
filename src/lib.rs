// SPDX-License-Identifier: MPL-2.0
//! `front_desk` is the administrative notification panel of a hotel-management
//! back office, built with the Iced GUI framework.
//!
//! It polls the unread counter behind the bell, pages through the notification
//! history, and lets staff swipe rows away with a short undo window before the
//! deletion is committed to the backend.

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[doc(hidden)]
pub mod test_utils;
