// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`directory`]: Notification backend (unread count, feed, read state, delete)
//!
//! # Design Notes
//!
//! - Methods return boxed `'static` futures so callers can hand them to
//!   `iced::Task::perform` without borrowing the adapter
//! - Traits are `Send + Sync` so a single adapter can be shared behind an `Arc`

pub mod directory;

pub use directory::{ApiError, ApiResult, NotificationDirectory, SharedDirectory};
