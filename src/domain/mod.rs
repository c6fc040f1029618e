// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`notification`]: Notification types ([`NotificationId`](notification::NotificationId),
//!   [`NotificationItem`](notification::NotificationItem),
//!   [`NotificationKind`](notification::NotificationKind),
//!   [`DisplayMessage`](notification::DisplayMessage))
//! - [`swipe`]: Row swipe value objects ([`SwipeOffset`](swipe::SwipeOffset))

pub mod notification;
pub mod swipe;
