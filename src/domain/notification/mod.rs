// SPDX-License-Identifier: MPL-2.0
//! Notification types as seen by the admin panel.
//!
//! The backend owns notifications; the client holds a read-only projection
//! that it mutates optimistically (read flag, removal) and reconciles by
//! re-fetching.

mod booking;
mod item;

pub use booking::{BookingReference, DisplayMessage, BOOKING_MARKER};
pub use item::{NotificationId, NotificationItem, NotificationKind};
