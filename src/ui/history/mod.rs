// SPDX-License-Identifier: MPL-2.0
//! Notification history panel.
//!
//! - [`feed`]: prefix paging with exhaustion detection
//! - [`gesture`]: hover-dwell and swipe-to-delete per row
//! - [`pending`]: soft deletions inside their undo window
//! - [`bulk`]: confirmation before deleting everything
//! - [`component`]: the panel state tying them together

pub mod bulk;
pub mod component;
pub mod feed;
pub mod gesture;
pub mod pending;
mod view;

pub use component::{Context, Effect, Message, PointerEvent, State};
pub use view::{format_sent_at, view};
