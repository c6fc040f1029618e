// SPDX-License-Identifier: MPL-2.0
//! Undo toasts for soft-deleted notifications.
//!
//! Each toast mirrors one pending deletion: it is created, replaced and
//! removed only by the soft-delete manager, so a toast never outlives the
//! deletion it offers to undo.
//!
//! # Components
//!
//! - [`undo_toast`] - `UndoToast` data (label and expiry)
//! - [`manager`] - `Manager` limiting visible toasts and queuing the rest
//! - [`toast`] - Toast widget with an Undo button and a countdown
//!
//! # Design Considerations
//!
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner
//! - No dismiss button: closing a toast without undoing is what expiry does

mod manager;
mod toast;
mod undo_toast;

pub use manager::Manager;
pub use toast::{view_overlay, Message};
pub use undo_toast::UndoToast;
