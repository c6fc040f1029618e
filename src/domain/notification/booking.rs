// SPDX-License-Identifier: MPL-2.0
//! Booking reference embedded in notification messages.
//!
//! The backend appends `||bookingId=<digits>` to a message when it concerns a
//! booking. The marker is never shown; its id drives a "view booking" action.

/// Marker prefix preceding the booking id.
pub const BOOKING_MARKER: &str = "||bookingId=";

/// Booking id extracted from a notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingReference(u64);

impl BookingReference {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Message text ready for display, with the marker removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessage {
    pub text: String,
    pub booking: Option<BookingReference>,
}

impl DisplayMessage {
    /// Splits a raw message into display text and optional booking reference.
    ///
    /// A marker without digits, or with an id that does not fit in `u64`,
    /// is not a reference: the message is returned unchanged.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let Some(start) = raw.find(BOOKING_MARKER) else {
            return Self::plain(raw);
        };

        let after = &raw[start + BOOKING_MARKER.len()..];
        let digits_len = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());
        let Ok(id) = after[..digits_len].parse::<u64>() else {
            return Self::plain(raw);
        };

        let before = raw[..start].trim_end();
        let rest = after[digits_len..].trim();
        let text = if rest.is_empty() {
            before.to_string()
        } else {
            format!("{before} {rest}")
        };

        Self {
            text,
            booking: Some(BookingReference(id)),
        }
    }

    fn plain(raw: &str) -> Self {
        Self {
            text: raw.to_string(),
            booking: None,
        }
    }
}
