// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use super::DisplayMessage;

/// Server-assigned notification identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NotificationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Category tag of a notification, used to derive its display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    BookingCreated,
    BookingUpdated,
    BookingCancelled,
    PaymentReceived,
    CheckIn,
    CheckOut,
    Review,
    System,
    /// Tag the client does not know; shown with a generic title.
    Other(String),
}

impl NotificationKind {
    /// Parses a backend type tag.
    ///
    /// Matching ignores case and the separators `_`, `-` and space, so
    /// `booking_created`, `BookingCreated` and `booking-created` are equal.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let normalized: String = tag
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "booking" | "bookingcreated" | "newbooking" => Self::BookingCreated,
            "bookingupdated" | "bookingchanged" => Self::BookingUpdated,
            "bookingcancelled" | "bookingcanceled" | "cancellation" => Self::BookingCancelled,
            "payment" | "paymentreceived" => Self::PaymentReceived,
            "checkin" => Self::CheckIn,
            "checkout" => Self::CheckOut,
            "review" | "reviewposted" => Self::Review,
            "system" => Self::System,
            _ => Self::Other(tag.to_string()),
        }
    }

    /// Returns the i18n key of the title shown for this kind.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::BookingCreated => "notification-kind-booking-created",
            Self::BookingUpdated => "notification-kind-booking-updated",
            Self::BookingCancelled => "notification-kind-booking-cancelled",
            Self::PaymentReceived => "notification-kind-payment-received",
            Self::CheckIn => "notification-kind-check-in",
            Self::CheckOut => "notification-kind-check-out",
            Self::Review => "notification-kind-review",
            Self::System => "notification-kind-system",
            Self::Other(_) => "notification-kind-generic",
        }
    }
}

/// One entry of the notification feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: NotificationId,
    pub kind: NotificationKind,
    /// Free text, possibly carrying a booking marker.
    pub message: String,
    pub is_read: bool,
    /// Timestamp as sent by the backend (ISO-8601 expected).
    pub sent_at: String,
}

impl NotificationItem {
    /// Returns the message split into display text and booking reference.
    #[must_use]
    pub fn display_message(&self) -> DisplayMessage {
        DisplayMessage::parse(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing_ignores_case_and_separators() {
        assert_eq!(
            NotificationKind::from_tag("booking_created"),
            NotificationKind::BookingCreated
        );
        assert_eq!(
            NotificationKind::from_tag("BookingCreated"),
            NotificationKind::BookingCreated
        );
        assert_eq!(
            NotificationKind::from_tag("check-in"),
            NotificationKind::CheckIn
        );
        assert_eq!(
            NotificationKind::from_tag("Booking Canceled"),
            NotificationKind::BookingCancelled
        );
    }

    #[test]
    fn unknown_kind_keeps_tag_and_uses_generic_title() {
        let kind = NotificationKind::from_tag("HousekeepingAlert");
        assert_eq!(kind, NotificationKind::Other("HousekeepingAlert".to_string()));
        assert_eq!(kind.title_key(), "notification-kind-generic");
    }

    #[test]
    fn notification_id_displays_raw_value() {
        assert_eq!(NotificationId::new(42).to_string(), "42");
        assert_eq!(NotificationId::from(7).value(), 7);
    }
}
