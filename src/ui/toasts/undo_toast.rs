// SPDX-License-Identifier: MPL-2.0
//! Undo toast data.

use crate::domain::notification::NotificationId;
use std::time::{Duration, Instant};

/// Display-only projection of a pending deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoToast {
    id: NotificationId,
    /// Human label (notification text, marker stripped).
    label: String,
    expires_at: Instant,
}

impl UndoToast {
    #[must_use]
    pub fn new(id: NotificationId, label: impl Into<String>, expires_at: Instant) -> Self {
        Self {
            id,
            label: label.into(),
            expires_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Time left before expiry, zero once expired.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }

    /// Remaining whole seconds, rounded up so "1" shows until the very end.
    #[must_use]
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        self.remaining(now).as_millis().div_ceil(1_000) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_secs_rounds_up() {
        let now = Instant::now();
        let toast = UndoToast::new(NotificationId::new(1), "x", now + Duration::from_millis(4_001));
        assert_eq!(toast.remaining_secs(now), 5);
        assert_eq!(toast.remaining_secs(now + Duration::from_millis(4_000)), 1);
        assert_eq!(toast.remaining_secs(now + Duration::from_millis(4_001)), 0);
    }

    #[test]
    fn remaining_is_zero_after_expiry() {
        let now = Instant::now();
        let toast = UndoToast::new(NotificationId::new(1), "x", now);
        assert_eq!(toast.remaining(now + Duration::from_secs(1)), Duration::ZERO);
    }
}
