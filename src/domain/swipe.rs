// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-delete value objects.
//!
//! Offsets grow with leftward travel from the initial contact point.

use crate::config::{SWIPE_DELETE_THRESHOLD, SWIPE_MAX_OFFSET};

/// Leftward swipe distance, guaranteed to be within `[0, SWIPE_MAX_OFFSET]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeOffset(f32);

impl SwipeOffset {
    pub const ZERO: Self = Self(0.0);

    /// Creates an offset, clamping to the valid range. NaN becomes zero.
    #[must_use]
    pub fn new(distance: f32) -> Self {
        if distance.is_nan() {
            return Self::ZERO;
        }
        Self(distance.clamp(0.0, SWIPE_MAX_OFFSET))
    }

    /// Offset for a pointer that started at `start_x` and is now at `current_x`.
    #[must_use]
    pub fn from_travel(start_x: f32, current_x: f32) -> Self {
        Self::new(start_x - current_x)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether releasing at this offset deletes the row.
    #[must_use]
    pub fn exceeds_delete_threshold(self) -> bool {
        self.0 > SWIPE_DELETE_THRESHOLD
    }

    /// Fraction of the delete threshold covered, capped at 1.0.
    #[must_use]
    pub fn progress(self) -> f32 {
        (self.0 / SWIPE_DELETE_THRESHOLD).min(1.0)
    }
}
