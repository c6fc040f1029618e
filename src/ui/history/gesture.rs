// SPDX-License-Identifier: MPL-2.0
//! Per-row swipe and hover-dwell state machine.
//!
//! A row reveals its delete affordance after a continuous hover of
//! [`HOVER_DWELL_MS`], and can be swiped left to delete. Releasing past the
//! threshold deletes; releasing before it snaps the row back.
//!
//! ```text
//!           hover 3s                 press
//!   Idle ───────────────▶ Armed ─────────────┐
//!    │ ▲                    │ leave          ▼
//!    │ └────────────────────┘           Dragging ◀──┐
//!    │ press                              │  ▲      │ offset ≤ 110
//!    └───────────────────────────────────▶│  │      │
//!                                offset > 110│      │
//!                                         ▼  │      │
//!                                      DeleteReady ─┘
//!                                         │ release
//!                                         ▼
//!                                      (delete)
//! ```
//!
//! The machine is pure: [`RowGesture::transition`] takes the current time
//! explicitly and performs no I/O, it only reports [`Effect::Delete`].

use crate::config::HOVER_DWELL_MS;
use crate::domain::swipe::SwipeOffset;
use std::time::{Duration, Instant};

const HOVER_DWELL: Duration = Duration::from_millis(HOVER_DWELL_MS);

/// Visible phase of a row gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Hover dwell elapsed; delete affordance revealed.
    Armed,
    /// Pointer or finger down, offset below the threshold.
    Dragging,
    /// Offset beyond the threshold; release deletes.
    DeleteReady,
}

/// Input delivered to a row gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    HoverEnter,
    HoverLeave,
    /// Periodic tick used to complete hover dwells.
    Tick,
    /// Pointer-down or touch-start at horizontal position `x`.
    Press { x: f32 },
    /// Pointer or finger moved to horizontal position `x`.
    Move { x: f32 },
    /// Pointer-up or touch-end.
    Release,
    /// The contact was lost (touch cancelled, window unfocused).
    Cancel,
}

/// Effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Release happened while delete-ready: soft-delete the row.
    Delete,
}

/// Gesture state of a single row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowGesture {
    phase: Phase,
    hovered: bool,
    /// Start of the current uninterrupted hover, while the dwell is running.
    hover_since: Option<Instant>,
    /// Dwell completed; survives a drag so a snap-back can return to Armed.
    armed: bool,
    start_x: f32,
    offset: SwipeOffset,
}

impl RowGesture {
    /// Applies `event` at time `now`, returning the new state and its effect.
    #[must_use]
    pub fn transition(mut self, event: Event, now: Instant) -> (Self, Effect) {
        let effect = match event {
            Event::HoverEnter => {
                self.hovered = true;
                if !self.armed && !self.is_dragging() && self.hover_since.is_none() {
                    self.hover_since = Some(now);
                }
                Effect::None
            }
            Event::HoverLeave => {
                self.hovered = false;
                self.hover_since = None;
                if !self.is_dragging() {
                    self.phase = Phase::Idle;
                    self.armed = false;
                    self.offset = SwipeOffset::ZERO;
                }
                Effect::None
            }
            Event::Tick => {
                let dwell_done = self
                    .hover_since
                    .is_some_and(|since| now.saturating_duration_since(since) >= HOVER_DWELL);
                if self.phase == Phase::Idle && self.hovered && dwell_done {
                    self.phase = Phase::Armed;
                    self.armed = true;
                    self.hover_since = None;
                }
                Effect::None
            }
            Event::Press { x } => {
                if matches!(self.phase, Phase::Idle | Phase::Armed) {
                    self.phase = Phase::Dragging;
                    self.start_x = x;
                    self.offset = SwipeOffset::ZERO;
                    self.hover_since = None;
                }
                Effect::None
            }
            Event::Move { x } => {
                if self.is_dragging() {
                    self.offset = SwipeOffset::from_travel(self.start_x, x);
                    self.phase = if self.offset.exceeds_delete_threshold() {
                        Phase::DeleteReady
                    } else {
                        Phase::Dragging
                    };
                }
                Effect::None
            }
            Event::Release => match self.phase {
                Phase::DeleteReady => {
                    self = Self::default();
                    Effect::Delete
                }
                Phase::Dragging => {
                    self.snap_back(now);
                    Effect::None
                }
                Phase::Idle | Phase::Armed => Effect::None,
            },
            Event::Cancel => {
                if self.is_dragging() {
                    self.snap_back(now);
                }
                Effect::None
            }
        };
        (self, effect)
    }

    /// In-place variant of [`transition`](Self::transition).
    pub fn handle(&mut self, event: Event, now: Instant) -> Effect {
        let (next, effect) = self.transition(event, now);
        *self = next;
        effect
    }

    fn snap_back(&mut self, now: Instant) {
        self.offset = SwipeOffset::ZERO;
        self.armed = self.armed && self.hovered;
        self.phase = if self.armed {
            Phase::Armed
        } else {
            Phase::Idle
        };
        if self.hovered && !self.armed {
            self.hover_since = Some(now);
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn offset(&self) -> SwipeOffset {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging | Phase::DeleteReady)
    }

    /// Returns whether the delete affordance should be visible.
    #[must_use]
    pub fn shows_delete_affordance(&self) -> bool {
        self.armed || self.phase != Phase::Idle
    }

    /// Returns whether a hover dwell is running and needs ticks to complete.
    #[must_use]
    pub fn awaiting_dwell(&self) -> bool {
        self.hover_since.is_some()
    }

    /// Returns whether this row holds no state worth keeping.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn run(events: &[(Event, u64)]) -> (RowGesture, Vec<Effect>) {
        let origin = Instant::now();
        let mut gesture = RowGesture::default();
        let effects = events
            .iter()
            .map(|(event, at)| gesture.handle(*event, origin + ms(*at)))
            .collect();
        (gesture, effects)
    }

    #[test]
    fn hover_dwell_of_exactly_three_seconds_arms() {
        let (gesture, _) = run(&[(Event::HoverEnter, 0), (Event::Tick, 3_000)]);
        assert_eq!(gesture.phase(), Phase::Armed);
        assert!(gesture.shows_delete_affordance());
        assert!(!gesture.awaiting_dwell());
    }

    #[test]
    fn tick_before_dwell_does_not_arm() {
        let (gesture, _) = run(&[(Event::HoverEnter, 0), (Event::Tick, 2_999)]);
        assert_eq!(gesture.phase(), Phase::Idle);
        assert!(gesture.awaiting_dwell());
    }

    #[test]
    fn leaving_before_dwell_never_arms() {
        let (gesture, _) = run(&[
            (Event::HoverEnter, 0),
            (Event::HoverLeave, 2_900),
            (Event::HoverEnter, 2_950),
            (Event::Tick, 3_100),
        ]);
        assert_eq!(gesture.phase(), Phase::Idle);
    }

    #[test]
    fn repeated_hover_enter_does_not_restart_dwell() {
        let (gesture, _) = run(&[
            (Event::HoverEnter, 0),
            (Event::HoverEnter, 1_500),
            (Event::Tick, 3_000),
        ]);
        assert_eq!(gesture.phase(), Phase::Armed);
    }

    #[test]
    fn leaving_armed_row_resets() {
        let (gesture, _) = run(&[
            (Event::HoverEnter, 0),
            (Event::Tick, 3_000),
            (Event::HoverLeave, 3_500),
        ]);
        assert!(gesture.is_at_rest());
    }

    #[test]
    fn drag_at_threshold_snaps_back_without_delete() {
        let (gesture, effects) = run(&[
            (Event::Press { x: 300.0 }, 0),
            (Event::Move { x: 190.0 }, 10),
            (Event::Release, 20),
        ]);
        assert!(effects.iter().all(|e| *e == Effect::None));
        assert_eq!(gesture.offset(), SwipeOffset::ZERO);
        assert_eq!(gesture.phase(), Phase::Idle);
    }

    #[test]
    fn drag_past_threshold_deletes_on_release() {
        let (gesture, effects) = run(&[
            (Event::Press { x: 300.0 }, 0),
            (Event::Move { x: 189.0 }, 10),
        ]);
        assert_eq!(gesture.phase(), Phase::DeleteReady);
        assert!(effects.iter().all(|e| *e == Effect::None));

        let (gesture, effect) = gesture.transition(Event::Release, Instant::now());
        assert_eq!(effect, Effect::Delete);
        assert!(gesture.is_at_rest());
    }

    #[test]
    fn moving_back_below_threshold_cancels_delete_ready() {
        let (gesture, effects) = run(&[
            (Event::Press { x: 300.0 }, 0),
            (Event::Move { x: 150.0 }, 10),
            (Event::Move { x: 250.0 }, 20),
            (Event::Release, 30),
        ]);
        assert_eq!(effects.last(), Some(&Effect::None));
        assert_eq!(gesture.phase(), Phase::Idle);
    }

    #[test]
    fn offset_stays_clamped_under_erratic_input() {
        let origin = Instant::now();
        let mut gesture = RowGesture::default();
        gesture.handle(Event::Press { x: 500.0 }, origin);
        for x in [900.0, -4_000.0, 499.0, 10_000.0, 0.0, f32::MAX, f32::MIN] {
            gesture.handle(Event::Move { x }, origin);
            let offset = gesture.offset().value();
            assert!((0.0..=180.0).contains(&offset), "offset {offset} for x={x}");
        }
    }

    #[test]
    fn rightward_drag_keeps_zero_offset() {
        let (gesture, _) = run(&[(Event::Press { x: 100.0 }, 0), (Event::Move { x: 170.0 }, 5)]);
        assert_eq!(gesture.offset(), SwipeOffset::ZERO);
        assert_eq!(gesture.phase(), Phase::Dragging);
    }

    #[test]
    fn snap_back_keeps_armed_while_hovered() {
        let (gesture, _) = run(&[
            (Event::HoverEnter, 0),
            (Event::Tick, 3_000),
            (Event::Press { x: 300.0 }, 3_100),
            (Event::Move { x: 250.0 }, 3_200),
            (Event::Release, 3_300),
        ]);
        assert_eq!(gesture.phase(), Phase::Armed);
    }

    #[test]
    fn snap_back_after_leaving_mid_drag_returns_to_idle() {
        let (gesture, _) = run(&[
            (Event::HoverEnter, 0),
            (Event::Tick, 3_000),
            (Event::Press { x: 300.0 }, 3_100),
            (Event::HoverLeave, 3_150),
            (Event::Move { x: 250.0 }, 3_200),
            (Event::Release, 3_300),
        ]);
        assert_eq!(gesture.phase(), Phase::Idle);
        assert!(!gesture.shows_delete_affordance());
    }

    #[test]
    fn leaving_mid_drag_keeps_dragging() {
        let (gesture, _) = run(&[
            (Event::Press { x: 300.0 }, 0),
            (Event::HoverLeave, 10),
            (Event::Move { x: 100.0 }, 20),
        ]);
        assert_eq!(gesture.phase(), Phase::DeleteReady);
    }

    #[test]
    fn cancel_never_deletes() {
        let (gesture, effects) = run(&[
            (Event::Press { x: 300.0 }, 0),
            (Event::Move { x: 0.0 }, 10),
            (Event::Cancel, 20),
        ]);
        assert!(effects.iter().all(|e| *e == Effect::None));
        assert_eq!(gesture.offset(), SwipeOffset::ZERO);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let (gesture, effects) = run(&[(Event::Release, 0), (Event::Move { x: 0.0 }, 5)]);
        assert_eq!(effects, vec![Effect::None, Effect::None]);
        assert!(gesture.is_at_rest());
    }

    #[test]
    fn dwell_restarts_after_snap_back_while_hovered() {
        let (gesture, _) = run(&[
            (Event::HoverEnter, 0),
            (Event::Press { x: 300.0 }, 1_000),
            (Event::Release, 1_100),
            (Event::Tick, 3_500),
        ]);
        assert_eq!(gesture.phase(), Phase::Idle);

        let (gesture, _) = run(&[
            (Event::HoverEnter, 0),
            (Event::Press { x: 300.0 }, 1_000),
            (Event::Release, 1_100),
            (Event::Tick, 4_100),
        ]);
        assert_eq!(gesture.phase(), Phase::Armed);
    }
}
