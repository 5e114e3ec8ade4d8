// SPDX-License-Identifier: MPL-2.0
//! Page transition state.
//!
//! The pager never stores an index of its own: it observes the carousel
//! controller and only remembers the transition currently being animated.
//! Each redraw asks for a [`Frame`], which says how far the incoming card
//! still has to slide and how opaque it is.

use crate::application::carousel::{Direction, PositionChange, PositionObserver};
use crate::domain::ui::TransitionDuration;
use crate::ui::design_tokens::sizing;
use std::time::Instant;

/// Side of the viewport the incoming card enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

impl From<Direction> for Edge {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Next => Edge::Right,
            Direction::Previous => Edge::Left,
        }
    }
}

/// A running page transition.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    edge: Edge,
    started_at: Instant,
}

/// Rendering parameters for one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Remaining slide distance in logical pixels.
    pub offset: f32,
    /// Edge the card slides in from.
    pub edge: Edge,
    /// Card opacity in `[0, 1]`.
    pub opacity: f32,
}

impl Frame {
    /// The resting frame: card in place, fully opaque.
    pub const SETTLED: Frame = Frame {
        offset: 0.0,
        edge: Edge::Right,
        opacity: 1.0,
    };
}

/// Drives the slide-and-fade transition between exhibits.
#[derive(Debug, Clone)]
pub struct Pager {
    duration: TransitionDuration,
    transition: Option<Transition>,
}

impl Pager {
    #[must_use]
    pub fn new(duration: TransitionDuration) -> Self {
        Self {
            duration,
            transition: None,
        }
    }

    #[must_use]
    pub fn duration(&self) -> TransitionDuration {
        self.duration
    }

    /// Starts animating `change` at `now`, replacing any running transition.
    ///
    /// Changes that do not move (a one-exhibit gallery) and a zero duration
    /// settle immediately.
    pub fn begin(&mut self, change: &PositionChange, now: Instant) {
        if !change.is_move() || self.duration.is_instant() {
            self.transition = None;
            return;
        }
        self.transition = Some(Transition {
            edge: change.direction.into(),
            started_at: now,
        });
    }

    /// Returns whether a transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Advances the animation clock; drops the transition once it has finished.
    pub fn tick(&mut self, now: Instant) {
        if self.progress(now) >= 1.0 {
            self.transition = None;
        }
    }

    /// Linear progress of the running transition in `[0, 1]`; `1.0` when idle.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(transition) = self.transition else {
            return 1.0;
        };
        let total = self.duration.as_duration().as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(transition.started_at).as_secs_f32();
        (elapsed / total).clamp(0.0, 1.0)
    }

    /// Returns the frame to draw at `now`.
    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        let Some(transition) = self.transition else {
            return Frame::SETTLED;
        };
        let eased = ease_out_cubic(self.progress(now));
        Frame {
            offset: (1.0 - eased) * sizing::SLIDE_DISTANCE,
            edge: transition.edge,
            opacity: eased,
        }
    }
}

impl PositionObserver for Pager {
    fn position_changed(&mut self, change: &PositionChange) {
        self.begin(change, Instant::now());
    }
}

/// Decelerating curve: fast start, gentle landing.
fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
