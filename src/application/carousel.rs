// SPDX-License-Identifier: MPL-2.0
//! Carousel controller: the single source of truth for the displayed exhibit.
//!
//! The controller owns the [`Gallery`] and the current [`Position`]. Positions
//! only change through [`Carousel::next`] and [`Carousel::previous`], both of
//! which wrap around, so the position is always a valid index.
//!
//! Every change is published as a [`PositionChange`]. The view layer listens
//! by implementing [`PositionObserver`] and is handed each change through
//! [`publish`]; it never keeps an index of its own.

use crate::domain::gallery::{Exhibit, Gallery, Position};
use std::num::NonZeroUsize;

/// Direction of a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Advance to the following exhibit.
    Next,
    /// Retreat to the preceding exhibit.
    Previous,
}

/// A position transition published by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionChange {
    pub from: Position,
    pub to: Position,
    pub direction: Direction,
}

impl PositionChange {
    /// Returns whether the displayed exhibit actually changed.
    ///
    /// A one-exhibit gallery cycles onto itself.
    #[must_use]
    pub fn is_move(&self) -> bool {
        self.from != self.to
    }
}

/// Subscriber to carousel position changes.
pub trait PositionObserver {
    fn position_changed(&mut self, change: &PositionChange);
}

/// Hands `change` to every observer, in order.
pub fn publish(change: &PositionChange, observers: &mut [&mut dyn PositionObserver]) {
    for observer in observers.iter_mut() {
        observer.position_changed(change);
    }
}

/// Navigation state snapshot for UI rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Current position in the gallery (0-indexed).
    pub current_index: usize,
    /// Total number of exhibits.
    pub total_count: usize,
}

/// Paging controller over a fixed, non-empty gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    gallery: Gallery,
    position: Position,
}

impl Carousel {
    /// Creates a controller positioned on the first exhibit.
    #[must_use]
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            position: Position::FIRST,
        }
    }

    /// Moves to the following exhibit, wrapping from the last to the first.
    pub fn next(&mut self) -> PositionChange {
        self.navigate(Direction::Next)
    }

    /// Moves to the preceding exhibit, wrapping from the first to the last.
    pub fn previous(&mut self) -> PositionChange {
        self.navigate(Direction::Previous)
    }

    /// Moves one step in `direction`.
    pub fn navigate(&mut self, direction: Direction) -> PositionChange {
        let from = self.position;
        let len = self.gallery.len();
        self.position = match direction {
            Direction::Next => from.successor(len),
            Direction::Previous => from.predecessor(len),
        };
        PositionChange {
            from,
            to: self.position,
            direction,
        }
    }

    /// Returns the exhibit at the current position.
    #[must_use]
    pub fn current_exhibit(&self) -> &Exhibit {
        self.gallery.exhibit(self.position)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        self.gallery.len()
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Returns a snapshot of the navigation state.
    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        NavigationInfo {
            current_index: self.position.index(),
            total_count: self.gallery.len().get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::AssetId;

    fn carousel(titles: &[&str]) -> Carousel {
        let exhibits = titles
            .iter()
            .map(|title| Exhibit::new(AssetId::new(format!("{title}.svg")), *title, "artist", 2020))
            .collect();
        Carousel::new(Gallery::new(exhibits).expect("non-empty gallery"))
    }

    #[derive(Default)]
    struct Recorder(Vec<PositionChange>);

    impl PositionObserver for Recorder {
        fn position_changed(&mut self, change: &PositionChange) {
            self.0.push(*change);
        }
    }

    #[test]
    fn starts_on_first_exhibit() {
        let carousel = carousel(&["A", "B"]);
        assert_eq!(carousel.position(), Position::FIRST);
        assert_eq!(carousel.current_exhibit().title(), "A");
    }

    #[test]
    fn next_reports_transition() {
        let mut carousel = carousel(&["A", "B", "C"]);
        let change = carousel.next();
        assert_eq!(change.from.index(), 0);
        assert_eq!(change.to.index(), 1);
        assert_eq!(change.direction, Direction::Next);
        assert!(change.is_move());
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut carousel = carousel(&["A", "B", "C", "D"]);
        carousel.previous();
        assert_eq!(carousel.position().index(), 3);
        assert_eq!(carousel.current_exhibit().title(), "D");
    }

    #[test]
    fn single_exhibit_change_is_not_a_move() {
        let mut carousel = carousel(&["A"]);
        assert!(!carousel.next().is_move());
        assert!(!carousel.previous().is_move());
        assert_eq!(carousel.current_exhibit().title(), "A");
    }

    #[test]
    fn publish_reaches_every_observer() {
        let mut carousel = carousel(&["A", "B"]);
        let mut first = Recorder::default();
        let mut second = Recorder::default();

        let change = carousel.next();
        publish(&change, &mut [&mut first, &mut second]);

        assert_eq!(first.0, vec![change]);
        assert_eq!(second.0, vec![change]);
    }

    #[test]
    fn info_tracks_position() {
        let mut carousel = carousel(&["A", "B", "C"]);
        carousel.next();
        carousel.next();
        assert_eq!(
            carousel.info(),
            NavigationInfo {
                current_index: 2,
                total_count: 3
            }
        );
    }
}
