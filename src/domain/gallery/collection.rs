// SPDX-License-Identifier: MPL-2.0
//! The fixed, ordered exhibit collection and the circular position into it.

use super::types::Exhibit;
use std::fmt;
use std::num::NonZeroUsize;

// =============================================================================
// GalleryError
// =============================================================================

/// Errors raised while assembling a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// A gallery needs at least one exhibit; positions are taken modulo its length.
    Empty,
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Empty => write!(f, "a gallery must contain at least one exhibit"),
        }
    }
}

impl std::error::Error for GalleryError {}

// =============================================================================
// Gallery
// =============================================================================

/// Ordered, non-empty sequence of exhibits. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    exhibits: Vec<Exhibit>,
    len: NonZeroUsize,
}

impl Gallery {
    /// Builds a gallery from a list of exhibits.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Empty`] if `exhibits` is empty.
    pub fn new(exhibits: Vec<Exhibit>) -> Result<Self, GalleryError> {
        let len = NonZeroUsize::new(exhibits.len()).ok_or(GalleryError::Empty)?;
        Ok(Self { exhibits, len })
    }

    /// Number of exhibits (never zero).
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// Returns the exhibit at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` was not derived from this gallery's [`len`](Self::len).
    /// Positions built with [`Position::successor`] and [`Position::predecessor`]
    /// from [`Position::FIRST`] always are.
    #[must_use]
    pub fn exhibit(&self, position: Position) -> &Exhibit {
        &self.exhibits[position.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exhibit> {
        self.exhibits.iter()
    }
}

// =============================================================================
// Position
// =============================================================================

/// Index of the exhibit currently on display, in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    /// The initial position.
    pub const FIRST: Position = Position(0);

    /// Returns the raw zero-based index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// `(index + 1) mod len`
    #[must_use]
    pub fn successor(self, len: NonZeroUsize) -> Self {
        Self((self.0 % len.get() + 1) % len.get())
    }

    /// `(index - 1 + len) mod len`
    #[must_use]
    pub fn predecessor(self, len: NonZeroUsize) -> Self {
        let len = len.get();
        Self((self.0 % len + len - 1) % len)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::AssetId;

    fn exhibit(title: &str) -> Exhibit {
        Exhibit::new(AssetId::new(format!("{title}.svg")), title, "artist", 2000)
    }

    fn len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero length")
    }

    #[test]
    fn empty_gallery_is_rejected() {
        assert_eq!(Gallery::new(Vec::new()), Err(GalleryError::Empty));
    }

    #[test]
    fn gallery_keeps_insertion_order() {
        let gallery = Gallery::new(vec![exhibit("a"), exhibit("b"), exhibit("c")])
            .expect("non-empty gallery");
        let titles: Vec<_> = gallery.iter().map(Exhibit::title).collect();
        assert_eq!(titles, ["a", "b", "c"]);
        assert_eq!(gallery.len().get(), 3);
        assert_eq!(gallery.exhibit(Position::FIRST).title(), "a");
    }

    #[test]
    fn length_is_fixed_at_construction() {
        let gallery = Gallery::new(vec![exhibit("a"), exhibit("b")]).expect("non-empty gallery");
        assert_eq!(gallery.len(), len(2));
        assert_eq!(gallery.exhibit(Position::FIRST).title(), "a");
        assert_eq!(gallery.exhibit(Position::FIRST.successor(len(2))).title(), "b");
    }

    #[test]
    #[should_panic]
    fn foreign_position_is_rejected_loudly() {
        let gallery = Gallery::new(vec![exhibit("a")]).expect("non-empty gallery");
        let _ = gallery.exhibit(Position(1));
    }

    #[test]
    fn successor_wraps_at_end() {
        assert_eq!(Position(3).successor(len(4)), Position(0));
        assert_eq!(Position(1).successor(len(4)), Position(2));
    }

    #[test]
    fn predecessor_wraps_at_start() {
        assert_eq!(Position(0).predecessor(len(4)), Position(3));
        assert_eq!(Position(2).predecessor(len(4)), Position(1));
    }

    #[test]
    fn single_exhibit_cycle_stays_put() {
        assert_eq!(Position::FIRST.successor(len(1)), Position::FIRST);
        assert_eq!(Position::FIRST.predecessor(len(1)), Position::FIRST);
    }
}
