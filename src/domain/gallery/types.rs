// SPDX-License-Identifier: MPL-2.0
//! Exhibit value types.

use std::fmt;

// =============================================================================
// AssetId
// =============================================================================

/// Opaque identifier of a bundled artwork.
///
/// The identifier is resolved into loadable image data by an
/// [`ArtworkSource`](crate::application::port::ArtworkSource); the domain
/// never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    /// Creates an asset identifier from its name (e.g. `kaneki.svg`).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the raw asset name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Exhibit
// =============================================================================

/// One displayable item of the gallery: an artwork and its caption.
///
/// Exhibits are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exhibit {
    artwork: AssetId,
    title: String,
    artist: String,
    year: i32,
}

impl Exhibit {
    #[must_use]
    pub fn new(
        artwork: AssetId,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            artwork,
            title: title.into(),
            artist: artist.into(),
            year,
        }
    }

    #[must_use]
    pub fn artwork(&self) -> &AssetId {
        &self.artwork
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhibit_exposes_its_caption() {
        let exhibit = Exhibit::new(AssetId::new("gojo.svg"), "Satoru Gojo", "Jujutsu Kaisen", 2024);
        assert_eq!(exhibit.title(), "Satoru Gojo");
        assert_eq!(exhibit.artist(), "Jujutsu Kaisen");
        assert_eq!(exhibit.year(), 2024);
        assert_eq!(exhibit.artwork().as_str(), "gojo.svg");
    }

    #[test]
    fn asset_id_displays_raw_name() {
        assert_eq!(AssetId::new("kaneki.svg").to_string(), "kaneki.svg");
    }
}
