// SPDX-License-Identifier: MPL-2.0
//! Artwork loading port definition.
//!
//! Exhibits only carry an opaque [`AssetId`]. This module defines the
//! [`ArtworkSource`] trait that maps such an identifier to raw image bytes;
//! the presentation layer turns those bytes into a renderable handle.

use crate::domain::gallery::AssetId;
use std::borrow::Cow;
use std::fmt;

// =============================================================================
// ArtworkError
// =============================================================================

/// Errors that can occur while resolving an artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtworkError {
    /// No asset is registered under this identifier.
    NotFound(AssetId),

    /// The asset exists but is not in a format the gallery can render.
    UnsupportedFormat(AssetId),

    /// The asset bytes do not look like a valid image of their declared format.
    CorruptedData(AssetId),
}

impl ArtworkError {
    /// Returns the identifier of the asset that failed to load.
    #[must_use]
    pub fn asset(&self) -> &AssetId {
        match self {
            ArtworkError::NotFound(id)
            | ArtworkError::UnsupportedFormat(id)
            | ArtworkError::CorruptedData(id) => id,
        }
    }
}

impl fmt::Display for ArtworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtworkError::NotFound(id) => write!(f, "Artwork not found: {id}"),
            ArtworkError::UnsupportedFormat(id) => write!(f, "Unsupported artwork format: {id}"),
            ArtworkError::CorruptedData(id) => write!(f, "Corrupted artwork data: {id}"),
        }
    }
}

impl std::error::Error for ArtworkError {}

// =============================================================================
// Artwork
// =============================================================================

/// Image encodings an artwork can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkFormat {
    Svg,
}

/// Raw artwork bytes, ready to be handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub format: ArtworkFormat,
    pub bytes: Cow<'static, [u8]>,
}

// =============================================================================
// ArtworkSource
// =============================================================================

/// Resolves asset identifiers into artwork bytes.
pub trait ArtworkSource {
    /// Loads the artwork registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns an [`ArtworkError`] when the asset is missing, in an
    /// unsupported format, or unreadable.
    fn load(&self, id: &AssetId) -> Result<Artwork, ArtworkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_reports_its_asset() {
        let id = AssetId::new("missing.svg");
        assert_eq!(ArtworkError::NotFound(id.clone()).asset(), &id);
        assert_eq!(ArtworkError::CorruptedData(id.clone()).asset(), &id);
    }

    #[test]
    fn display_includes_asset_name() {
        let err = ArtworkError::UnsupportedFormat(AssetId::new("kaneki.bmp"));
        assert_eq!(err.to_string(), "Unsupported artwork format: kaneki.bmp");
    }
}
