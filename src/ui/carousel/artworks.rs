// SPDX-License-Identifier: MPL-2.0
//! Renderable artwork handles, resolved once at startup.

use crate::application::port::{ArtworkFormat, ArtworkSource};
use crate::domain::gallery::{Gallery, Position};
use iced::widget::svg;

/// One SVG handle per exhibit, in gallery order.
///
/// Artworks that fail to resolve are kept as `None` so the card can show a
/// placeholder instead of aborting.
#[derive(Debug, Clone, Default)]
pub struct ArtworkHandles {
    handles: Vec<Option<svg::Handle>>,
}

impl ArtworkHandles {
    /// Resolves every exhibit's artwork through `source`.
    pub fn resolve(gallery: &Gallery, source: &impl ArtworkSource) -> Self {
        let handles = gallery
            .iter()
            .map(|exhibit| match source.load(exhibit.artwork()) {
                Ok(artwork) => match artwork.format {
                    ArtworkFormat::Svg => Some(svg::Handle::from_memory(artwork.bytes)),
                },
                Err(err) => {
                    tracing::warn!(
                        title = exhibit.title(),
                        asset = %err.asset(),
                        error = %err,
                        "artwork unavailable"
                    );
                    None
                }
            })
            .collect();
        Self { handles }
    }

    /// Returns the handle for the exhibit at `position`, if it resolved.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&svg::Handle> {
        self.handles.get(position.index()).and_then(Option::as_ref)
    }

    /// Number of artworks that failed to resolve.
    #[must_use]
    pub fn missing(&self) -> usize {
        self.handles.iter().filter(|handle| handle.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{Artwork, ArtworkError};
    use crate::catalog;
    use crate::domain::gallery::AssetId;
    use crate::infrastructure::EmbeddedArtworks;
    use std::borrow::Cow;

    fn gallery() -> Gallery {
        catalog::gallery().expect("catalog is not empty")
    }

    struct OnlyKaneki;

    impl ArtworkSource for OnlyKaneki {
        fn load(&self, id: &AssetId) -> Result<Artwork, ArtworkError> {
            if id.as_str() == "kaneki.svg" {
                Ok(Artwork {
                    format: ArtworkFormat::Svg,
                    bytes: Cow::Borrowed(b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>"),
                })
            } else {
                Err(ArtworkError::NotFound(id.clone()))
            }
        }
    }

    #[test]
    fn embedded_catalog_resolves_completely() {
        let handles = ArtworkHandles::resolve(&gallery(), &EmbeddedArtworks);
        assert_eq!(handles.missing(), 0);
        assert!(handles.get(Position::FIRST).is_some());
    }

    #[test]
    fn failed_artworks_become_placeholders() {
        let handles = ArtworkHandles::resolve(&gallery(), &OnlyKaneki);
        assert_eq!(handles.missing(), 3);
        assert!(handles.get(Position::FIRST).is_some());
    }
}
