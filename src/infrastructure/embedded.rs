// SPDX-License-Identifier: MPL-2.0
//! Artworks embedded in the executable with `rust-embed`.

use crate::application::port::{Artwork, ArtworkError, ArtworkFormat, ArtworkSource};
use crate::domain::gallery::AssetId;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct Asset;

/// [`ArtworkSource`] backed by the files under `assets/artworks/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedArtworks;

impl ArtworkSource for EmbeddedArtworks {
    fn load(&self, id: &AssetId) -> Result<Artwork, ArtworkError> {
        let format = detect_format(id).ok_or_else(|| ArtworkError::UnsupportedFormat(id.clone()))?;
        let file = Asset::get(id.as_str()).ok_or_else(|| ArtworkError::NotFound(id.clone()))?;

        if !looks_like(format, &file.data) {
            return Err(ArtworkError::CorruptedData(id.clone()));
        }

        Ok(Artwork {
            format,
            bytes: file.data,
        })
    }
}

fn detect_format(id: &AssetId) -> Option<ArtworkFormat> {
    let (_, extension) = id.as_str().rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "svg" => Some(ArtworkFormat::Svg),
        _ => None,
    }
}

/// Checks the payload for the signature of `format`.
fn looks_like(format: ArtworkFormat, bytes: &[u8]) -> bool {
    match format {
        ArtworkFormat::Svg => String::from_utf8_lossy(bytes).contains("<svg"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn every_catalog_artwork_is_embedded() {
        let source = EmbeddedArtworks;
        let gallery = catalog::gallery().expect("catalog is not empty");
        for exhibit in gallery.iter() {
            let artwork = source
                .load(exhibit.artwork())
                .unwrap_or_else(|err| panic!("{err}"));
            assert_eq!(artwork.format, ArtworkFormat::Svg);
            assert!(!artwork.bytes.is_empty());
        }
    }

    #[test]
    fn unknown_asset_is_not_found() {
        let err = EmbeddedArtworks
            .load(&AssetId::new("nobody.svg"))
            .expect_err("asset should be missing");
        assert!(matches!(err, ArtworkError::NotFound(_)));
    }

    #[test]
    fn non_svg_extension_is_unsupported() {
        let err = EmbeddedArtworks
            .load(&AssetId::new("kaneki.png"))
            .expect_err("png is not bundled");
        assert!(matches!(err, ArtworkError::UnsupportedFormat(_)));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert_eq!(
            detect_format(&AssetId::new("SUKUNA.SVG")),
            Some(ArtworkFormat::Svg)
        );
        assert_eq!(detect_format(&AssetId::new("no_extension")), None);
    }
}
