// SPDX-License-Identifier: MPL-2.0
//! The exhibits shown by the application, in display order.
//!
//! Artwork identifiers name files under `assets/artworks/`, which are
//! embedded in the binary by [`EmbeddedArtworks`](crate::infrastructure::embedded::EmbeddedArtworks).

use crate::domain::gallery::{AssetId, Exhibit, Gallery};
use crate::error::Result;

/// Builds the gallery displayed at startup.
///
/// # Errors
///
/// Returns [`Error::Gallery`](crate::error::Error::Gallery) if the catalog
/// lists no exhibits.
pub fn gallery() -> Result<Gallery> {
    Ok(Gallery::new(vec![
        Exhibit::new(AssetId::new("kaneki.svg"), "Kaneki", "Tokyo Ghoul", 2021),
        Exhibit::new(AssetId::new("light_yagami.svg"), "Light Yagami", "Death Note", 2022),
        Exhibit::new(AssetId::new("sukuna.svg"), "Sukuna", "Jujutsu Kaisen", 2023),
        Exhibit::new(AssetId::new("satoru_gojo.svg"), "Satoru Gojo", "Jujutsu Kaisen", 2024),
    ])?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Gallery {
        gallery().expect("catalog is not empty")
    }

    #[test]
    fn catalog_lists_four_exhibits_in_order() {
        let gallery = catalog();
        let titles: Vec<_> = gallery.iter().map(Exhibit::title).collect();
        assert_eq!(titles, ["Kaneki", "Light Yagami", "Sukuna", "Satoru Gojo"]);
    }

    #[test]
    fn catalog_years_increase() {
        let years: Vec<_> = catalog().iter().map(Exhibit::year).collect();
        assert!(years.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
