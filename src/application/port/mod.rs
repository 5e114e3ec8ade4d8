// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`artwork`]: Resolving exhibit [`AssetId`](crate::domain::gallery::AssetId)s
//!   into loadable image data
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Methods return `Result` with port-level error types
//!
//! # Example
//!
//! ```ignore
//! use art_space::application::port::ArtworkSource;
//! use art_space::domain::gallery::Exhibit;
//!
//! fn has_artwork(source: &impl ArtworkSource, exhibit: &Exhibit) -> bool {
//!     source.load(exhibit.artwork()).is_ok()
//! }
//! ```

pub mod artwork;

// Re-export main types for convenience
pub use artwork::{Artwork, ArtworkError, ArtworkFormat, ArtworkSource};
