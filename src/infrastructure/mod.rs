// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`embedded`]: Artworks bundled into the binary at build time
//!   (implements [`ArtworkSource`])
//!
//! [`ArtworkSource`]: crate::application::port::ArtworkSource

pub mod embedded;

// Re-export main types for convenience
pub use embedded::EmbeddedArtworks;
