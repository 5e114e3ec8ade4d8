// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! This module contains the exhibit value type, the fixed gallery
//! collection and the circular position used to page through it.

pub mod collection;
pub mod types;

// Re-export commonly used types
pub use collection::{Gallery, GalleryError, Position};
pub use types::{AssetId, Exhibit};
