// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`carousel`]: The carousel controller that owns the current position
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the controller and observes its changes
//!
//! # Example
//!
//! ```
//! use art_space::application::carousel::Carousel;
//! use art_space::catalog;
//!
//! let mut carousel = Carousel::new(catalog::gallery()?);
//! carousel.previous();
//! assert_eq!(carousel.current_exhibit().title(), "Satoru Gojo");
//! # Ok::<(), art_space::error::Error>(())
//! ```

pub mod carousel;
pub mod port;
