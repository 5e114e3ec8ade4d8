// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`carousel`] - The gallery carousel (card, pager animation, actions)
//! - [`banner`] - Dismissable warning banner
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod banner;
pub mod carousel;
pub mod design_tokens;
pub mod styles;
pub mod theming;
