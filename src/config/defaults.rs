// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

use crate::domain::ui::newtypes::transition_bounds;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default duration of the page transition (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = transition_bounds::DEFAULT_MS;

/// Minimum page transition duration; `0` disables the animation.
pub const MIN_TRANSITION_MS: u64 = transition_bounds::MIN_MS;

/// Maximum page transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = transition_bounds::MAX_MS;

/// Whether the arrow keys page through the gallery by default.
pub const DEFAULT_KEYBOARD_NAVIGATION: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
