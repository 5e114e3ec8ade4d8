// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Transition Bounds
// =============================================================================

/// Page transition duration bounds (0 to 2000 milliseconds).
pub mod transition_bounds {
    /// Minimum duration; zero means pages switch instantly.
    pub const MIN_MS: u64 = 0;
    /// Maximum duration in milliseconds.
    pub const MAX_MS: u64 = 2000;
    /// Default duration in milliseconds.
    pub const DEFAULT_MS: u64 = 300;
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Duration of the animated page transition, guaranteed to be within
/// valid range (0–2000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a new transition duration, clamping the value to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(transition_bounds::MIN_MS, transition_bounds::MAX_MS))
    }

    /// Returns the raw value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns whether page changes should skip the animation.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(transition_bounds::DEFAULT_MS)
    }
}
