// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`Exhibit`](gallery::Exhibit), [`Gallery`](gallery::Gallery),
//!   [`Position`](gallery::Position), [`AssetId`](gallery::AssetId))
//! - [`ui`]: UI value objects ([`TransitionDuration`](ui::newtypes::TransitionDuration))

pub mod gallery;
pub mod ui;
