// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a small art gallery carousel built with the Iced GUI framework.
//!
//! A fixed, non-empty collection of exhibits is browsed one at a time with
//! Previous/Next controls that wrap around at both ends. Page changes slide
//! and fade in, the interface is localized with Fluent, and a few preferences
//! are read from a TOML settings file.

pub mod app;
pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
