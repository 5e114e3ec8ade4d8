// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled, rounded action button in the given base color.
///
/// Hover lightens the fill; press removes the shadow.
fn filled(base: Color, hover: Color, border: Color, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (hover, shadow::SM),
        button::Status::Pressed => (border, shadow::NONE),
        button::Status::Disabled => (Color { a: 0.5, ..base }, shadow::NONE),
        button::Status::Active => (base, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Style for the primary action ("Next").
pub fn primary(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = colors.brand_primary;
    move |_theme: &Theme, status: button::Status| {
        filled(base, shade(base, 0.1), shade(base, -0.1), status)
    }
}

/// Style for the secondary action ("Previous").
pub fn secondary(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = colors.brand_secondary;
    move |_theme: &Theme, status: button::Status| {
        filled(base, shade(base, 0.1), shade(base, -0.1), status)
    }
}

/// Lightens (positive `delta`) or darkens (negative) a color, keeping alpha.
fn shade(color: Color, delta: f32) -> Color {
    Color {
        r: (color.r + delta).clamp(0.0, 1.0),
        g: (color.g + delta).clamp(0.0, 1.0),
        b: (color.b + delta).clamp(0.0, 1.0),
        a: color.a,
    }
}

/// Borderless text button used for dismiss actions.
pub fn text(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => 1.0,
            _ => 0.8,
        };
        button::Style {
            background: None,
            text_color: Color { a: alpha, ..color },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
