// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Mat framing the artwork: a flat, square-cornered surface with a drop shadow.
pub fn artwork_mat(mat: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: alpha, ..mat })),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: Color {
                a: shadow::CARD.color.a * alpha,
                ..shadow::CARD.color
            },
            ..shadow::CARD
        },
        ..Default::default()
    }
}

/// Application background.
pub fn surface(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Warning banner shown at the top of the window.
pub fn banner(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let accent = colors.warning;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.2, ..accent })),
        text_color: Some(text),
        border: Border {
            color: accent,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
