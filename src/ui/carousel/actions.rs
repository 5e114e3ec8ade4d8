// SPDX-License-Identifier: MPL-2.0
//! Previous/Next action row.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Row, Text};
use iced::{Element, Length};

fn action<'a>(label: String, message: Message) -> iced::widget::Button<'a, Message> {
    let label = Text::new(label)
        .size(typography::BODY)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    button(label)
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
}

/// Render the action row.
pub fn view<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let previous = action(i18n.tr("action-previous"), Message::Previous)
        .style(styles::button::secondary(colors));
    let next = action(i18n.tr("action-next"), Message::Next)
        .style(styles::button::primary(colors));

    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(previous)
        .push(next)
        .into()
}
