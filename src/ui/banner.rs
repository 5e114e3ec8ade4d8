// SPDX-License-Identifier: MPL-2.0
//! Dismissable warning banner (e.g. unreadable settings file).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, Container, Row, Text};
use iced::{Element, Length};

/// Messages emitted by the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss,
}

/// Render a banner for the warning identified by `key`.
pub fn view<'a>(i18n: &I18n, colors: &ColorScheme, key: &str) -> Element<'a, Message> {
    let text = Text::new(i18n.tr(key))
        .size(typography::BODY_SM)
        .width(Length::Fill);

    let dismiss = button(Text::new(i18n.tr("banner-dismiss")).size(typography::BODY_SM))
        .on_press(Message::Dismiss)
        .padding(spacing::XXS)
        .style(styles::button::text(colors.text_primary));

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(text)
            .push(dismiss),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::banner(colors))
    .into()
}
