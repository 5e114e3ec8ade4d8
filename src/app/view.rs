// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::application::carousel::Carousel;
use crate::i18n::fluent::I18n;
use crate::ui::banner;
use crate::ui::carousel::{self, ArtworkHandles, Frame};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousel: &'a Carousel,
    pub artworks: &'a ArtworkHandles,
    pub colors: &'a ColorScheme,
    pub warning: Option<&'a str>,
    pub frame: Frame,
}

/// Renders the single gallery screen, with the warning banner on top if any.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let position = ctx.carousel.position();

    let gallery = carousel::view(carousel::ViewContext {
        i18n: ctx.i18n,
        exhibit: ctx.carousel.current_exhibit(),
        artwork: ctx.artworks.get(position),
        info: ctx.carousel.info(),
        colors: ctx.colors,
        frame: ctx.frame,
    })
    .map(Message::Carousel);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.warning {
        column = column.push(banner::view(ctx.i18n, ctx.colors, key).map(Message::Banner));
    }
    column = column.push(gallery);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::surface(ctx.colors))
        .into()
}
