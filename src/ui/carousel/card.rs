// SPDX-License-Identifier: MPL-2.0
//! Exhibit card: framed artwork above its caption.

use super::pager::{Edge, Frame};
use crate::domain::gallery::Exhibit;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{svg, tooltip, Column, Container, Row, Svg, Text};
use iced::{font, Color, ContentFit, Element, Font, Length, Padding};

/// Contextual data needed to render a card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub exhibit: &'a Exhibit,
    pub artwork: Option<&'a svg::Handle>,
    pub colors: &'a ColorScheme,
    pub frame: Frame,
}

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

const ITALIC: Font = Font {
    style: font::Style::Italic,
    ..Font::DEFAULT
};

/// Render the card for the current animation frame.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(artwork(&ctx))
        .push(description(&ctx));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(slide_padding(ctx.frame))
        .into()
}

/// Padding that shifts the card away from the edge it enters from.
fn slide_padding(frame: Frame) -> Padding {
    match frame.edge {
        Edge::Right => Padding {
            left: frame.offset,
            ..Padding::ZERO
        },
        Edge::Left => Padding {
            right: frame.offset,
            ..Padding::ZERO
        },
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

fn artwork<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let opacity = ctx.frame.opacity;

    let image: Element<'a, Message> = match ctx.artwork {
        Some(handle) => Svg::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .opacity(opacity)
            .into(),
        None => Container::new(
            Text::new(ctx.i18n.tr("artwork-missing"))
                .size(typography::BODY)
                .color(faded(ctx.colors.text_secondary, opacity)),
        )
        .center(Length::Fill)
        .into(),
    };

    let framed = Container::new(image)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(sizing::ARTWORK_MAT)
        .style(styles::container::artwork_mat(ctx.colors.artwork_mat, opacity));

    // The title doubles as the artwork's label.
    tooltip(
        framed,
        Text::new(ctx.exhibit.title().to_string()).size(typography::BODY_SM),
        tooltip::Position::Bottom,
    )
    .into()
}

fn description<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let opacity = ctx.frame.opacity;
    let year_value = ctx.exhibit.year().to_string();

    let title = Text::new(ctx.exhibit.title().to_string())
        .size(typography::TITLE_LG)
        .font(BOLD)
        .color(faded(ctx.colors.text_primary, opacity));

    let artist = Text::new(ctx.exhibit.artist().to_string())
        .size(typography::BODY_SM)
        .font(BOLD)
        .color(faded(ctx.colors.text_primary, opacity));

    let year = Text::new(ctx.i18n.tr_with_args("exhibit-year", &[("year", year_value.as_str())]))
        .size(typography::BODY_SM)
        .font(ITALIC)
        .color(faded(ctx.colors.text_secondary, opacity));

    Column::new()
        .width(Length::Fill)
        .padding(spacing::XS)
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(title)
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(artist)
                .push(year),
        )
        .into()
}
