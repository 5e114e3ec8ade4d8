// SPDX-License-Identifier: MPL-2.0
//! Gallery carousel screen.
//!
//! Renders the exhibit at the controller's current position together with the
//! position indicator and the Previous/Next actions. User intents are emitted
//! as [`Message`]s; the application forwards them to the
//! [`Carousel`](crate::application::carousel::Carousel) controller and
//! publishes the resulting change to the [`pager::Pager`].

pub mod actions;
pub mod artworks;
pub mod card;
pub mod pager;

pub use artworks::ArtworkHandles;
pub use pager::{Frame, Pager};

use crate::application::carousel::{Direction, NavigationInfo};
use crate::domain::gallery::Exhibit;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{svg, Column, Container, Text};
use iced::{Element, Length};

/// Messages emitted by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Advance to the following exhibit.
    Next,
    /// Retreat to the preceding exhibit.
    Previous,
}

impl Message {
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Message::Next => Direction::Next,
            Message::Previous => Direction::Previous,
        }
    }
}

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub exhibit: &'a Exhibit,
    pub artwork: Option<&'a svg::Handle>,
    pub info: NavigationInfo,
    pub colors: &'a ColorScheme,
    pub frame: Frame,
}

/// Formats the 1-based position indicator (e.g. `2 / 4`).
#[must_use]
pub fn position_label(i18n: &I18n, info: NavigationInfo) -> String {
    let current = (info.current_index + 1).to_string();
    let total = info.total_count.to_string();
    i18n.tr_with_args(
        "position-indicator",
        &[("current", current.as_str()), ("total", total.as_str())],
    )
}

/// Render the carousel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let card = card::view(card::ViewContext {
        i18n: ctx.i18n,
        exhibit: ctx.exhibit,
        artwork: ctx.artwork,
        colors: ctx.colors,
        frame: ctx.frame,
    });

    let indicator = Text::new(position_label(ctx.i18n, ctx.info))
        .size(typography::BODY_SM)
        .color(ctx.colors.text_secondary);

    let column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(card)
        .push(indicator)
        .push(actions::view(ctx.i18n, ctx.colors));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn messages_map_to_directions() {
        assert_eq!(Message::Next.direction(), Direction::Next);
        assert_eq!(Message::Previous.direction(), Direction::Previous);
    }

    #[test]
    fn position_label_is_one_based() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let info = NavigationInfo {
            current_index: 0,
            total_count: 4,
        };
        assert_eq!(position_label(&i18n, info), "1 / 4");
    }
}
