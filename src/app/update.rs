// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::Message;
use crate::application::carousel::{
    publish, Carousel, Direction, PositionChange, PositionObserver,
};
use crate::ui::banner;
use crate::ui::carousel::Pager;
use iced::Task;
use std::time::Instant;

/// Mutable state touched by message handlers.
pub struct UpdateContext<'a> {
    pub carousel: &'a mut Carousel,
    pub pager: &'a mut Pager,
    pub warning: &'a mut Option<String>,
}

/// Writes every position change to the log.
struct NavigationLog;

impl PositionObserver for NavigationLog {
    fn position_changed(&mut self, change: &PositionChange) {
        tracing::debug!(
            from = %change.from,
            to = %change.to,
            direction = ?change.direction,
            "carousel position changed"
        );
    }
}

/// Routes a top-level message to its handler.
pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Carousel(carousel_message) => {
            handle_navigation(ctx, carousel_message.direction());
            Task::none()
        }
        Message::Banner(banner::Message::Dismiss) => {
            *ctx.warning = None;
            Task::none()
        }
        Message::Tick(now) => handle_tick(ctx, now),
    }
}

/// Moves the carousel and notifies observers of the change.
pub fn handle_navigation(ctx: &mut UpdateContext<'_>, direction: Direction) -> PositionChange {
    let change = ctx.carousel.navigate(direction);
    let mut log = NavigationLog;
    let mut observers: [&mut dyn PositionObserver; 2] = [&mut *ctx.pager, &mut log];
    publish(&change, &mut observers);
    change
}

fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.pager.tick(now);
    Task::none()
}
