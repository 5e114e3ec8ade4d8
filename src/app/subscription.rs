// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Arrow keys move the carousel when no widget captured them, and a frame
//! clock runs only while a page transition is animating.

use super::Message;
use crate::ui::carousel;
use crate::ui::design_tokens::motion;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};

/// Creates the keyboard navigation subscription.
pub fn create_keyboard_subscription(enabled: bool) -> Subscription<Message> {
    if !enabled {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if let event::Status::Captured = status {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => key_to_message(&key),
            _ => None,
        }
    })
}

/// Maps a pressed key to a carousel action.
pub fn key_to_message(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowRight) => Some(Message::Carousel(carousel::Message::Next)),
        Key::Named(Named::ArrowLeft) => Some(Message::Carousel(carousel::Message::Previous)),
        _ => None,
    }
}

/// Creates the animation clock, active only while the pager is moving.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(motion::FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_navigation() {
        assert!(matches!(
            key_to_message(&Key::Named(Named::ArrowRight)),
            Some(Message::Carousel(carousel::Message::Next))
        ));
        assert!(matches!(
            key_to_message(&Key::Named(Named::ArrowLeft)),
            Some(Message::Carousel(carousel::Message::Previous))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(key_to_message(&Key::Named(Named::Space)).is_none());
        assert!(key_to_message(&Key::Character("n".into())).is_none());
    }
}
