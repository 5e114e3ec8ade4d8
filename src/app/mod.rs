// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the gallery window.
//!
//! The `App` struct wires together the carousel controller, the pager that
//! animates page changes, localization and the theme, and translates messages
//! into state changes.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::carousel::Carousel;
use crate::config::{self, Config};
use crate::domain::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::infrastructure::EmbeddedArtworks;
use crate::ui::carousel::{ArtworkHandles, Pager};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    carousel: Carousel,
    pager: Pager,
    artworks: ArtworkHandles,
    theme_mode: ThemeMode,
    /// Resolved once at startup; `System` mode is not re-detected per frame.
    colors: ColorScheme,
    theme: Theme,
    keyboard_navigation: bool,
    /// Localization key of a startup warning shown in the banner.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("position", &self.carousel.position())
            .field("animating", &self.pager.is_animating())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, gallery: Gallery) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, gallery.clone())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the settings file and builds the initial state.
    fn new(flags: Flags, gallery: Gallery) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        (Self::from_config(i18n, &config, gallery, warning), Task::none())
    }

    /// Builds the state from an already loaded configuration.
    pub fn from_config(
        i18n: I18n,
        config: &Config,
        gallery: Gallery,
        warning: Option<String>,
    ) -> Self {
        let carousel = Carousel::new(gallery);
        let artworks = ArtworkHandles::resolve(carousel.gallery(), &EmbeddedArtworks);
        let pager = Pager::new(config.carousel.transition());
        let theme_mode = config.general.theme_mode;

        tracing::info!(
            exhibits = carousel.len().get(),
            missing_artworks = artworks.missing(),
            locale = %i18n.current_locale(),
            transition_ms = pager.duration().as_millis(),
            "gallery ready"
        );

        Self {
            i18n,
            carousel,
            pager,
            artworks,
            theme_mode,
            colors: theme_mode.colors(),
            theme: theme_mode.iced_theme(),
            keyboard_navigation: config.carousel.keyboard_navigation_enabled(),
            warning,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let exhibit = self.carousel.current_exhibit();
        format!("{} - {app_name}", exhibit.title())
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(self.keyboard_navigation),
            subscription::create_tick_subscription(self.pager.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            carousel: &mut self.carousel,
            pager: &mut self.pager,
            warning: &mut self.warning,
        };
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            carousel: &self.carousel,
            artworks: &self.artworks,
            colors: &self.colors,
            warning: self.warning.as_deref(),
            frame: self.pager.frame(Instant::now()),
        })
    }
}
