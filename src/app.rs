// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` wires the app bar and the home screen together and translates
//! top-level messages into state transitions. The window-resize subscription
//! feeds the viewport query that decides the compact layout; everything else
//! is forwarded to the home reducer.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::theming::ThemeMode;
use iced::widget::Column;
use iced::{event, window, Element, Length, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    home: home::State,
    account_menu_open: bool,
    theme_mode: ThemeMode,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("unread", &self.home.badge.unread())
            .field("dialog_open", &self.home.dialog.is_open())
            .field("has_preview", &self.home.selection.current().is_some())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Navbar(navbar::Message),
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload into the upload preview on startup.
    pub file_path: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Below this width the cards stack vertically and the dialog is rendered
/// full-surface.
pub const COMPACT_WIDTH_BREAKPOINT: f32 = 600.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            home: home::State::new(),
            account_menu_open: false,
            theme_mode: ThemeMode::default(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// loading of a preview image passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        let task = if let Some(path) = flags.file_path {
            // Routed through the same pipeline a picked file takes.
            app.home.selection.begin_load();
            Task::perform(media::load_image_async(path.into()), |result| {
                Message::Home(home::Message::ImageLoaded(result))
            })
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        })
    }

    fn is_compact(&self) -> bool {
        self.window_size.width < COMPACT_WIDTH_BREAKPOINT
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(home_message) => {
                home::update(&mut self.home, home_message, &self.i18n).map(Message::Home)
            }
            Message::Navbar(navbar_message) => {
                match navbar::update(navbar_message, &mut self.account_menu_open) {
                    navbar::Event::AcknowledgeNotifications => {
                        home::update(&mut self.home, home::Message::Acknowledge, &self.i18n)
                            .map(Message::Home)
                    }
                    navbar::Event::None => Task::none(),
                }
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let navbar_view = navbar::view(navbar::ViewContext {
            i18n: &self.i18n,
            account_menu_open: self.account_menu_open,
            unread_label: self.home.badge.label(),
        })
        .map(Message::Navbar);

        let home_view = home::view(home::ViewContext {
            i18n: &self.i18n,
            state: &self.home,
            compact: self.is_compact(),
        })
        .map(Message::Home);

        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(navbar_view)
            .push(home_view)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_seeds_badge_and_closed_dialog() {
        let app = App::default();
        assert_eq!(app.home.badge.unread(), 2);
        assert!(!app.home.dialog.is_open());
        assert!(app.home.selection.current().is_none());
    }

    #[test]
    fn bell_click_routes_through_the_home_reducer() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::NotificationsPressed));

        assert_eq!(app.home.badge.unread(), 0);
        assert!(app.home.dialog.is_open());
    }

    #[test]
    fn resize_drives_the_compact_signal() {
        let mut app = App::default();
        assert!(!app.is_compact());

        let _ = app.update(Message::WindowResized(Size::new(480.0, 800.0)));
        assert!(app.is_compact());

        let _ = app.update(Message::WindowResized(Size::new(1024.0, 768.0)));
        assert!(!app.is_compact());
    }

    #[test]
    fn account_menu_toggle_does_not_touch_home_state() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleAccountMenu));

        assert!(app.account_menu_open);
        assert_eq!(app.home.badge.unread(), 2);
        assert!(!app.home.dialog.is_open());
    }

    #[test]
    fn app_view_renders() {
        let app = App::default();
        let _element = app.view();
    }
}
