// SPDX-License-Identifier: MPL-2.0
//! Home screen component.
//!
//! Holds the three state cells (image selection, notification badge, dialog
//! controller) and the single reducer consuming the screen's tagged events.
//! Both the notification acknowledgement and the dashboard action write the
//! same dialog cell through this reducer, which makes the last-write-wins
//! behavior an explicit contract rather than an accident of call order.

pub mod state;
pub mod view;

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use iced::Task;
use std::path::PathBuf;

pub use state::{Badge, Dialog, Selection};
pub use view::{view, ViewContext};

/// Home screen state container.
#[derive(Debug, Default)]
pub struct State {
    pub selection: Selection,
    pub badge: Badge,
    pub dialog: Dialog,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events consumed by [`update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the native file picker.
    OpenPicker,
    /// The picker resolved; `None` means the user cancelled.
    FilePicked(Option<PathBuf>),
    /// The asynchronous file read resolved.
    ImageLoaded(Result<ImageData, Error>),
    /// Acknowledge the notification badge.
    Acknowledge,
    /// Open the dashboard information dialog.
    OpenDashboard,
    /// Dismiss the information dialog.
    CloseDialog,
}

/// Processes a home screen event. All transitions are synchronous except the
/// file pick and read, which resolve back into [`Message::FilePicked`] and
/// [`Message::ImageLoaded`].
pub fn update(state: &mut State, message: Message, i18n: &I18n) -> Task<Message> {
    match message {
        Message::OpenPicker => Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .add_filter("Images", media::PICKER_EXTENSIONS)
                    .pick_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            Message::FilePicked,
        ),
        Message::FilePicked(None) => Task::none(),
        Message::FilePicked(Some(path)) => {
            state.selection.begin_load();
            Task::perform(media::load_image_async(path), Message::ImageLoaded)
        }
        Message::ImageLoaded(result) => {
            let error_key = state.selection.finish_load(result).map(Error::i18n_key);
            if let Some(key) = error_key {
                state.dialog.open(i18n.tr(key));
            }
            Task::none()
        }
        Message::Acknowledge => {
            state.badge.acknowledge();
            state.dialog.open(i18n.tr("dialog-no-notifications"));
            Task::none()
        }
        Message::OpenDashboard => {
            state.dialog.open(i18n.tr("dialog-dashboard-welcome"));
            Task::none()
        }
        Message::CloseDialog => {
            state.dialog.close();
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn en_us() -> I18n {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        I18n::new(None, &config)
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn acknowledge_clears_count_and_opens_dialog() {
        let i18n = en_us();
        for seed in [0, 2, 100] {
            let mut state = State::new();
            state.badge = Badge::with_unread(seed);

            let _ = update(&mut state, Message::Acknowledge, &i18n);

            assert_eq!(state.badge.unread(), 0);
            assert!(state.dialog.is_open());
            assert_eq!(state.dialog.body(), "You have no new notifications.");
        }
    }

    #[test]
    fn dashboard_overwrites_an_open_dialog() {
        let i18n = en_us();
        let mut state = State::new();

        let _ = update(&mut state, Message::Acknowledge, &i18n);
        let _ = update(&mut state, Message::OpenDashboard, &i18n);

        assert!(state.dialog.is_open());
        assert_eq!(state.dialog.body(), i18n.tr("dialog-dashboard-welcome"));
    }

    #[test]
    fn close_dialog_is_idempotent_through_the_reducer() {
        let i18n = en_us();
        let mut state = State::new();

        let _ = update(&mut state, Message::OpenDashboard, &i18n);
        let _ = update(&mut state, Message::CloseDialog, &i18n);
        assert!(!state.dialog.is_open());

        let _ = update(&mut state, Message::CloseDialog, &i18n);
        assert!(!state.dialog.is_open());
    }

    #[test]
    fn cancelled_pick_changes_nothing() {
        let i18n = en_us();
        let mut state = State::new();

        let _ = update(&mut state, Message::FilePicked(None), &i18n);

        assert!(state.selection.current().is_none());
        assert!(!state.selection.is_loading());
        assert!(!state.dialog.is_open());
        assert_eq!(state.badge.unread(), Badge::new().unread());
    }

    #[test]
    fn successful_load_replaces_the_preview() {
        let i18n = en_us();
        let mut state = State::new();

        let _ = update(&mut state, Message::ImageLoaded(Ok(pixel())), &i18n);

        assert!(state.selection.current().is_some());
        assert!(!state.dialog.is_open());
    }

    #[test]
    fn failed_load_keeps_preview_and_surfaces_dialog() {
        let i18n = en_us();
        let mut state = State::new();
        let _ = update(&mut state, Message::ImageLoaded(Ok(pixel())), &i18n);

        let error = Error::Decode("truncated".into());
        let _ = update(&mut state, Message::ImageLoaded(Err(error)), &i18n);

        assert!(state.selection.current().is_some(), "previous preview kept");
        assert!(state.dialog.is_open());
        assert!(state.dialog.body().starts_with("Could not load image"));
    }
}
