// SPDX-License-Identifier: MPL-2.0
//! The image selection cell: the single preview slot and its load lifecycle.

use crate::error::Error;
use crate::media::ImageData;

/// Holds the currently selected preview image.
///
/// There is at most one selected image at a time; a successful load fully
/// replaces the previous one. A failed load retains the previous image and
/// records the error for the caller to surface.
#[derive(Debug, Default)]
pub struct Selection {
    current: Option<ImageData>,
    in_flight: u32,
    last_error: Option<Error>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a read as in flight. The current image stays visible until the
    /// read resolves; in-flight reads are not cancellable. Overlapping reads
    /// are counted, so the loading signal holds until the last one resolves.
    pub fn begin_load(&mut self) {
        self.in_flight += 1;
    }

    /// Resolves an in-flight read.
    ///
    /// On success the new image takes the slot. On failure the previous
    /// image is retained and the error is kept in `last_error`; returns a
    /// reference to it so the caller can surface the failure.
    pub fn finish_load(&mut self, result: Result<ImageData, Error>) -> Option<&Error> {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(image) => {
                self.current = Some(image);
                self.last_error = None;
                None
            }
            Err(error) => {
                self.last_error = Some(error);
                self.last_error.as_ref()
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&ImageData> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(value: u8) -> ImageData {
        ImageData::from_rgba(1, 1, vec![value, value, value, 255])
    }

    #[test]
    fn starts_empty_and_idle() {
        let selection = Selection::new();
        assert!(selection.current().is_none());
        assert!(!selection.is_loading());
        assert!(selection.last_error().is_none());
    }

    #[test]
    fn successful_load_takes_the_slot() {
        let mut selection = Selection::new();
        selection.begin_load();
        assert!(selection.is_loading());

        let surfaced = selection.finish_load(Ok(pixel(1)));
        assert!(surfaced.is_none());
        assert!(!selection.is_loading());
        assert!(selection.current().is_some());
    }

    #[test]
    fn new_image_fully_replaces_previous() {
        let mut selection = Selection::new();
        selection.begin_load();
        selection.finish_load(Ok(pixel(10)));

        selection.begin_load();
        selection.finish_load(Ok(pixel(20)));

        assert_eq!(selection.current().map(|i| i.width), Some(1));
        // Last completed load wins; only one slot exists.
        assert!(selection.last_error().is_none());
    }

    #[test]
    fn failed_load_retains_previous_image() {
        let mut selection = Selection::new();
        selection.begin_load();
        selection.finish_load(Ok(pixel(10)));

        selection.begin_load();
        let surfaced = selection.finish_load(Err(Error::Decode("bad bytes".into())));

        assert!(surfaced.is_some());
        assert!(selection.current().is_some(), "previous image kept");
        assert!(matches!(selection.last_error(), Some(Error::Decode(_))));
        assert!(!selection.is_loading());
    }

    #[test]
    fn overlapping_loads_keep_the_loading_signal() {
        let mut selection = Selection::new();
        selection.begin_load();
        selection.begin_load();

        selection.finish_load(Ok(pixel(1)));
        assert!(selection.is_loading(), "second read still in flight");

        selection.finish_load(Ok(pixel(2)));
        assert!(!selection.is_loading());
        assert!(selection.current().is_some());
    }

    #[test]
    fn success_after_failure_clears_the_error() {
        let mut selection = Selection::new();
        selection.begin_load();
        selection.finish_load(Err(Error::Io("gone".into())));
        assert!(selection.last_error().is_some());

        selection.begin_load();
        selection.finish_load(Ok(pixel(3)));
        assert!(selection.last_error().is_none());
        assert!(selection.current().is_some());
    }
}
