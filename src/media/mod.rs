// SPDX-License-Identifier: MPL-2.0
//! Image decoding into a renderable handle.
//!
//! The preview surface consumes an [`ImageData`], which wraps an in-memory
//! `iced` image handle: once loaded, no path or file descriptor is kept
//! around. Raster formats are decoded with the `image` crate; SVG files are
//! rasterized with `resvg`.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions offered by the file picker. Advisory only: the picker filter
/// does not prevent the user from selecting arbitrary files, and decode
/// failures are reported through [`Error`] instead of being filtered here.
pub const PICKER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "svg"];

/// An in-memory image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Loads an image from `path` and decodes it for display.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, [`Error::Decode`] when
/// the bytes are not a supported raster image, and [`Error::Svg`] when an SVG
/// fails to parse or rasterize.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path)?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;

        let size = tree.size().to_int_size();
        let (width, height) = (size.width(), size.height());
        if width == 0 || height == 0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(ImageData::from_rgba(width, height, pixmap.data().to_vec()))
    } else {
        let bytes = fs::read(path)?;
        let img = image_rs::load_from_memory(&bytes)?;
        let (width, height) = img.dimensions();
        Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

/// Runs [`load_image`] on the blocking thread pool so the file read and
/// decode never stall the UI event loop.
pub async fn load_image_async(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .unwrap_or_else(|e| Err(Error::Io(e.to_string())))
}
