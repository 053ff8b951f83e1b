// SPDX-License-Identifier: MPL-2.0
//! Vector glyphs for the app bar and cards.
//!
//! Each glyph is an inline SVG source rendered through the `svg` widget, so
//! no binary assets ship with the binary. Fills are fixed to a light gray
//! that reads on both built-in Iced palettes.

use iced::widget::svg::{Handle, Svg};

const MENU: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#e0e0e0" d="M3 6h18v2H3zM3 11h18v2H3zM3 16h18v2H3z"/></svg>"##;

const BELL: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#e0e0e0" d="M12 22a2 2 0 0 0 2-2h-4a2 2 0 0 0 2 2zm6-6v-5a6 6 0 0 0-4-5.65V4a2 2 0 1 0-4 0v1.35A6 6 0 0 0 6 11v5l-2 2v1h16v-1z"/></svg>"##;

const ACCOUNT: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#e0e0e0" d="M12 12a4 4 0 1 0-4-4 4 4 0 0 0 4 4zm0 2c-3.3 0-8 1.7-8 5v3h16v-3c0-3.3-4.7-5-8-5z"/></svg>"##;

const BAR_CHART: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#e0e0e0" d="M4 20h16v2H4zM6 10h3v8H6zM11 4h3v14h-3zM16 13h3v5h-3z"/></svg>"##;

const UPLOAD: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#e0e0e0" d="M5 20h14v-2H5zm7-16-6 6h4v6h4v-6h4z"/></svg>"##;

const CROSS: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#e0e0e0" d="M19 6.4 17.6 5 12 10.6 6.4 5 5 6.4 10.6 12 5 17.6 6.4 19 12 13.4 17.6 19 19 17.6 13.4 12z"/></svg>"##;

fn glyph(source: &'static [u8]) -> Svg<'static> {
    Svg::new(Handle::from_memory(source))
}

pub fn menu() -> Svg<'static> {
    glyph(MENU)
}

pub fn bell() -> Svg<'static> {
    glyph(BELL)
}

pub fn account() -> Svg<'static> {
    glyph(ACCOUNT)
}

pub fn bar_chart() -> Svg<'static> {
    glyph(BAR_CHART)
}

pub fn upload() -> Svg<'static> {
    glyph(UPLOAD)
}

pub fn cross() -> Svg<'static> {
    glyph(CROSS)
}

/// Constrains a glyph to a square of `size` points.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_sources_are_valid_svg() {
        for source in [MENU, BELL, ACCOUNT, BAR_CHART, UPLOAD, CROSS] {
            let parsed = resvg::usvg::Tree::from_data(source, &resvg::usvg::Options::default());
            assert!(parsed.is_ok(), "glyph failed to parse");
        }
    }

    #[test]
    fn sized_builds_widget() {
        let _ = sized(bell(), 24.0);
    }
}
