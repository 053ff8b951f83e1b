// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Organized following a component-based architecture with the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`home`] - Home screen: image upload preview, dashboard and
//!   notification cards, and the modal information dialog
//! - [`navbar`] - App bar with notification badge and account menu
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Vector glyphs rendered through the `svg` widget

pub mod design_tokens;
pub mod home;
pub mod icons;
pub mod navbar;
pub mod theming;
