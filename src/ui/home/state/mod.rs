// SPDX-License-Identifier: MPL-2.0
//! The three state cells backing the home screen.
//!
//! Each cell is a plain struct with synchronous transitions so the reducer
//! can be exercised in tests without a rendering surface.

pub mod badge;
pub mod dialog;
pub mod selection;

pub use badge::Badge;
pub use dialog::Dialog;
pub use selection::Selection;
