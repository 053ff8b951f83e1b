// SPDX-License-Identifier: MPL-2.0
//! `construction_sight` is the desktop home screen of a construction-site
//! monitoring product, built with the Iced GUI framework.
//!
//! It lets the user pick an aerial image and preview it, acknowledge the
//! notification badge, and open informational dialogs for the dashboard and
//! notification actions. All state lives in three small cells (image
//! selection, notification badge, dialog controller) driven by a single
//! reducer, which keeps the transitions testable without a rendering surface.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
