// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on the Fluent localization system.
//!
//! Handles locale resolution (CLI argument, config file, then OS locale),
//! loading of embedded `.ftl` catalogs, and string lookup. Every piece of
//! user-visible copy, including the dialog body texts, goes through [`fluent::I18n::tr`].

pub mod fluent;
