// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens following the W3C Design Tokens standard.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (light blue scale, dark-theme first)
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.565, 0.792, 0.976);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    /// Height of the upload preview drop area.
    pub const PREVIEW_HEIGHT: f32 = 200.0;
    /// Width of the windowed information dialog.
    pub const DIALOG_WIDTH: f32 = 420.0;
    /// Diameter of the notification badge numeral.
    pub const BADGE_SIZE: f32 = 18.0;
}

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const SUBTITLE: f32 = 16.0;
    pub const TITLE: f32 = 20.0;
    pub const HEADLINE: f32 = 28.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Fully round, for the badge numeral.
    pub const FULL: f32 = 9999.0;
}

/// Convenience for translucent blacks used by overlays and backdrops.
#[must_use]
pub fn scrim(alpha: f32) -> Color {
    Color {
        a: alpha,
        ..palette::BLACK
    }
}
