//! Default color palette for the built-in control models
//!
//! Dark and light constant sets plus theme-aware helpers. Model `Default`
//! impls use the dark constants; applications that follow the iced theme
//! build their models from the theme-aware functions instead.

use iced::{Color, Theme, color};

/// Check if a theme wants the dark constant set
pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const SURFACE_LIGHT: Color = color!(0x333333);
    pub const DIVIDER: Color = color!(0x282828);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
}

// Light mode colors
mod light {
    use super::*;
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const SURFACE_LIGHT: Color = color!(0xe0e0e0);
    pub const DIVIDER: Color = color!(0xdddddd);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
}

/// Primary accent color (same for both modes)
pub const ACCENT: Color = color!(0x1e90ff);

/// Pressed state for the primary accent
pub const ACCENT_PRESSED: Color = color!(0x4169e1);

/// Fill for anything inactive or grayed out
pub const DISABLED: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.5);

// Dark mode defaults, used by the model `Default` impls
pub const SURFACE: Color = dark::SURFACE;
pub const SURFACE_LIGHT: Color = dark::SURFACE_LIGHT;
pub const DIVIDER: Color = dark::DIVIDER;
pub const TEXT_PRIMARY: Color = dark::TEXT_PRIMARY;
pub const TEXT_SECONDARY: Color = dark::TEXT_SECONDARY;

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get raised surface color based on theme
pub fn surface_light(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_LIGHT
    } else {
        light::SURFACE_LIGHT
    }
}

/// Get divider color based on theme
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::DIVIDER
    } else {
        light::DIVIDER
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}
