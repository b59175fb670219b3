//! Page background colors for both themes.
//!
//! Mirrors `--bg-color` in `styles.rs`. The desktop window uses it so the
//! first frame does not flash the wrong theme before the stylesheet loads.

use portal_core::ThemePreference;

pub const LIGHT_BG: &str = "#f8fafc";
pub const DARK_BG: &str = "#0f172a";

/// Opaque RGBA of the page background for a theme
pub fn window_background(theme: ThemePreference) -> (u8, u8, u8, u8) {
    let hex = match theme {
        ThemePreference::Light => LIGHT_BG,
        ThemePreference::Dark => DARK_BG,
    };
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    (channel(1), channel(3), channel(5), 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_background_matches_palette() {
        assert_eq!(window_background(ThemePreference::Dark), (0x0f, 0x17, 0x2a, 255));
        assert_eq!(window_background(ThemePreference::Light), (0xf8, 0xfa, 0xfc, 255));
    }
}
