/// Light and dark palettes with the indigo accent
use iced::theme::Palette;
use iced::{Color, Theme};

use crate::state::preferences::ThemePreference;

pub mod colors {
    use iced::Color;

    /// Indigo accent, also used for the canvas pulse
    pub const ACCENT: Color = Color::from_rgb(0.4, 0.494, 0.918); // #667eea
    pub const DARK_BACKGROUND: Color = Color::from_rgb(0.055, 0.059, 0.078); // #0e0f14
    pub const DARK_TEXT: Color = Color::from_rgb(0.933, 0.933, 0.945); // #eeeef1
    pub const LIGHT_BACKGROUND: Color = Color::from_rgb(0.976, 0.976, 0.984); // #f9f9fb
    pub const LIGHT_TEXT: Color = Color::from_rgb(0.106, 0.11, 0.137); // #1b1c23
    pub const SUCCESS: Color = Color::from_rgb(0.298, 0.686, 0.314); // #4caf50
    pub const DANGER: Color = Color::from_rgb(0.9, 0.3, 0.3);
}

/// Translucent accent used over the canvas frame
pub fn pulse(alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..colors::ACCENT
    }
}

pub fn to_iced(preference: ThemePreference) -> Theme {
    match preference {
        ThemePreference::Dark => Theme::custom(
            "Showcase Dark".to_string(),
            Palette {
                background: colors::DARK_BACKGROUND,
                text: colors::DARK_TEXT,
                primary: colors::ACCENT,
                success: colors::SUCCESS,
                danger: colors::DANGER,
            },
        ),
        ThemePreference::Light => Theme::custom(
            "Showcase Light".to_string(),
            Palette {
                background: colors::LIGHT_BACKGROUND,
                text: colors::LIGHT_TEXT,
                primary: colors::ACCENT,
                success: colors::SUCCESS,
                danger: colors::DANGER,
            },
        ),
    }
}
