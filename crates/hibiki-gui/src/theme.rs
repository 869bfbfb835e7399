//! Semantic theming — tonal surfaces with a warm pink accent.
//!
//! Both appearance variants are built in; `ThemeMode::System` follows
//! the OS via `dark-light`.

mod catalog;
mod colors;

pub use catalog::*;
pub use colors::*;

use iced::Theme;

use hibiki_core::config::ThemeMode;

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

/// Color scheme for a resolved mode. Dark is the fallback for System.
pub fn scheme(mode: ThemeMode) -> ColorScheme {
    match mode {
        ThemeMode::Light => ColorScheme::light(),
        _ => ColorScheme::dark(),
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Hibiki",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.tertiary,
            warning: cs.tertiary,
            danger: cs.error,
        },
    )
}
