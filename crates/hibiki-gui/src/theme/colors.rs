//! Semantic color tokens for the application.
//!
//! Mirrors MD3's tonal surface hierarchy. Both variants are defined in
//! code; there is no user theming layer.

use iced::Color;

/// All semantic color tokens for the application.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces (low -> high elevation)
    pub surface_container_lowest: Color,
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_container_highest: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent (warm pink)
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,

    // Secondary
    pub secondary_container: Color,
    pub on_secondary_container: Color,

    // Tertiary (warm gold, used for ratings)
    pub tertiary: Color,
    pub on_tertiary: Color,

    // Error
    pub error: Color,
    pub error_hover: Color,
    pub error_pressed: Color,
    pub on_error: Color,
}

impl ColorScheme {
    pub fn dark() -> Self {
        Self {
            surface_container_lowest: Color::from_rgb8(0x0D, 0x0D, 0x11),
            surface: Color::from_rgb8(0x12, 0x12, 0x18),
            surface_container_low: Color::from_rgb8(0x17, 0x17, 0x1E),
            surface_container: Color::from_rgb8(0x1D, 0x1D, 0x25),
            surface_container_high: Color::from_rgb8(0x24, 0x24, 0x2E),
            surface_container_highest: Color::from_rgb8(0x2B, 0x2B, 0x37),
            surface_bright: Color::from_rgb8(0x34, 0x34, 0x3F),

            on_surface: Color::from_rgb8(0xE6, 0xE1, 0xE6),
            on_surface_variant: Color::from_rgb8(0xA8, 0xA3, 0xAD),
            outline: Color::from_rgb8(0x78, 0x73, 0x7D),
            outline_variant: Color::from_rgb8(0x3A, 0x37, 0x42),

            primary: Color::from_rgb8(0xFF, 0x5C, 0x8A),
            primary_hover: Color::from_rgb8(0xFF, 0x7D, 0xA1),
            primary_dim: Color::from_rgb8(0xD9, 0x4A, 0x73),
            on_primary: Color::from_rgb8(0x3C, 0x00, 0x19),
            primary_container: Color::from_rgb8(0x5C, 0x11, 0x30),
            on_primary_container: Color::from_rgb8(0xFF, 0xD9, 0xE2),

            secondary_container: Color::from_rgb8(0x4A, 0x44, 0x52),
            on_secondary_container: Color::from_rgb8(0xE8, 0xDE, 0xF0),

            tertiary: Color::from_rgb8(0xE8, 0xC2, 0x6C),
            on_tertiary: Color::from_rgb8(0x3F, 0x2E, 0x00),

            error: Color::from_rgb8(0xFF, 0x54, 0x49),
            error_hover: Color::from_rgb8(0xFF, 0x70, 0x66),
            error_pressed: Color::from_rgb8(0xD9, 0x3A, 0x30),
            on_error: Color::from_rgb8(0x40, 0x00, 0x08),
        }
    }

    pub fn light() -> Self {
        Self {
            surface_container_lowest: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            surface: Color::from_rgb8(0xFD, 0xF8, 0xFA),
            surface_container_low: Color::from_rgb8(0xF7, 0xF2, 0xF4),
            surface_container: Color::from_rgb8(0xF1, 0xEC, 0xEF),
            surface_container_high: Color::from_rgb8(0xEB, 0xE6, 0xE9),
            surface_container_highest: Color::from_rgb8(0xE5, 0xE0, 0xE3),
            surface_bright: Color::from_rgb8(0xE9, 0xE2, 0xE6),

            on_surface: Color::from_rgb8(0x1C, 0x1B, 0x1E),
            on_surface_variant: Color::from_rgb8(0x49, 0x45, 0x4E),
            outline: Color::from_rgb8(0x7A, 0x75, 0x7E),
            outline_variant: Color::from_rgb8(0xCA, 0xC4, 0xCE),

            primary: Color::from_rgb8(0xB9, 0x0F, 0x4E),
            primary_hover: Color::from_rgb8(0xD2, 0x28, 0x60),
            primary_dim: Color::from_rgb8(0x9A, 0x0C, 0x41),
            on_primary: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            primary_container: Color::from_rgb8(0xFF, 0xD9, 0xE2),
            on_primary_container: Color::from_rgb8(0x3E, 0x00, 0x1F),

            secondary_container: Color::from_rgb8(0xEA, 0xDD, 0xE6),
            on_secondary_container: Color::from_rgb8(0x22, 0x1A, 0x20),

            tertiary: Color::from_rgb8(0x7A, 0x59, 0x00),
            on_tertiary: Color::from_rgb8(0xFF, 0xFF, 0xFF),

            error: Color::from_rgb8(0xBA, 0x1A, 0x1A),
            error_hover: Color::from_rgb8(0xD3, 0x2F, 0x2F),
            error_pressed: Color::from_rgb8(0x93, 0x00, 0x0A),
            on_error: Color::from_rgb8(0xFF, 0xFF, 0xFF),
        }
    }
}
