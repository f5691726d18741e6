//! Fixed color palettes

use crate::ThemeMode;
use ratatui::style::Color;

/// Color set for one display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub card_background: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub primary: Color,
    pub primary_dark: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub border: Color,
    /// Shadow color, pre-blended over `background` (terminals have no alpha)
    pub shadow: Color,
    pub button_text: Color,
}

impl Palette {
    pub const LIGHT: Self = Self {
        background: Color::Rgb(0xF8, 0xF9, 0xFA),
        card_background: Color::Rgb(0xFF, 0xFF, 0xFF),
        text: Color::Rgb(0x1A, 0x1A, 0x2E),
        text_secondary: Color::Rgb(0x6C, 0x75, 0x7D),
        primary: Color::Rgb(0xFF, 0x6B, 0x6B),
        primary_dark: Color::Rgb(0xEE, 0x5A, 0x52),
        success: Color::Rgb(0x51, 0xCF, 0x66),
        warning: Color::Rgb(0xF0, 0x8C, 0x00),
        info: Color::Rgb(0x22, 0x8B, 0xE6),
        border: Color::Rgb(0xE9, 0xEC, 0xEF),
        // rgba(0, 0, 0, 0.1)
        shadow: Color::Rgb(0xDF, 0xE0, 0xE1),
        button_text: Color::Rgb(0xFF, 0xFF, 0xFF),
    };

    pub const DARK: Self = Self {
        background: Color::Rgb(0x0F, 0x0F, 0x23),
        card_background: Color::Rgb(0x1A, 0x1A, 0x2E),
        text: Color::Rgb(0xE8, 0xE8, 0xF0),
        text_secondary: Color::Rgb(0x9C, 0xA3, 0xAF),
        primary: Color::Rgb(0xFF, 0x6B, 0x6B),
        primary_dark: Color::Rgb(0xEE, 0x5A, 0x52),
        success: Color::Rgb(0x51, 0xCF, 0x66),
        warning: Color::Rgb(0xFC, 0xC4, 0x19),
        info: Color::Rgb(0x4D, 0xAB, 0xF7),
        border: Color::Rgb(0x2D, 0x2D, 0x44),
        // rgba(0, 0, 0, 0.3)
        shadow: Color::Rgb(0x0B, 0x0B, 0x19),
        button_text: Color::Rgb(0xFF, 0xFF, 0xFF),
    };

    pub fn for_mode(mode: ThemeMode) -> &'static Self {
        match mode {
            ThemeMode::Light => &Self::LIGHT,
            ThemeMode::Dark => &Self::DARK,
        }
    }
}
