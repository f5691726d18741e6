//! TechShop theme
//!
//! Two fixed palettes (light and dark) and the display mode that selects
//! between them. [`ThemeState`] is the only mutable part: it holds the mode
//! and flips it on toggle. Everything else is derived from the mode.

mod mode;
mod palette;
mod theme;

pub use mode::ThemeMode;
pub use palette::Palette;
pub use theme::Theme;

/// Display mode holder - the theme store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark_mode(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Colors for the current mode
    pub fn palette(&self) -> &'static Palette {
        Palette::for_mode(self.mode)
    }

    /// Prebuilt styles for the current mode
    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.mode)
    }
}
