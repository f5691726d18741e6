use crate::{Palette, ThemeMode};
use ratatui::style::{Color, Modifier, Style};

/// Application theme - prebuilt styles on top of the active palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,

    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Borders
    pub border: Color,
    pub shadow: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let palette = Palette::for_mode(mode);
        Self {
            mode,
            bg_primary: palette.background,
            bg_panel: palette.card_background,
            text_primary: palette.text,
            text_muted: palette.text_secondary,
            accent_primary: palette.primary,
            accent_secondary: palette.primary_dark,
            status_success: palette.success,
            status_error: palette.primary_dark,
            status_warning: palette.warning,
            status_info: palette.info,
            border: palette.border,
            shadow: palette.shadow,
            selected_bg: palette.primary,
            selected_fg: palette.button_text,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the screen background
    pub fn background(&self) -> Style {
        Style::default().bg(self.bg_primary).fg(self.text_primary)
    }

    /// Style for cards and panels
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel).fg(self.text_primary)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers ("Order Items", "Order Summary")
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g., "Enter" in "Enter add to cart")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for prices and totals
    pub fn price(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for primary buttons ("Proceed to Checkout")
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for count badges (cart item count)
    pub fn badge(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the highlighted list row
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for warning messages
    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_follows_palette() {
        let dark = Theme::for_mode(ThemeMode::Dark);
        assert_eq!(dark.bg_primary, Palette::DARK.background);
        assert_eq!(dark.text_primary, Palette::DARK.text);
        assert_eq!(dark.accent_primary, Palette::DARK.primary);

        let light = Theme::default();
        assert_eq!(light.mode, ThemeMode::Light);
        assert_eq!(light.bg_panel, Palette::LIGHT.card_background);
    }

    #[test]
    fn test_styles_use_theme_colors() {
        let theme = Theme::for_mode(ThemeMode::Light);
        assert_eq!(theme.price().fg, Some(theme.accent_primary));
        assert_eq!(theme.badge().bg, Some(theme.status_success));
        assert!(theme.button().add_modifier.contains(Modifier::BOLD));
    }
}
