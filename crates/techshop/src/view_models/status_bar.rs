//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub emoji: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05"), empty for the welcome line
    pub timestamp: String,
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_muted);

        match state.status_bar.latest() {
            Some(msg) => {
                let fg = match msg.kind {
                    StatusKind::Success => theme.status_success,
                    StatusKind::Warning => theme.status_warning,
                    StatusKind::Info => theme.status_info,
                };

                Self {
                    emoji: msg.kind.emoji(),
                    message: msg.message.clone(),
                    timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                    source: msg.source_action.clone(),
                    message_style: Style::default().fg(fg).add_modifier(Modifier::BOLD),
                    bg_color: theme.bg_primary,
                    metadata_style,
                }
            }
            None => Self {
                emoji: "👋",
                message: "Welcome to TechShop".to_string(),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusMessage;

    #[test]
    fn test_latest_message_wins() {
        let mut state = AppState::default();
        state.status_bar.push(StatusMessage::new(
            StatusKind::Info,
            "first",
            "Cart",
        ));
        state.status_bar.push(StatusMessage::new(
            StatusKind::Warning,
            "Your cart is empty",
            "Checkout",
        ));

        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "Your cart is empty");
        assert_eq!(vm.emoji, "⚠️");
        assert_eq!(vm.source, "Checkout");
        assert_eq!(vm.message_style.fg, Some(state.theme.status_warning));
    }
}
