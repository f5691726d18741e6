//! View model for the confirmation popup

use crate::state::ConfirmationPopupState;
use ratatui::style::Color;
use techshop_theme::Theme;

#[derive(Debug, Clone)]
pub struct ConfirmationPopupViewModel {
    pub title: String,
    pub message: String,
    pub detail: String,
    /// Label of the only button
    pub button: &'static str,
    /// Key that presses the button
    pub button_hint: String,
    pub border_fg: Color,
    pub message_fg: Color,
    pub detail_fg: Color,
}

impl ConfirmationPopupViewModel {
    pub fn from_state(state: &ConfirmationPopupState, button_hint: &str, theme: &Theme) -> Self {
        Self {
            title: state.intent.title().to_string(),
            message: state.intent.message().to_string(),
            detail: state.intent.detail(),
            button: "OK",
            button_hint: button_hint.to_string(),
            border_fg: theme.status_success,
            message_fg: theme.text_primary,
            detail_fg: theme.text_muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfirmationIntent;
    use techshop_core::Money;

    #[test]
    fn test_from_state() {
        let popup = ConfirmationPopupState::new(ConfirmationIntent::OrderPlaced {
            items: 2,
            total: Money::from_cents(4200),
        });
        let theme = Theme::default();

        let vm = ConfirmationPopupViewModel::from_state(&popup, "Enter", &theme);
        assert_eq!(vm.title, "Checkout Successful");
        assert_eq!(vm.message, "Thank you for your purchase!");
        assert_eq!(vm.detail, "2 items - $42.00 charged");
        assert_eq!(vm.button_hint, "Enter");
        assert_eq!(vm.border_fg, theme.status_success);
    }
}
