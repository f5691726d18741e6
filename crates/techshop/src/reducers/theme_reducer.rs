//! Theme Reducer

use crate::actions::ThemeAction;
use crate::state::AppState;

pub fn reduce_theme(mut state: AppState, action: &ThemeAction) -> AppState {
    match action {
        ThemeAction::Toggle => {
            state.theme_state.toggle_theme();
            state.theme = state.theme_state.theme();
            log::info!("Theme switched to {}", state.theme_state.mode());
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use techshop_theme::{Theme, ThemeMode};

    #[test]
    fn test_toggle_keeps_theme_in_sync() {
        let state = reduce_theme(AppState::default(), &ThemeAction::Toggle);
        assert!(state.theme_state.is_dark_mode());
        assert_eq!(state.theme, Theme::for_mode(ThemeMode::Dark));

        let state = reduce_theme(state, &ThemeAction::Toggle);
        assert_eq!(state.theme_state.mode(), ThemeMode::Light);
        assert_eq!(state.theme, Theme::for_mode(ThemeMode::Light));
    }
}
