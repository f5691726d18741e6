//! Key hints footer
//!
//! Renders the active view's available actions as `key label` pairs, with
//! the keys looked up in the keymap.

use crate::actions::AvailableAction;
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the hint line for a set of actions
pub fn hint_line<'a>(state: &AppState, actions: &[AvailableAction]) -> Line<'a> {
    let theme = &state.theme;
    let mut sorted: Vec<&AvailableAction> = actions.iter().collect();
    sorted.sort_by_key(|action| action.category);

    let mut spans = vec![Span::raw(" ")];
    for action in sorted {
        let Some(keys) = state.keymap.compact_hint_for_command(action.command) else {
            continue;
        };
        spans.push(Span::styled(keys, theme.key_hint()));
        spans.push(Span::styled(
            format!(" {}  ", action.label),
            theme.key_description(),
        ));
    }
    Line::from(spans)
}

pub fn render(state: &AppState, actions: &[AvailableAction], area: Rect, f: &mut Frame) {
    let paragraph = Paragraph::new(hint_line(state, actions)).style(state.theme.background());
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_id::CommandId;

    #[test]
    fn test_hint_line_orders_by_category() {
        let state = AppState::default();
        let actions = vec![
            AvailableAction::navigation(CommandId::GlobalQuit, "Quit"),
            AvailableAction::primary(CommandId::Confirm, "Add to Cart"),
        ];

        let line = hint_line(&state, &actions);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Enter Add to Cart  Ctrl+C Quit  ");
    }
}
