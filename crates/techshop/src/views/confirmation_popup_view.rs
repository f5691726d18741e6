//! Confirmation Popup View
//!
//! A floating modal with a message and a single OK button. It cannot be
//! dismissed any other way.

use crate::actions::{
    Action, AvailableAction, ConfirmationPopupAction, ContextAction, GlobalAction,
};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use crate::view_models::ConfirmationPopupViewModel;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use techshop_theme::Theme;

#[derive(Debug, Clone)]
pub struct ConfirmationPopupView;

impl ConfirmationPopupView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfirmationPopupView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ConfirmationPopupView {
    fn view_id(&self) -> ViewId {
        ViewId::ConfirmationPopup
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        if let Some(popup_state) = &state.confirmation_popup {
            let hint = state
                .keymap
                .hint_for_command(CommandId::Confirm)
                .unwrap_or("Enter");
            let vm = ConfirmationPopupViewModel::from_state(popup_state, hint, &state.theme);
            render_popup(f, &vm, &state.theme, area);
        }
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::MODAL
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::ConfirmationPopup(
                ConfirmationPopupAction::Acknowledge,
            )),
            _ => None,
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::ConfirmationPopup(_)
                | Action::ViewContext(ContextAction::Confirm)
                | Action::Global(GlobalAction::Quit)
        )
    }

    fn available_actions(&self, _state: &AppState) -> Vec<AvailableAction> {
        vec![AvailableAction::primary(CommandId::Confirm, "OK")]
    }
}

/// Render the popup as a centered floating window over a dimmed screen
fn render_popup(f: &mut Frame, vm: &ConfirmationPopupViewModel, theme: &Theme, area: Rect) {
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    let popup_width = (area.width * 50 / 100).clamp(40, 60).min(area.width);
    let popup_height = 9.min(area.height);
    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(popup_width) / 2,
        y: area.y + area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" ", theme.muted()),
        Span::styled(vm.button_hint.clone(), theme.key_hint()),
        Span::styled(" ok ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", vm.title))
        .title_style(theme.panel_title())
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(vm.border_fg).add_modifier(Modifier::BOLD))
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Message
            Constraint::Length(1), // Detail
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Button
            Constraint::Min(0),
        ])
        .split(inner);

    let message = Paragraph::new(Span::styled(
        vm.message.clone(),
        Style::default().fg(vm.message_fg).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(message, chunks[1]);

    let detail = Paragraph::new(Span::styled(
        vm.detail.clone(),
        Style::default().fg(vm.detail_fg),
    ))
    .alignment(Alignment::Center);
    f.render_widget(detail, chunks[2]);

    let button = Paragraph::new(Span::styled(format!("  {}  ", vm.button), theme.button().bold()))
        .alignment(Alignment::Center);
    f.render_widget(button, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_cannot_be_closed() {
        let view = ConfirmationPopupView::new();
        assert!(!view.accepts_action(&Action::Global(GlobalAction::Close)));
        assert!(view.accepts_action(&Action::Global(GlobalAction::Quit)));
        assert!(view.accepts_action(&Action::ViewContext(ContextAction::Confirm)));
        assert!(view.capabilities(&AppState::default()).is_modal());
    }

    #[test]
    fn test_confirm_acknowledges() {
        assert!(matches!(
            ConfirmationPopupView::new()
                .translate_context_action(ContextAction::Confirm, &AppState::default()),
            Some(Action::ConfirmationPopup(
                ConfirmationPopupAction::Acknowledge
            ))
        ));
    }
}
