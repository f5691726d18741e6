//! Checkout View
//!
//! Order items and the pricing summary with the "Complete Checkout" button.

use crate::actions::{
    Action, AvailableAction, CheckoutAction, ContextAction, GlobalAction,
};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use crate::view_models::{CheckoutViewModel, StatusBarViewModel};
use crate::views::status_bar::StatusBarWidget;
use crate::views::{footer, screen_layout, View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use techshop_theme::Theme;

#[derive(Debug, Clone)]
pub struct CheckoutView;

impl CheckoutView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheckoutView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for CheckoutView {
    fn view_id(&self) -> ViewId {
        ViewId::Checkout
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = CheckoutViewModel::from_state(state);
        let theme = &state.theme;
        let layout = screen_layout(area, 2);

        f.render_widget(Block::default().style(theme.background()), area);

        let header = Paragraph::new(Line::from(Span::styled(" Checkout", theme.panel_title())))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(theme.panel_border()),
            )
            .style(theme.panel_background());
        f.render_widget(header, layout.header);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(9)])
            .split(layout.content);

        render_items(&vm, theme, chunks[0], f);
        render_summary(&vm, theme, chunks[1], f);

        footer::render(state, &self.available_actions(state), layout.footer, f);
        let status_vm = StatusBarViewModel::from_state(state);
        f.render_widget(StatusBarWidget(&status_vm), layout.status_bar);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::Checkout(CheckoutAction::Complete)),
            _ => None,
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Checkout(CheckoutAction::Complete)
                | Action::ViewContext(ContextAction::Confirm)
                | Action::Theme(_)
                | Action::Global(GlobalAction::Close | GlobalAction::Quit)
        )
    }

    fn available_actions(&self, _state: &AppState) -> Vec<AvailableAction> {
        vec![
            AvailableAction::primary(CommandId::Confirm, "Complete Checkout"),
            AvailableAction::navigation(CommandId::GlobalClose, "Back"),
        ]
    }
}

fn section_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::bordered()
        .title(Span::styled(format!(" {} ", title), theme.section_header()))
        .border_style(theme.panel_border())
        .style(theme.panel_background())
}

fn render_items(vm: &CheckoutViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let rows: Vec<Row> = vm
        .items
        .iter()
        .map(|item| {
            let details = Text::from(vec![
                Line::from(Span::styled(item.name.clone(), theme.text().bold())),
                Line::from(Span::styled(item.quantity.clone(), theme.muted())),
            ]);
            Row::new(vec![
                Cell::from(details),
                Cell::from(Line::from(item.unit_breakdown.clone()).right_aligned())
                    .style(theme.muted()),
                Cell::from(Line::from(item.line_total.clone()).right_aligned())
                    .style(theme.price()),
            ])
            .height(2)
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).block(section_block("Order Items", theme));
    f.render_widget(table, area);
}

fn render_summary(vm: &CheckoutViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = section_block("Order Summary", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtotal
            Constraint::Length(1), // Tax
            Constraint::Length(1), // Shipping
            Constraint::Length(1), // Total
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Button
            Constraint::Min(0),
        ])
        .split(inner);

    let summary_rows = [
        ("Subtotal", vm.subtotal.as_str()),
        (vm.tax_label, vm.tax.as_str()),
        ("Shipping", vm.shipping.as_str()),
    ];
    for (chunk, (label, amount)) in chunks.iter().zip(summary_rows) {
        render_amount_row(label, amount, theme.text(), theme.text(), *chunk, f);
    }

    render_amount_row(
        "Total",
        &vm.total,
        theme.text().bold(),
        theme.price(),
        chunks[3],
        f,
    );

    let button = Paragraph::new(Line::from(Span::styled(
        format!("  {}  ", vm.button_label),
        theme.button(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(button, chunks[5]);
}

fn render_amount_row(
    label: &str,
    amount: &str,
    label_style: ratatui::style::Style,
    amount_style: ratatui::style::Style,
    area: Rect,
    f: &mut Frame,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(14)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(label.to_string(), label_style)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(amount.to_string(), amount_style)).right_aligned()),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_completes_checkout() {
        let state = AppState::default();
        assert!(matches!(
            CheckoutView::new().translate_context_action(ContextAction::Confirm, &state),
            Some(Action::Checkout(CheckoutAction::Complete))
        ));
    }

    #[test]
    fn test_gating() {
        let view = CheckoutView::new();
        assert!(view.accepts_action(&Action::Global(GlobalAction::Close)));
        assert!(!view.accepts_action(&Action::Checkout(CheckoutAction::Open)));
        assert!(!view.accepts_action(&Action::ViewContext(ContextAction::Increment)));
    }
}
