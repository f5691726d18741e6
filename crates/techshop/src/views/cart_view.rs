//! Cart View
//!
//! Lines with quantity controls and the cart total, or an empty state that
//! sends the user back to the catalog.

use crate::actions::{
    Action, AvailableAction, CartAction, CheckoutAction, ContextAction, GlobalAction,
    NavigationAction,
};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use crate::view_models::{CartViewModel, StatusBarViewModel};
use crate::views::status_bar::StatusBarWidget;
use crate::views::{footer, screen_layout, CatalogView, View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use techshop_theme::Theme;

#[derive(Debug, Clone)]
pub struct CartView;

impl CartView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CartView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for CartView {
    fn view_id(&self) -> ViewId {
        ViewId::Cart
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = CartViewModel::from_state(state);
        let theme = &state.theme;
        let layout = screen_layout(area, 2);

        f.render_widget(Block::default().style(theme.background()), area);

        let header = Paragraph::new(Line::from(Span::styled(
            format!(" {}", vm.title),
            theme.panel_title(),
        )))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.panel_border()),
        )
        .style(theme.panel_background());
        f.render_widget(header, layout.header);

        if vm.is_empty() {
            render_empty(&vm, theme, layout.content, f);
        } else {
            render_lines(&vm, theme, layout.content, f);
        }

        footer::render(state, &self.available_actions(state), layout.footer, f);
        let status_vm = StatusBarViewModel::from_state(state);
        f.render_widget(StatusBarWidget(&status_vm), layout.status_bar);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        if state.cart.is_empty() {
            PanelCapabilities::empty()
        } else {
            PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::QUANTITY_CONTROLS
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, _state: &AppState) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => CartAction::NavigateNext,
            NavigationAction::Previous => CartAction::NavigatePrevious,
            NavigationAction::ToTop => CartAction::NavigateToTop,
            NavigationAction::ToBottom => CartAction::NavigateToBottom,
        };
        Some(Action::Cart(action))
    }

    fn translate_context_action(&self, action: ContextAction, state: &AppState) -> Option<Action> {
        if state.cart.is_empty() {
            // "Start Shopping"
            return match action {
                ContextAction::Confirm => Some(Action::Global(GlobalAction::ReplaceView(
                    Box::new(CatalogView::new()),
                ))),
                _ => None,
            };
        }

        if action == ContextAction::Confirm {
            return Some(Action::Checkout(CheckoutAction::Open));
        }

        let id = state.cart.lines().get(state.cart_view.selected)?.id;
        let cart_action = match action {
            ContextAction::Increment => CartAction::IncrementQuantity(id),
            ContextAction::Decrement => CartAction::DecrementQuantity(id),
            ContextAction::Remove => CartAction::RemoveFromCart(id),
            ContextAction::Confirm => return None,
        };
        Some(Action::Cart(cart_action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Cart(_)
                | Action::Checkout(CheckoutAction::Open)
                | Action::Navigate(_)
                | Action::ViewContext(_)
                | Action::Theme(_)
                | Action::Global(_)
        )
    }

    fn available_actions(&self, state: &AppState) -> Vec<AvailableAction> {
        if state.cart.is_empty() {
            return vec![
                AvailableAction::primary(CommandId::Confirm, "Start Shopping"),
                AvailableAction::navigation(CommandId::GlobalClose, "Back"),
            ];
        }

        vec![
            AvailableAction::primary(CommandId::Confirm, "Proceed to Checkout"),
            AvailableAction::edit(CommandId::Increment, "More"),
            AvailableAction::edit(CommandId::Decrement, "Less"),
            AvailableAction::edit(CommandId::Remove, "Remove"),
            AvailableAction::navigation(CommandId::GlobalClose, "Back"),
        ]
    }
}

fn render_empty(vm: &CartViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let top = area.height.saturating_sub(6) / 2;
    let mut text = vec![Line::from(""); top as usize];
    text.extend([
        Line::from("🛒"),
        Line::from(""),
        Line::from(Span::styled(vm.empty_title, theme.text().bold())),
        Line::from(Span::styled(vm.empty_subtitle, theme.muted())),
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", vm.empty_action), theme.button())),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(theme.background());
    f.render_widget(paragraph, area);
}

fn render_lines(vm: &CartViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let header = Row::new(
        ["", "Product", "Price", "Qty", "Total"]
            .into_iter()
            .map(|h| Cell::from(h).style(theme.muted().bold())),
    );

    let rows: Vec<Row> = vm
        .lines
        .iter()
        .map(|line| {
            Row::new(vec![
                Cell::from(format!(" {}", line.glyph)),
                Cell::from(line.name.clone()).style(theme.text().bold()),
                Cell::from(line.unit_price.clone()).style(theme.price()),
                Cell::from(format!("− {} +", line.quantity)),
                Cell::from(Line::from(line.line_total.clone()).right_aligned()),
            ])
            .style(theme.panel_background())
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::bordered()
                .border_style(theme.panel_border())
                .style(theme.panel_background()),
        )
        .row_highlight_style(theme.selected())
        .highlight_symbol("▌");

    let mut table_state = TableState::default();
    table_state.select(Some(vm.selected_index));
    f.render_stateful_widget(table, chunks[0], &mut table_state);

    let total = Paragraph::new(Line::from(vec![
        Span::styled(" Total: ", theme.text().bold()),
        Span::styled(vm.total.clone(), theme.price()),
    ]))
    .block(
        Block::bordered()
            .border_style(theme.panel_border())
            .style(theme.panel_background()),
    );
    f.render_widget(total, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use techshop_core::{Money, Product, ProductId, ProductImage};

    fn state_with_lines() -> AppState {
        let mut state = AppState::default();
        for (id, cents) in [(1, 1000), (2, 500)] {
            let product = Product::new(
                id,
                format!("Product {id}"),
                Money::from_cents(cents),
                "",
                ProductImage::classify("📦"),
            );
            state.cart.add_to_cart(&product);
        }
        state
    }

    #[test]
    fn test_context_actions_target_selected_line() {
        let mut state = state_with_lines();
        state.cart_view.selected = 1;
        let view = CartView::new();

        assert!(matches!(
            view.translate_context_action(ContextAction::Increment, &state),
            Some(Action::Cart(CartAction::IncrementQuantity(ProductId(2))))
        ));
        assert!(matches!(
            view.translate_context_action(ContextAction::Decrement, &state),
            Some(Action::Cart(CartAction::DecrementQuantity(ProductId(2))))
        ));
        assert!(matches!(
            view.translate_context_action(ContextAction::Remove, &state),
            Some(Action::Cart(CartAction::RemoveFromCart(ProductId(2))))
        ));
        assert!(matches!(
            view.translate_context_action(ContextAction::Confirm, &state),
            Some(Action::Checkout(CheckoutAction::Open))
        ));
    }

    #[test]
    fn test_empty_cart_confirm_starts_shopping() {
        let state = AppState::default();
        let view = CartView::new();

        match view.translate_context_action(ContextAction::Confirm, &state) {
            Some(Action::Global(GlobalAction::ReplaceView(next))) => {
                assert_eq!(next.view_id(), ViewId::Catalog);
            }
            other => panic!("unexpected action: {:?}", other),
        }
        assert!(view
            .translate_context_action(ContextAction::Increment, &state)
            .is_none());
        assert!(view.capabilities(&state).is_empty());
    }
}
