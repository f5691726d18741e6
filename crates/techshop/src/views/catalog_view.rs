//! Catalog View
//!
//! The home screen: header with theme toggle and cart button, then the
//! product list.

use crate::actions::{
    Action, AvailableAction, CartAction, CatalogAction, ContextAction, NavigationAction,
};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use crate::view_models::{CatalogViewModel, StatusBarViewModel};
use crate::views::status_bar::StatusBarWidget;
use crate::views::{footer, screen_layout, View, ViewId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use techshop_theme::Theme;

/// Product catalog - the bottom of the view stack
#[derive(Debug, Clone)]
pub struct CatalogView;

impl CatalogView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for CatalogView {
    fn view_id(&self) -> ViewId {
        ViewId::Catalog
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = CatalogViewModel::from_state(state);
        let theme = &state.theme;
        let layout = screen_layout(area, 4);

        f.render_widget(Block::default().style(theme.background()), area);
        render_header(&vm, theme, layout.header, f);
        render_products(&vm, theme, layout.content, f);
        footer::render(state, &self.available_actions(state), layout.footer, f);

        let status_vm = StatusBarViewModel::from_state(state);
        f.render_widget(StatusBarWidget(&status_vm), layout.status_bar);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, _state: &AppState) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => CatalogAction::NavigateNext,
            NavigationAction::Previous => CatalogAction::NavigatePrevious,
            NavigationAction::ToTop => CatalogAction::NavigateToTop,
            NavigationAction::ToBottom => CatalogAction::NavigateToBottom,
        };
        Some(Action::Catalog(action))
    }

    fn translate_context_action(&self, action: ContextAction, state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => {
                let product = state.catalog.at(state.catalog_view.selected)?;
                Some(Action::Cart(CartAction::AddToCart(product.id)))
            }
            _ => None,
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Catalog(_)
                | Action::Cart(CartAction::AddToCart(_))
                | Action::Navigate(_)
                | Action::ViewContext(ContextAction::Confirm)
                | Action::Theme(_)
                | Action::Global(_)
        )
    }

    fn available_actions(&self, _state: &AppState) -> Vec<AvailableAction> {
        vec![
            AvailableAction::primary(CommandId::Confirm, "Add to Cart"),
            AvailableAction::primary(CommandId::CartOpen, "Cart"),
            AvailableAction::navigation(CommandId::ThemeToggle, "Theme"),
            AvailableAction::navigation(CommandId::GlobalClose, "Quit"),
        ]
    }
}

fn render_header(vm: &CatalogViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(format!(" {}", vm.title), theme.panel_title())),
        Line::from(Span::styled(format!(" {}", vm.subtitle), theme.muted())),
    ]);
    f.render_widget(title, chunks[0]);

    let mut controls = vec![
        Span::raw(vm.theme_icon),
        Span::raw("  "),
        Span::styled(" 🛒 Cart ", theme.button()),
    ];
    if let Some(badge) = &vm.cart_badge {
        controls.push(Span::raw(" "));
        controls.push(Span::styled(format!(" {} ", badge), theme.badge()));
    }
    controls.push(Span::raw(" "));
    f.render_widget(
        Paragraph::new(Line::from(controls).right_aligned()),
        chunks[1],
    );
}

fn render_products(vm: &CatalogViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row| {
            let details = Text::from(vec![
                Line::from(Span::styled(row.name.clone(), theme.text().bold())),
                Line::from(Span::styled(row.description.clone(), theme.muted())),
            ]);
            Row::new(vec![
                Cell::from(format!(" {}", row.glyph)),
                Cell::from(details),
                Cell::from(Line::from(row.price.clone()).right_aligned()).style(theme.price()),
            ])
            .height(3)
            .style(theme.panel_background())
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .block(
            Block::bordered()
                .title(" Products ")
                .title_style(theme.panel_title())
                .border_style(theme.panel_border())
                .style(theme.panel_background()),
        )
        .row_highlight_style(theme.selected())
        .highlight_symbol("▌");

    let mut table_state = TableState::default();
    if !vm.rows.is_empty() {
        table_state.select(Some(vm.selected_index));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use techshop_config::AppConfig;
    use techshop_core::{BuiltinCatalog, CatalogProvider, ProductId};

    fn state() -> AppState {
        AppState::new(BuiltinCatalog.load().unwrap(), &AppConfig::default())
    }

    #[test]
    fn test_confirm_adds_selected_product() {
        let mut state = state();
        state.catalog_view.selected = 1;

        let action = CatalogView::new().translate_context_action(ContextAction::Confirm, &state);
        assert!(matches!(
            action,
            Some(Action::Cart(CartAction::AddToCart(ProductId(2))))
        ));
    }

    #[test]
    fn test_quantity_controls_are_not_offered() {
        let view = CatalogView::new();
        assert!(!view.accepts_action(&Action::ViewContext(ContextAction::Remove)));
        assert!(view
            .translate_context_action(ContextAction::Increment, &state())
            .is_none());
    }
}
