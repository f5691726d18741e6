use crate::actions::{Action, AvailableAction, ContextAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub mod cart_view;
pub mod catalog_view;
pub mod checkout_view;
pub mod confirmation_popup_view;
pub mod footer;
pub mod status_bar;

pub use cart_view::CartView;
pub use catalog_view::CatalogView;
pub use checkout_view::CheckoutView;
pub use confirmation_popup_view::ConfirmationPopupView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Catalog,
    Cart,
    Checkout,
    ConfirmationPopup,
}

/// View trait - the interface every screen implements
///
/// Must stay object-safe: views live on the stack as `Box<dyn View>`.
pub trait View: std::fmt::Debug + Send {
    fn view_id(&self) -> ViewId;

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action.
    fn translate_navigation(&self, _nav: NavigationAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a context action (Enter, +, -, remove) to this view's action.
    fn translate_context_action(
        &self,
        _action: ContextAction,
        _state: &AppState,
    ) -> Option<Action> {
        None
    }

    /// Whether a key-triggered action may reach this view
    fn accepts_action(&self, action: &Action) -> bool;

    /// Commands shown in the footer
    fn available_actions(&self, _state: &AppState) -> Vec<AvailableAction> {
        Vec::new()
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views are rendered bottom-up, so overlays end up on top.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}

/// Areas shared by every full-screen view
pub(crate) struct ScreenLayout {
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

/// Split a screen into header, content, key hints footer and status bar
pub(crate) fn screen_layout(area: Rect, header_height: u16) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
        status_bar: chunks[3],
    }
}
