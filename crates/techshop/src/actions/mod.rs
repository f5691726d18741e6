//! Actions module
//!
//! Every state change in the application starts as an action. Actions are
//! organized by:
//! - Generic actions (Navigate, ViewContext) that the active view translates
//!   into screen-specific actions
//! - Global actions that affect the entire application
//! - Domain actions already targeted at one part of the state

// Shared action types
pub mod available_action;
pub mod context_action;
pub mod global;
pub mod navigation;

// Domain action types
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod confirmation_popup;
pub mod status_bar;
pub mod theme;

pub use available_action::AvailableAction;
pub use cart::CartAction;
pub use catalog::CatalogAction;
pub use checkout::CheckoutAction;
pub use confirmation_popup::ConfirmationPopupAction;
pub use context_action::ContextAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use status_bar::StatusBarAction;
pub use theme::ThemeAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - translated by the active view
    Navigate(NavigationAction),
    /// Context-sensitive action - translated by the active view
    ViewContext(ContextAction),

    /// Application-wide actions (quit, view stack, raw keys)
    Global(GlobalAction),

    // Domain actions (already targeted)
    /// Catalog screen selection
    Catalog(CatalogAction),
    /// Cart operations and cart screen selection
    Cart(CartAction),
    /// Checkout flow
    Checkout(CheckoutAction),
    /// Light/dark mode
    Theme(ThemeAction),
    /// Modal confirmation popup
    ConfirmationPopup(ConfirmationPopupAction),
    /// Status bar feedback
    StatusBar(StatusBarAction),
}
