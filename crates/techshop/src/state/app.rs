//! Application State

use techshop_config::AppConfig;
use techshop_core::{Cart, Catalog};
use techshop_theme::{Theme, ThemeState};

use crate::keymap::{default_keymap, Keymap};
use crate::views::{CatalogView, View};

use super::{CartViewState, CatalogViewState, ConfirmationPopupState, StatusBarState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are overlays
    pub view_stack: Vec<Box<dyn View>>,
    /// Products on offer, loaded once at startup
    pub catalog: Catalog,
    pub catalog_view: CatalogViewState,
    pub cart: Cart,
    pub cart_view: CartViewState,
    /// Display mode; `theme` is always derived from it
    pub theme_state: ThemeState,
    pub theme: Theme,
    /// Present only while the popup is shown
    pub confirmation_popup: Option<ConfirmationPopupState>,
    pub status_bar: StatusBarState,
    pub keymap: Keymap,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &AppConfig) -> Self {
        let theme_state = ThemeState::new(config.theme);
        Self {
            running: true,
            view_stack: vec![Box::new(CatalogView::new())],
            catalog,
            catalog_view: CatalogViewState::default(),
            cart: Cart::new(),
            cart_view: CartViewState::default(),
            theme_state,
            theme: theme_state.theme(),
            confirmation_popup: None,
            status_bar: StatusBarState::default(),
            keymap: default_keymap(),
        }
    }

    /// The top-most (active) view
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|view| view.as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default(), &AppConfig::default())
    }
}
