use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{channel, Receiver};

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action and everything middleware dispatches in response
    ///
    /// Follow-up actions are handled in the order they were dispatched, and
    /// all of them are done before this returns.
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);

        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
        }
    }

    /// Run one action through the middleware chain and, unless consumed, the reducer
    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GlobalAction;
    use crate::middleware::{
        cart_feedback::CartFeedbackMiddleware, checkout::CheckoutMiddleware,
        confirmation_popup::ConfirmationPopupMiddleware, keyboard::KeyboardMiddleware,
        logging::LoggingMiddleware, navigation::NavigationMiddleware,
        view_context::ViewContextMiddleware,
    };
    use crate::state::StatusKind;
    use crate::views::ViewId;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use techshop_config::AppConfig;
    use techshop_core::{BuiltinCatalog, CatalogProvider, Money, ProductId};

    fn store() -> Store {
        let catalog = BuiltinCatalog.load().unwrap();
        let mut store = Store::new(AppState::new(catalog, &AppConfig::default()));
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(KeyboardMiddleware::new()));
        store.add_middleware(Box::new(NavigationMiddleware::new()));
        store.add_middleware(Box::new(ViewContextMiddleware::new()));
        store.add_middleware(Box::new(CheckoutMiddleware::new()));
        store.add_middleware(Box::new(ConfirmationPopupMiddleware::new()));
        store.add_middleware(Box::new(CartFeedbackMiddleware::new()));
        store
    }

    fn press(store: &mut Store, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
    }

    fn view_ids(store: &Store) -> Vec<ViewId> {
        store.state().view_stack.iter().map(|v| v.view_id()).collect()
    }

    fn latest_status(store: &Store) -> Option<(StatusKind, String)> {
        store
            .state()
            .status_bar
            .latest()
            .map(|m| (m.kind, m.message.clone()))
    }

    #[test]
    fn test_full_purchase_flow() {
        let mut store = store();

        // Headphones, then the watch
        press(&mut store, KeyCode::Enter);
        assert_eq!(
            latest_status(&store),
            Some((StatusKind::Success, "Added Wireless Headphones to cart".to_string()))
        );
        press(&mut store, KeyCode::Char('j'));
        press(&mut store, KeyCode::Enter);
        assert_eq!(store.state().cart.total_items(), 2);
        assert_eq!(store.state().catalog_view.selected, 1);

        press(&mut store, KeyCode::Char('c'));
        assert_eq!(view_ids(&store), vec![ViewId::Catalog, ViewId::Cart]);

        // One more pair of headphones from the cart screen
        press(&mut store, KeyCode::Char('+'));
        assert_eq!(
            store.state().cart.line(ProductId(1)).map(|l| l.quantity()),
            Some(2)
        );

        press(&mut store, KeyCode::Enter);
        assert_eq!(
            view_ids(&store),
            vec![ViewId::Catalog, ViewId::Cart, ViewId::Checkout]
        );

        press(&mut store, KeyCode::Enter);
        assert_eq!(view_ids(&store).last(), Some(&ViewId::ConfirmationPopup));
        assert!(store.state().confirmation_popup.is_some());

        // The popup can only be acknowledged
        press(&mut store, KeyCode::Esc);
        press(&mut store, KeyCode::Char('q'));
        assert_eq!(view_ids(&store).last(), Some(&ViewId::ConfirmationPopup));
        assert!(store.state().running);

        press(&mut store, KeyCode::Enter);
        assert!(store.state().cart.is_empty());
        assert!(store.state().confirmation_popup.is_none());
        assert_eq!(view_ids(&store), vec![ViewId::Catalog]);

        // 2 x 79.99 + 199.99 = 359.97, + 36.00 tax + 9.99 shipping
        let total = Money::from_cents(35997 + 3600 + 999);
        assert_eq!(
            latest_status(&store),
            Some((StatusKind::Success, format!("Order of {} placed", total)))
        );
    }

    #[test]
    fn test_checkout_refused_for_empty_cart() {
        let mut store = store();

        press(&mut store, KeyCode::Char('c'));
        press(&mut store, KeyCode::Char('p'));

        assert_eq!(view_ids(&store), vec![ViewId::Catalog, ViewId::Cart]);
        assert_eq!(
            latest_status(&store),
            Some((StatusKind::Warning, "Your cart is empty".to_string()))
        );
    }

    #[test]
    fn test_empty_cart_start_shopping_returns_to_catalog() {
        let mut store = store();

        press(&mut store, KeyCode::Char('c'));
        press(&mut store, KeyCode::Enter);

        assert_eq!(view_ids(&store), vec![ViewId::Catalog]);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut store = store();

        press(&mut store, KeyCode::Enter);
        press(&mut store, KeyCode::Char('c'));
        press(&mut store, KeyCode::Char('-'));

        assert!(store.state().cart.is_empty());
        assert_eq!(
            latest_status(&store),
            Some((StatusKind::Info, "Removed Wireless Headphones from cart".to_string()))
        );
    }

    #[test]
    fn test_theme_toggle_and_quit() {
        let mut store = store();
        let initial = store.state().theme_state.mode();

        press(&mut store, KeyCode::Char('t'));
        assert_ne!(store.state().theme_state.mode(), initial);
        assert_eq!(store.state().theme.mode, store.state().theme_state.mode());

        press(&mut store, KeyCode::Char('q'));
        assert!(!store.state().running);
    }
}
