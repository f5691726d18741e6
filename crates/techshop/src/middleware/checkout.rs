//! Checkout Middleware
//!
//! Guards the checkout flow: neither the summary nor the order can be
//! reached with an empty cart.

use crate::actions::{
    Action, CheckoutAction, ConfirmationPopupAction, GlobalAction, StatusBarAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, ConfirmationIntent};
use crate::views::CheckoutView;
use techshop_core::CheckoutSummary;

const SOURCE: &str = "Checkout";

pub struct CheckoutMiddleware;

impl CheckoutMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheckoutMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for CheckoutMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Checkout(checkout_action) = action else {
            return true;
        };

        if state.cart.is_empty() {
            log::info!("Checkout refused: cart is empty");
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "Your cart is empty",
                SOURCE,
            )));
            return false;
        }

        match checkout_action {
            CheckoutAction::Open => {
                dispatcher.dispatch(Action::Global(GlobalAction::PushView(Box::new(
                    CheckoutView::new(),
                ))));
            }
            CheckoutAction::Complete => {
                let summary = CheckoutSummary::from_cart(&state.cart);
                log::info!(
                    "Order placed: {} items, subtotal {}, tax {}, shipping {}, total {}",
                    state.cart.total_items(),
                    summary.subtotal,
                    summary.tax,
                    summary.shipping,
                    summary.total
                );
                dispatcher.dispatch(Action::ConfirmationPopup(ConfirmationPopupAction::Show(
                    ConfirmationIntent::OrderPlaced {
                        items: state.cart.total_items(),
                        total: summary.total,
                    },
                )));
            }
        }
        false
    }
}
