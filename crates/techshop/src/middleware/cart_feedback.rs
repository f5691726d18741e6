//! Cart Feedback Middleware
//!
//! Observes cart operations before they are reduced and reports them in the
//! status bar. Never consumes anything.

use crate::actions::{Action, CartAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

const SOURCE: &str = "Cart";

pub struct CartFeedbackMiddleware;

impl CartFeedbackMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CartFeedbackMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for CartFeedbackMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Cart(cart_action) = action else {
            return true;
        };

        let feedback = match cart_action {
            CartAction::AddToCart(id) => state
                .catalog
                .get(*id)
                .map(|p| StatusBarAction::success(format!("Added {} to cart", p.name), SOURCE)),
            CartAction::RemoveFromCart(id) => state
                .cart
                .line(*id)
                .map(|line| StatusBarAction::info(format!("Removed {} from cart", line.name), SOURCE)),
            // Dropping the last unit removes the line
            CartAction::DecrementQuantity(id) => state
                .cart
                .line(*id)
                .filter(|line| line.quantity() == 1)
                .map(|line| StatusBarAction::info(format!("Removed {} from cart", line.name), SOURCE)),
            _ => None,
        };

        if let Some(feedback) = feedback {
            dispatcher.dispatch(Action::StatusBar(feedback));
        }
        true
    }
}
