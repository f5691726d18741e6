//! Confirmation Popup Middleware
//!
//! Turns an acknowledged popup into the follow-up actions of its intent.

use crate::actions::{
    Action, CartAction, ConfirmationPopupAction, GlobalAction, StatusBarAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, ConfirmationIntent};
use crate::views::CatalogView;

pub struct ConfirmationPopupMiddleware;

impl ConfirmationPopupMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfirmationPopupMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for ConfirmationPopupMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if !matches!(
            action,
            Action::ConfirmationPopup(ConfirmationPopupAction::Acknowledge)
        ) {
            return true;
        }

        if let Some(popup) = &state.confirmation_popup {
            log::debug!("Confirmation popup acknowledged: {:?}", popup.intent);
            dispatcher.dispatch(Action::ConfirmationPopup(
                ConfirmationPopupAction::Dismissed,
            ));

            match &popup.intent {
                ConfirmationIntent::OrderPlaced { total, .. } => {
                    dispatcher.dispatch(Action::Cart(CartAction::ClearCart));
                    dispatcher.dispatch(Action::Global(GlobalAction::ReplaceView(Box::new(
                        CatalogView::new(),
                    ))));
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        format!("Order of {} placed", total),
                        "Checkout",
                    )));
                }
            }
        }
        false
    }
}
