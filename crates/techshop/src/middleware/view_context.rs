//! View Context Middleware
//!
//! Translates context actions (Enter, +, -, remove) into whatever they mean
//! on the active view.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct ViewContextMiddleware;

impl ViewContextMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ViewContextMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for ViewContextMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::ViewContext(context) = action else {
            return true;
        };

        match state
            .active_view()
            .and_then(|view| view.translate_context_action(*context, state))
        {
            Some(translated) => {
                log::debug!("ViewContextMiddleware: {:?} -> {:?}", context, translated);
                dispatcher.dispatch(translated);
            }
            None => log::debug!("Context action not handled by active view: {:?}", context),
        }
        false
    }
}
