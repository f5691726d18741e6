//! Navigation Translation Middleware
//!
//! Translates generic Navigation actions into view-specific actions using
//! the active view, so the translated action runs through the full chain.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Navigate(nav) = action else {
            return true;
        };

        match state
            .active_view()
            .and_then(|view| view.translate_navigation(*nav, state))
        {
            Some(translated) => {
                log::debug!("NavigationMiddleware: {:?} -> {:?}", nav, translated);
                dispatcher.dispatch(translated);
            }
            None => log::debug!("Navigation action not handled by active view: {:?}", nav),
        }
        false
    }
}
