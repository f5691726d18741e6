//! Dispatcher for middleware action dispatch
//!
//! Actions dispatched here are queued on the store's channel and re-enter the
//! middleware chain from the beginning once the current action is done.
//! This is how a generic `Navigate` becomes a `Catalog` action, or an
//! acknowledged order turns into clearing the cart.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
