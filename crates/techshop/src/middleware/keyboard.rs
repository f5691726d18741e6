//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C always quits, whatever is on screen.
//!
//! ## Layer 2: Capabilities
//! Modal views never take part in two-key sequences.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, drop commands the view has no capability for,
//! then check if the active view accepts the action. This is what keeps a
//! modal popup from being dismissed with Esc or navigated behind its back.

use crate::actions::{Action, ContextAction, GlobalAction};
use crate::capabilities::PanelCapabilities;
use crate::dispatcher::Dispatcher;
use crate::keybindings::PendingKey;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
pub struct KeyboardMiddleware {
    /// Pending key for two-key sequences
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // LAYER 1: Priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            self.pending_key = None;
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        // LAYER 2: Capability-based routing
        if capabilities.is_modal() {
            self.pending_key = None;
        }

        // LAYER 3: Keymap lookup + Gating
        let matched = state.keymap.match_key(&key, self.pending_key.take().as_ref());

        if let Some(pending_char) = matched.pending {
            if !capabilities.is_modal() {
                log::debug!(
                    "Layer 3: Waiting for second key in sequence (first: {})",
                    pending_char
                );
                self.pending_key = Some(PendingKey::new(pending_char));
            }
            return;
        }

        for cmd_id in matched.commands {
            let action = cmd_id.to_action();

            if !capability_allows(&action, capabilities) {
                log::debug!("Layer 3: Command {:?} needs a missing capability", cmd_id);
                continue;
            }

            match view {
                Some(view) if view.accepts_action(&action) => {
                    log::debug!("Layer 3: Command {:?} accepted by view, dispatching", cmd_id);
                    dispatcher.dispatch(action);
                    return;
                }
                Some(view) => {
                    log::debug!(
                        "Layer 3: Command {:?} rejected by view {:?}, trying next",
                        cmd_id,
                        view.view_id()
                    );
                }
                None => {
                    dispatcher.dispatch(action);
                    return;
                }
            }
        }

        log::trace!("Unhandled key: {:?}", key);
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Item navigation and quantity commands only reach views that declare them
fn capability_allows(action: &Action, capabilities: PanelCapabilities) -> bool {
    match action {
        Action::Navigate(_) => capabilities.supports_item_navigation(),
        Action::ViewContext(
            ContextAction::Increment | ContextAction::Decrement | ContextAction::Remove,
        ) => capabilities.supports_quantity_controls(),
        _ => true,
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::trace!("Key pressed: {:?}", key);
            self.handle_key(*key, state, dispatcher);
            // Raw keys never reach the reducer
            return false;
        }

        true
    }
}
