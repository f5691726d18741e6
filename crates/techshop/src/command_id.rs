//! Command identifiers
//!
//! Every key binding points at a `CommandId`. Commands are the semantic
//! actions a user can trigger; the active view decides whether it accepts
//! the resulting action.

use serde::{Deserialize, Serialize};

use crate::actions::{
    Action, CheckoutAction, ContextAction, GlobalAction, NavigationAction, ThemeAction,
};
use crate::views::CartView;

/// Unique identifier for each command in the application.
///
/// Serialized as snake_case (e.g., `CartOpen` -> `"cart_open"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    /// Move the selection down
    NavigateNext,
    /// Move the selection up
    NavigatePrevious,
    /// Jump to the first item (gg in vim)
    NavigateToTop,
    /// Jump to the last item (G in vim)
    NavigateToBottom,

    // === Context actions (meaning depends on the active view) ===
    /// Primary action on the focused item (Enter)
    Confirm,
    /// One more of the focused item
    Increment,
    /// One less of the focused item
    Decrement,
    /// Drop the focused item
    Remove,

    // === Shop ===
    /// Open the cart screen
    CartOpen,
    /// Go to the checkout summary
    CheckoutOpen,
    /// Switch between light and dark mode
    ThemeToggle,

    // === General ===
    /// Close the current view
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::Confirm => Action::ViewContext(ContextAction::Confirm),
            Self::Increment => Action::ViewContext(ContextAction::Increment),
            Self::Decrement => Action::ViewContext(ContextAction::Decrement),
            Self::Remove => Action::ViewContext(ContextAction::Remove),

            Self::CartOpen => Action::Global(GlobalAction::PushView(Box::new(CartView::new()))),
            Self::CheckoutOpen => Action::Checkout(CheckoutAction::Open),
            Self::ThemeToggle => Action::Theme(ThemeAction::Toggle),

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ViewId;

    #[test]
    fn test_cart_open_pushes_cart_view() {
        match CommandId::CartOpen.to_action() {
            Action::Global(GlobalAction::PushView(view)) => {
                assert_eq!(view.view_id(), ViewId::Cart);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_context_commands_map_to_view_context() {
        assert!(matches!(
            CommandId::Confirm.to_action(),
            Action::ViewContext(ContextAction::Confirm)
        ));
        assert!(matches!(
            CommandId::Remove.to_action(),
            Action::ViewContext(ContextAction::Remove)
        ));
    }
}
