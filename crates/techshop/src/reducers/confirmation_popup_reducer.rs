//! Confirmation Popup Reducer
//!
//! Owns the popup state and its entry on the view stack.

use crate::actions::ConfirmationPopupAction;
use crate::state::{AppState, ConfirmationPopupState};
use crate::views::{ConfirmationPopupView, ViewId};

pub fn reduce_confirmation_popup(
    mut state: AppState,
    action: &ConfirmationPopupAction,
) -> AppState {
    match action {
        ConfirmationPopupAction::Show(intent) => {
            state.confirmation_popup = Some(ConfirmationPopupState::new(intent.clone()));
            state
                .view_stack
                .push(Box::new(ConfirmationPopupView::new()));
            log::debug!("Showing confirmation popup: {:?}", intent);
        }
        ConfirmationPopupAction::Acknowledge => {
            // Handled by middleware - should not reach reducer
        }
        ConfirmationPopupAction::Dismissed => {
            state.confirmation_popup = None;
            if state.active_view().map(|v| v.view_id()) == Some(ViewId::ConfirmationPopup) {
                state.view_stack.pop();
            }
            log::debug!("Confirmation popup dismissed");
        }
    }

    state
}
