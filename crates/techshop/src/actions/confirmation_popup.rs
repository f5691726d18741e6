//! Confirmation Popup actions
//!
//! The popup is modal and has a single button; it can only be acknowledged.

use crate::state::ConfirmationIntent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationPopupAction {
    /// Show the popup for the given intent
    Show(ConfirmationIntent),
    /// User pressed OK - follow-up actions are dispatched by middleware
    Acknowledge,
    /// Follow-ups dispatched - close the popup (handled by reducer)
    Dismissed,
}
