//! Available Action - a command the active view offers right now.
//!
//! Used to render the key hints footer.

use crate::command_id::CommandId;

/// Category for ordering hints in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActionCategory {
    /// Primary actions (add to cart, checkout)
    Primary,
    /// Quantity and removal controls
    Edit,
    /// Navigation and view switching
    Navigation,
}

/// An action available in the current view context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableAction {
    /// The command that triggers this action
    pub command: CommandId,
    /// Short label for display (e.g., "Add to Cart", "Back")
    pub label: &'static str,
    pub category: ActionCategory,
}

impl AvailableAction {
    pub fn new(command: CommandId, label: &'static str, category: ActionCategory) -> Self {
        Self {
            command,
            label,
            category,
        }
    }

    pub fn primary(command: CommandId, label: &'static str) -> Self {
        Self::new(command, label, ActionCategory::Primary)
    }

    pub fn edit(command: CommandId, label: &'static str) -> Self {
        Self::new(command, label, ActionCategory::Edit)
    }

    pub fn navigation(command: CommandId, label: &'static str) -> Self {
        Self::new(command, label, ActionCategory::Navigation)
    }
}
