//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod cart_view;
mod catalog_view;
mod confirmation_popup;
mod status_bar;

pub use app::AppState;
pub use cart_view::CartViewState;
pub use catalog_view::CatalogViewState;
pub use confirmation_popup::{ConfirmationIntent, ConfirmationPopupState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};

/// Move a list selection one step forward, wrapping at the end
pub(crate) fn next_index(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (selected + 1) % len
    }
}

/// Move a list selection one step back, wrapping at the start
pub(crate) fn previous_index(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if selected == 0 {
        len - 1
    } else {
        selected - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_wrapping() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(previous_index(0, 3), 2);
        assert_eq!(previous_index(2, 3), 1);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(previous_index(0, 0), 0);
    }
}
