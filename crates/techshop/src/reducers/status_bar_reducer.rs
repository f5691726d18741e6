//! Status Bar Reducer

use crate::actions::StatusBarAction;
use crate::state::{StatusBarState, StatusMessage};

pub fn reduce_status_bar(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Push {
            kind,
            message,
            source,
        } => {
            state.push(StatusMessage::new(*kind, message.clone(), source.clone()));
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusKind;

    #[test]
    fn test_push() {
        let state = reduce_status_bar(
            StatusBarState::default(),
            &StatusBarAction::success("Added Smart Watch to cart", "Cart"),
        );
        let latest = state.latest().unwrap();
        assert_eq!(latest.kind, StatusKind::Success);
        assert_eq!(latest.message, "Added Smart Watch to cart");
        assert_eq!(latest.source_action, "Cart");
    }
}
