use crate::actions::{Action, GlobalAction};
use crate::reducers::{
    cart_reducer, catalog_reducer, confirmation_popup_reducer, status_bar_reducer, theme_reducer,
};
use crate::state::AppState;

/// Root reducer - pure function from current state + action to new state
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => reduce_global(&mut state, global),
        Action::Catalog(catalog_action) => {
            state.catalog_view = catalog_reducer::reduce_catalog(
                state.catalog_view,
                catalog_action,
                state.catalog.len(),
            );
        }
        Action::Cart(cart_action) => {
            state = cart_reducer::reduce_cart(state, cart_action);
        }
        Action::Theme(theme_action) => {
            state = theme_reducer::reduce_theme(state, theme_action);
        }
        Action::ConfirmationPopup(popup_action) => {
            state = confirmation_popup_reducer::reduce_confirmation_popup(state, popup_action);
        }
        Action::StatusBar(status_action) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, status_action);
        }
        // Translated or intercepted by middleware
        Action::Navigate(_) | Action::ViewContext(_) | Action::Checkout(_) => {}
    }

    state
}

fn reduce_global(state: &mut AppState, action: &GlobalAction) {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::Close => {
            // Closing the last view quits
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        GlobalAction::PushView(new_view) => {
            // Pushing the view that is already on top toggles it off
            let is_duplicate = state
                .view_stack
                .last()
                .is_some_and(|top| top.view_id() == new_view.view_id());

            if is_duplicate {
                log::debug!("View {:?} already on top, popping it", new_view.view_id());
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::ReplaceView(new_view) => {
            log::debug!("Replacing view stack with: {:?}", new_view.view_id());
            state.view_stack.clear();
            state.view_stack.push(new_view.clone());
        }
        GlobalAction::KeyPressed(_) => {
            // Consumed by the keyboard middleware
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{CartView, CatalogView, CheckoutView, ViewId};

    fn stack(state: &AppState) -> Vec<ViewId> {
        state.view_stack.iter().map(|v| v.view_id()).collect()
    }

    #[test]
    fn test_push_and_close() {
        let state = AppState::default();
        let state = reduce(
            state,
            &Action::Global(GlobalAction::PushView(Box::new(CartView::new()))),
        );
        assert_eq!(stack(&state), vec![ViewId::Catalog, ViewId::Cart]);

        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert_eq!(stack(&state), vec![ViewId::Catalog]);
        assert!(state.running);
    }

    #[test]
    fn test_push_same_view_toggles() {
        let push_cart = Action::Global(GlobalAction::PushView(Box::new(CartView::new())));
        let state = reduce(AppState::default(), &push_cart);
        let state = reduce(state, &push_cart);
        assert_eq!(stack(&state), vec![ViewId::Catalog]);
    }

    #[test]
    fn test_close_last_view_quits() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Close));
        assert!(!state.running);
    }

    #[test]
    fn test_replace_view_resets_stack() {
        let mut state = AppState::default();
        state.view_stack.push(Box::new(CartView::new()));
        state.view_stack.push(Box::new(CheckoutView::new()));

        let state = reduce(
            state,
            &Action::Global(GlobalAction::ReplaceView(Box::new(CatalogView::new()))),
        );
        assert_eq!(stack(&state), vec![ViewId::Catalog]);
    }
}
