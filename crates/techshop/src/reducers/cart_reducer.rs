//! Cart Reducer
//!
//! Applies cart operations to the cart in `AppState` and keeps the cart
//! screen selection on an existing line.

use crate::actions::CartAction;
use crate::state::AppState;

pub fn reduce_cart(mut state: AppState, action: &CartAction) -> AppState {
    match action {
        CartAction::AddToCart(id) => match state.catalog.get(*id) {
            Some(product) => state.cart.add_to_cart(product),
            None => log::warn!("Cannot add product {}: not in catalog", id),
        },
        CartAction::RemoveFromCart(id) => {
            if !state.cart.remove_from_cart(*id) {
                log::debug!("Remove ignored: product {} not in cart", id);
            }
        }
        CartAction::IncrementQuantity(id) => {
            if !state.cart.increment_quantity(*id) {
                log::debug!("Increment ignored: product {} not in cart", id);
            }
        }
        CartAction::DecrementQuantity(id) => {
            if !state.cart.decrement_quantity(*id) {
                log::debug!("Decrement ignored: product {} not in cart", id);
            }
        }
        CartAction::ClearCart => state.cart.clear_cart(),
        CartAction::NavigateNext => state.cart_view.select_next(state.cart.len()),
        CartAction::NavigatePrevious => state.cart_view.select_previous(state.cart.len()),
        CartAction::NavigateToTop => state.cart_view.select_first(),
        CartAction::NavigateToBottom => state.cart_view.select_last(state.cart.len()),
    }

    state.cart_view.clamp(state.cart.len());
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use techshop_config::AppConfig;
    use techshop_core::{BuiltinCatalog, CatalogProvider, Money, ProductId};

    fn state() -> AppState {
        AppState::new(BuiltinCatalog.load().unwrap(), &AppConfig::default())
    }

    fn apply(state: AppState, actions: &[CartAction]) -> AppState {
        actions.iter().fold(state, reduce_cart)
    }

    #[test]
    fn test_add_looks_up_catalog() {
        let state = apply(
            state(),
            &[
                CartAction::AddToCart(ProductId(1)),
                CartAction::AddToCart(ProductId(1)),
                CartAction::AddToCart(ProductId(3)),
            ],
        );

        assert_eq!(state.cart.total_items(), 3);
        // 2 x 79.99 + 49.99
        assert_eq!(state.cart.total_price(), Money::from_cents(20997));
    }

    #[test]
    fn test_unknown_product_is_ignored() {
        let state = apply(state(), &[CartAction::AddToCart(ProductId(99))]);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_selection_follows_removals() {
        let mut state = apply(
            state(),
            &[
                CartAction::AddToCart(ProductId(1)),
                CartAction::AddToCart(ProductId(2)),
            ],
        );
        state.cart_view.selected = 1;

        let state = apply(state, &[CartAction::DecrementQuantity(ProductId(2))]);
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart_view.selected, 0);
    }

    #[test]
    fn test_clear_cart() {
        let state = apply(
            state(),
            &[
                CartAction::AddToCart(ProductId(4)),
                CartAction::IncrementQuantity(ProductId(4)),
                CartAction::ClearCart,
            ],
        );
        assert_eq!(state.cart.total_items(), 0);
        assert_eq!(state.cart.total_price(), Money::ZERO);
    }
}
