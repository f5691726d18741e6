//! Cart View Model

use crate::state::AppState;
use techshop_core::CartLine;

/// One line on the cart screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineViewModel {
    pub glyph: String,
    pub name: String,
    pub unit_price: String,
    pub quantity: String,
    pub line_total: String,
}

impl CartLineViewModel {
    fn from_line(line: &CartLine) -> Self {
        Self {
            glyph: line.image.display_glyph().to_string(),
            name: line.name.clone(),
            unit_price: line.price.to_string(),
            quantity: line.quantity().to_string(),
            line_total: line.line_total().to_string(),
        }
    }
}

/// View model for the cart screen
#[derive(Debug, Clone)]
pub struct CartViewModel {
    pub title: String,
    pub lines: Vec<CartLineViewModel>,
    pub selected_index: usize,
    /// Formatted cart total (e.g., "$25.00")
    pub total: String,
    pub empty_title: &'static str,
    pub empty_subtitle: &'static str,
    pub empty_action: &'static str,
}

impl CartViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let items = state.cart.total_items();
        let noun = if items == 1 { "item" } else { "items" };

        Self {
            title: format!("Shopping Cart ({} {})", items, noun),
            lines: state
                .cart
                .lines()
                .iter()
                .map(CartLineViewModel::from_line)
                .collect(),
            selected_index: state.cart_view.selected,
            total: state.cart.total_price().to_string(),
            empty_title: "Your cart is empty",
            empty_subtitle: "Add some products to get started",
            empty_action: "Start Shopping",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use techshop_core::{Money, Product, ProductImage};

    fn product(id: u32, cents: i64) -> Product {
        Product::new(
            id,
            format!("Product {id}"),
            Money::from_cents(cents),
            "",
            ProductImage::classify("📦"),
        )
    }

    #[test]
    fn test_lines_and_total() {
        let mut state = AppState::default();
        state.cart.add_to_cart(&product(1, 1000));
        state.cart.add_to_cart(&product(1, 1000));
        state.cart.add_to_cart(&product(2, 500));

        let vm = CartViewModel::from_state(&state);
        assert!(!vm.is_empty());
        assert_eq!(vm.title, "Shopping Cart (3 items)");
        assert_eq!(vm.total, "$25.00");
        assert_eq!(
            vm.lines[0],
            CartLineViewModel {
                glyph: "📦".to_string(),
                name: "Product 1".to_string(),
                unit_price: "$10.00".to_string(),
                quantity: "2".to_string(),
                line_total: "$20.00".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_cart() {
        let vm = CartViewModel::from_state(&AppState::default());
        assert!(vm.is_empty());
        assert_eq!(vm.title, "Shopping Cart (0 items)");
        assert_eq!(vm.total, "$0.00");
        assert_eq!(vm.empty_title, "Your cart is empty");
    }
}
