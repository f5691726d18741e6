//! Checkout View Model
//!
//! Order items plus the pricing summary, all pre-formatted.

use crate::state::AppState;
use techshop_core::CheckoutSummary;

/// One order line on the checkout screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutItemViewModel {
    pub name: String,
    /// e.g. "Qty: 2"
    pub quantity: String,
    /// e.g. "$10.00 × 2"
    pub unit_breakdown: String,
    pub line_total: String,
}

/// View model for the checkout screen
#[derive(Debug, Clone)]
pub struct CheckoutViewModel {
    pub items: Vec<CheckoutItemViewModel>,
    pub subtotal: String,
    pub tax_label: &'static str,
    pub tax: String,
    pub shipping: String,
    pub total: String,
    pub button_label: &'static str,
}

impl CheckoutViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let summary = CheckoutSummary::from_cart(&state.cart);

        let items = state
            .cart
            .lines()
            .iter()
            .map(|line| CheckoutItemViewModel {
                name: line.name.clone(),
                quantity: format!("Qty: {}", line.quantity()),
                unit_breakdown: format!("{} × {}", line.price, line.quantity()),
                line_total: line.line_total().to_string(),
            })
            .collect();

        Self {
            items,
            subtotal: summary.subtotal.to_string(),
            tax_label: "Tax (10%)",
            tax: summary.tax.to_string(),
            shipping: summary.shipping.to_string(),
            total: summary.total.to_string(),
            button_label: "Complete Checkout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use techshop_core::{Money, Product, ProductImage};

    #[test]
    fn test_summary_lines() {
        let mut state = AppState::default();
        let ten = Product::new(1, "Ten", Money::from_cents(1000), "", ProductImage::classify("🔟"));
        let five = Product::new(2, "Five", Money::from_cents(500), "", ProductImage::classify("5️⃣"));
        state.cart.add_to_cart(&ten);
        state.cart.add_to_cart(&ten);
        state.cart.add_to_cart(&five);

        let vm = CheckoutViewModel::from_state(&state);
        assert_eq!(vm.subtotal, "$25.00");
        assert_eq!(vm.tax, "$2.50");
        assert_eq!(vm.shipping, "$9.99");
        assert_eq!(vm.total, "$37.49");
        assert_eq!(
            vm.items[0],
            CheckoutItemViewModel {
                name: "Ten".to_string(),
                quantity: "Qty: 2".to_string(),
                unit_breakdown: "$10.00 × 2".to_string(),
                line_total: "$20.00".to_string(),
            }
        );
    }
}
