//! Checkout pricing
//!
//! Fixed business rule: 10% tax on the subtotal and a flat shipping fee for
//! any non-empty order.

use crate::cart::Cart;
use crate::money::Money;
use rust_decimal::Decimal;

/// Tax rate applied to the subtotal (10%)
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Flat shipping fee for a non-empty order, in cents
const SHIPPING_FEE_CENTS: i64 = 999;

/// Order summary shown on the checkout screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub subtotal: Money,
    pub tax: Money,
    pub shipping: Money,
    pub total: Money,
}

impl CheckoutSummary {
    pub fn from_cart(cart: &Cart) -> Self {
        let shipping = if cart.is_empty() {
            Money::ZERO
        } else {
            Money::from_cents(SHIPPING_FEE_CENTS)
        };
        Self::from_subtotal(cart.total_price(), shipping)
    }

    fn from_subtotal(subtotal: Money, shipping: Money) -> Self {
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }
}
