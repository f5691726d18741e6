//! Checkout actions
//!
//! Both are intercepted by the checkout middleware, which decides whether
//! the cart allows the step.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutAction {
    /// "Proceed to Checkout" - show the order summary
    Open,
    /// "Complete Checkout" - place the order
    Complete,
}
