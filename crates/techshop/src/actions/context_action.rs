//! Context-sensitive actions
//!
//! Semantic actions that views interpret differently. `Confirm` (Enter)
//! means:
//! - Catalog: add the selected product to the cart
//! - Cart: proceed to checkout
//! - Checkout: complete the order
//! - Confirmation popup: acknowledge

/// User intent on the focused item, translated by the active view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action (Enter)
    Confirm,
    /// One more of the focused item (+)
    Increment,
    /// One less of the focused item (-)
    Decrement,
    /// Drop the focused item (dd, Del)
    Remove,
}
