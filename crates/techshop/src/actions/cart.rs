//! Cart actions
//!
//! The first group maps one-to-one onto the cart operations; the second
//! moves the selection on the cart screen.

use techshop_core::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a catalog product
    AddToCart(ProductId),
    /// Drop a product's line entirely
    RemoveFromCart(ProductId),
    IncrementQuantity(ProductId),
    /// Take one unit off, removing the line at quantity 1
    DecrementQuantity(ProductId),
    /// Empty the cart (after a completed checkout)
    ClearCart,

    // Cart screen selection
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
}
