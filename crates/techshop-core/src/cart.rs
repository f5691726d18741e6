//! Shopping cart
//!
//! The cart is an ordered list of lines, one per product, kept in the order
//! products were first added. Every operation is total: touching a product
//! that is not in the cart is a no-op, never an error.
//!
//! Invariants:
//! - at most one line per product id
//! - every line has a quantity of at least 1 (a line that would drop to 0 is
//!   removed instead)

use crate::money::Money;
use crate::product::{Product, ProductId, ProductImage};

/// One distinct product in the cart, with how many units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: ProductImage,
    quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price x quantity
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// The shopping cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Number of distinct products (not units)
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    /// Add one unit of a product
    ///
    /// Bumps the existing line in place, or appends a new line with quantity 1.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::from_product(product));
        }
    }

    /// Remove a product's line entirely
    ///
    /// Returns `false` if the product was not in the cart.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    /// Add one unit to an existing line
    ///
    /// Returns `false` if the product was not in the cart.
    pub fn increment_quantity(&mut self, id: ProductId) -> bool {
        match self.line_mut(id) {
            Some(line) => {
                line.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Take one unit off an existing line, removing the line at quantity 1
    ///
    /// Returns `false` if the product was not in the cart.
    pub fn decrement_quantity(&mut self, id: ProductId) -> bool {
        let Some(line) = self.line_mut(id) else {
            return false;
        };

        if line.quantity > 1 {
            line.quantity -= 1;
        } else {
            self.remove_from_cart(id);
        }
        true
    }

    pub fn clear_cart(&mut self) {
        self.lines.clear();
    }

    /// Sum of price x quantity over all lines
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }
}
