//! Domain model for the TechShop storefront
//!
//! This crate provides:
//! - Products and their image references (`product`)
//! - The read-only product catalog and its providers (`catalog`)
//! - The shopping cart and its operations (`cart`)
//! - Checkout pricing derived from a cart (`checkout`)
//! - Decimal money formatting (`money`)
//!
//! Nothing in here knows about the terminal front-end.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod money;
pub mod product;

pub use cart::{Cart, CartLine};
pub use catalog::{BuiltinCatalog, Catalog, CatalogError, CatalogProvider, JsonFileCatalog};
pub use checkout::CheckoutSummary;
pub use money::Money;
pub use product::{Product, ProductId, ProductImage};
