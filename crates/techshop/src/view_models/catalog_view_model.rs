//! Catalog View Model
//!
//! Pre-computes the header, product rows and cart badge for the catalog
//! screen.

use crate::state::AppState;
use techshop_core::Product;

/// One product in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRowViewModel {
    pub glyph: String,
    pub name: String,
    pub description: String,
    /// Formatted price (e.g., "$79.99")
    pub price: String,
}

impl ProductRowViewModel {
    fn from_product(product: &Product) -> Self {
        Self {
            glyph: product.image.display_glyph().to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
        }
    }
}

/// View model for the catalog screen
#[derive(Debug, Clone)]
pub struct CatalogViewModel {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Icon of the mode the toggle switches to
    pub theme_icon: &'static str,
    /// Item count shown on the cart button, only when the cart is not empty
    pub cart_badge: Option<String>,
    pub rows: Vec<ProductRowViewModel>,
    pub selected_index: usize,
}

impl CatalogViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let total_items = state.cart.total_items();

        Self {
            title: "TechShop",
            subtitle: "Premium gadgets & accessories",
            theme_icon: state.theme_state.mode().toggle_icon(),
            cart_badge: (total_items > 0).then(|| total_items.to_string()),
            rows: state
                .catalog
                .iter()
                .map(ProductRowViewModel::from_product)
                .collect(),
            selected_index: state.catalog_view.selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use techshop_config::AppConfig;
    use techshop_core::{BuiltinCatalog, CatalogProvider, ProductId};

    fn state() -> AppState {
        AppState::new(BuiltinCatalog.load().unwrap(), &AppConfig::default())
    }

    #[test]
    fn test_rows_follow_catalog_order() {
        let vm = CatalogViewModel::from_state(&state());
        assert_eq!(vm.rows.len(), 8);
        assert_eq!(
            vm.rows[0],
            ProductRowViewModel {
                glyph: "🎧".to_string(),
                name: "Wireless Headphones".to_string(),
                description: "Premium noise-cancelling headphones".to_string(),
                price: "$79.99".to_string(),
            }
        );
    }

    #[test]
    fn test_badge_only_when_cart_has_items() {
        let mut state = state();
        assert_eq!(CatalogViewModel::from_state(&state).cart_badge, None);

        let watch = state.catalog.get(ProductId(2)).unwrap().clone();
        state.cart.add_to_cart(&watch);
        state.cart.add_to_cart(&watch);
        assert_eq!(
            CatalogViewModel::from_state(&state).cart_badge,
            Some("2".to_string())
        );
    }

    #[test]
    fn test_theme_icon_shows_target_mode() {
        let mut state = state();
        assert_eq!(CatalogViewModel::from_state(&state).theme_icon, "🌙");

        state.theme_state.toggle_theme();
        assert_eq!(CatalogViewModel::from_state(&state).theme_icon, "☀️");
    }
}
