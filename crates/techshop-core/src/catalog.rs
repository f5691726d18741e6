//! Product catalog
//!
//! The catalog is an ordered, read-only list of products supplied by a
//! [`CatalogProvider`]. It is loaded once at startup and never mutated.

use crate::money::Money;
use crate::product::{Product, ProductId, ProductImage};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id {0} in catalog")]
    DuplicateId(ProductId),

    #[error("Product {id} has a negative price ({price})")]
    NegativePrice { id: ProductId, price: Decimal },
}

/// Source of the product catalog
pub trait CatalogProvider {
    /// Load the full catalog
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// Ordered, validated list of products
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique and prices non-negative
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price.is_negative() {
                return Err(CatalogError::NegativePrice {
                    id: product.id,
                    price: product.price.amount(),
                });
            }
        }
        Ok(Self { products })
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Product at a list position (as shown on the catalog screen)
    pub fn at(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The catalog that ships with the application
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogProvider for BuiltinCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let entries: [(u32, &str, i64, &str, &str); 8] = [
            (1, "Wireless Headphones", 7999, "Premium noise-cancelling headphones", "🎧"),
            (2, "Smart Watch", 19999, "Fitness tracker with heart rate monitor", "⌚"),
            (3, "Laptop Stand", 4999, "Ergonomic aluminum laptop stand", "💻"),
            (4, "USB-C Hub", 3999, "7-in-1 USB-C multiport adapter", "🔌"),
            (5, "Mechanical Keyboard", 12999, "RGB backlit gaming keyboard", "⌨️"),
            (6, "Wireless Mouse", 5999, "Ergonomic wireless mouse", "🖱️"),
            (7, "Phone Case", 2499, "Premium protective phone case", "📱"),
            (8, "Portable Charger", 3499, "20000mAh power bank", "🔋"),
        ];

        let products = entries
            .into_iter()
            .map(|(id, name, cents, description, image)| {
                Product::new(
                    id,
                    name,
                    Money::from_cents(cents),
                    description,
                    ProductImage::classify(image),
                )
            })
            .collect();

        Catalog::new(products)
    }
}

/// Catalog loaded from a JSON file
///
/// The file holds an array of records:
///
/// ```json
/// [{ "id": 1, "name": "Snack Series", "price": "15", "description": "...", "image": "assets/SNACK.png" }]
/// ```
///
/// Prices may be given as JSON numbers or strings.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonFileCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let catalog = parse_catalog_json(&content)?;
        log::info!(
            "Loaded {} products from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }
}

/// Raw catalog record as it appears in a JSON source
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    id: u32,
    name: String,
    price: Decimal,
    #[serde(default)]
    description: String,
    image: String,
}

impl From<CatalogRecord> for Product {
    fn from(record: CatalogRecord) -> Self {
        Product::new(
            record.id,
            record.name,
            Money::new(record.price),
            record.description,
            ProductImage::classify(&record.image),
        )
    }
}

/// Parse a JSON array of catalog records into a validated catalog
pub fn parse_catalog_json(content: &str) -> Result<Catalog, CatalogError> {
    let records: Vec<CatalogRecord> = serde_json::from_str(content)?;
    Catalog::new(records.into_iter().map(Product::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_catalog() {
        let catalog = BuiltinCatalog.load().unwrap();
        assert_eq!(catalog.len(), 8);

        let headphones = catalog.get(ProductId(1)).unwrap();
        assert_eq!(headphones.name, "Wireless Headphones");
        assert_eq!(headphones.price, Money::from_cents(7999));
        assert_eq!(headphones.image, ProductImage::Glyph("🎧".to_string()));

        // Order is preserved
        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"Wireless Headphones"));
        assert_eq!(names.last(), Some(&"Portable Charger"));
    }

    #[test]
    fn test_parse_catalog_json() {
        let json = r#"[
            { "id": 1, "name": "Snack Series", "price": 15, "description": "Retro diner", "image": "assets/SNACK.png" },
            { "id": 2, "name": "Gifts of Love Series", "price": "20.00", "image": "💝" }
        ]"#;

        let catalog = parse_catalog_json(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let snack = catalog.at(0).unwrap();
        assert_eq!(snack.price, Money::from_cents(1500));
        assert_eq!(
            snack.image,
            ProductImage::AssetRef("assets/SNACK.png".to_string())
        );

        let love = catalog.at(1).unwrap();
        assert_eq!(love.description, "");
        assert_eq!(love.image, ProductImage::Glyph("💝".to_string()));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            { "id": 1, "name": "A", "price": 1, "image": "a" },
            { "id": 1, "name": "B", "price": 2, "image": "b" }
        ]"#;

        let err = parse_catalog_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ProductId(1))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"[{ "id": 3, "name": "Refund", "price": "-1.50", "image": "x" }]"#;

        let err = parse_catalog_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NegativePrice {
                id: ProductId(3),
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_catalog_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let provider = JsonFileCatalog::new("/definitely/not/here/catalog.json");
        let err = provider.load().unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here/catalog.json"));
    }

    #[test]
    fn test_demo_catalog_file_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/sonny-angel-catalog.json");
        let catalog = JsonFileCatalog::new(path).load().unwrap();
        assert_eq!(catalog.len(), 6);
        assert!(catalog
            .iter()
            .all(|p| matches!(p.image, ProductImage::AssetRef(_))));
    }
}
