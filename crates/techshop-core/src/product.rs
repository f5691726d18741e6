//! Catalog products

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique product identifier within a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// How a product is pictured
///
/// Resolved once when the catalog is loaded, so views never have to guess
/// what kind of reference they are holding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductImage {
    /// A text glyph rendered inline (usually an emoji, e.g. "🎧")
    Glyph(String),
    /// Opaque handle to an image asset (bundled asset id or URI)
    AssetRef(String),
}

impl ProductImage {
    /// Classify a raw image reference from a catalog source
    ///
    /// Anything that looks like a URI or a file path with an extension is an
    /// asset reference, everything else is a glyph.
    pub fn classify(raw: &str) -> Self {
        let raw = raw.trim();
        let looks_like_uri = raw.contains("://") || raw.starts_with("data:");
        let looks_like_path = raw.contains('/')
            || raw.contains('\\')
            || raw
                .rsplit_once('.')
                .is_some_and(|(stem, ext)| !stem.is_empty() && is_asset_extension(ext));

        if looks_like_uri || looks_like_path {
            Self::AssetRef(raw.to_string())
        } else {
            Self::Glyph(raw.to_string())
        }
    }

    /// Text to show in a terminal cell for this image
    ///
    /// Asset references cannot be drawn in a terminal, so they fall back to a
    /// generic picture glyph.
    pub fn display_glyph(&self) -> &str {
        match self {
            Self::Glyph(glyph) => glyph,
            Self::AssetRef(_) => "🖼️",
        }
    }
}

fn is_asset_extension(ext: &str) -> bool {
    matches!(
        ext.to_ascii_lowercase().as_str(),
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp"
    )
}

/// A purchasable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub description: String,
    pub image: ProductImage,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        image: ProductImage,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: description.into(),
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_emoji_is_glyph() {
        assert_eq!(
            ProductImage::classify("🎧"),
            ProductImage::Glyph("🎧".to_string())
        );
        // Emoji with variation selector
        assert_eq!(
            ProductImage::classify("⌨️"),
            ProductImage::Glyph("⌨️".to_string())
        );
    }

    #[test]
    fn test_classify_paths_and_uris_are_assets() {
        assert_eq!(
            ProductImage::classify("./assets/SNACK.png"),
            ProductImage::AssetRef("./assets/SNACK.png".to_string())
        );
        assert_eq!(
            ProductImage::classify("CAT.png"),
            ProductImage::AssetRef("CAT.png".to_string())
        );
        assert_eq!(
            ProductImage::classify("https://cdn.example.com/p/1"),
            ProductImage::AssetRef("https://cdn.example.com/p/1".to_string())
        );
    }

    #[test]
    fn test_classify_dotted_text_without_extension_is_glyph() {
        assert_eq!(
            ProductImage::classify("v1.0"),
            ProductImage::Glyph("v1.0".to_string())
        );
    }

    #[test]
    fn test_display_glyph() {
        assert_eq!(ProductImage::Glyph("🔋".to_string()).display_glyph(), "🔋");
        assert_eq!(
            ProductImage::AssetRef("DOG.png".to_string()).display_glyph(),
            "🖼️"
        );
    }
}
