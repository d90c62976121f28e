//! Product records.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the wholesale catalog.
///
/// Products are reference data: once the catalog is loaded they are never
/// mutated, and quote lines hold their own copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog product code.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Manufacturer model number.
    pub model: String,
    /// Category.
    pub category: Category,
    /// Unit price.
    pub price: Money,
    /// Minimum order quantity, at least 1.
    pub moq: i64,
    /// Short description for listings.
    pub description: String,
    /// Image URL or path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Frame or lens material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Colourway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Product {
    /// Create a product with no optional display attributes.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        model: impl Into<String>,
        category: Category,
        price: Money,
        moq: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            model: model.into(),
            category,
            price,
            moq,
            description: String::new(),
            image: None,
            material: None,
            color: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Price of one MOQ batch.
    pub fn moq_price(&self) -> Money {
        self.price.multiply(self.moq)
    }

    /// Case-insensitive match against name, description and model.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.model.to_lowercase().contains(&needle)
    }
}

/// A product as written in a catalog JSON file, with a decimal price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub model: String,
    pub category: Category,
    pub price: f64,
    pub moq: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl ProductRecord {
    /// Convert to a product priced in `currency`.
    pub fn into_product(self, currency: Currency) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            model: self.model,
            category: self.category,
            price: Money::from_decimal(self.price, currency),
            moq: self.moq,
            description: self.description,
            image: self.image,
            material: self.material,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Product {
        Product::new(
            "F001",
            "Classic Metal Frame",
            "CM-2024",
            Category::Frames,
            Money::from_decimal(45.0, Currency::USD),
            12,
        )
        .with_description("Premium metal frames with adjustable nose pads")
        .with_material("Titanium Alloy")
    }

    #[test]
    fn test_product_creation() {
        let product = frame();
        assert_eq!(product.id.as_str(), "F001");
        assert_eq!(product.material.as_deref(), Some("Titanium Alloy"));
        assert!(product.color.is_none());
    }

    #[test]
    fn test_moq_price() {
        assert_eq!(frame().moq_price().amount_minor, 54000);
    }

    #[test]
    fn test_matches_text() {
        let product = frame();
        assert!(product.matches_text("metal"));
        assert!(product.matches_text("cm-20"));
        assert!(product.matches_text("NOSE PADS"));
        assert!(!product.matches_text("aviator"));
    }

    #[test]
    fn test_record_conversion() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"id":"A001","name":"Cloth","model":"MC-15x15","category":"accessories","price":2.5,"moq":100}"#,
        )
        .unwrap();
        let product = record.into_product(Currency::USD);
        assert_eq!(product.price.amount_minor, 250);
        assert_eq!(product.category, Category::Accessories);
        assert!(product.description.is_empty());
    }
}
