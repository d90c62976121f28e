//! Read-only catalog store.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product, ProductRecord};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Catalog JSON file layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Currency all prices are quoted in.
    #[serde(default)]
    pub currency: Currency,
    /// Product records.
    pub products: Vec<ProductRecord>,
}

/// Immutable in-memory product catalog.
///
/// Loaded once; every product has a unique id, a positive MOQ and a
/// non-negative price in the catalog currency.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    currency: Currency,
    products: Vec<Product>,
}

impl CatalogStore {
    /// Build a store from products, validating the catalog invariants.
    pub fn new(currency: Currency, products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
            if product.moq < 1 {
                return Err(CommerceError::InvalidMoq {
                    product_id: product.id.to_string(),
                    moq: product.moq,
                });
            }
            if product.price.is_negative() || product.price.currency != currency {
                return Err(CommerceError::InvalidPrice {
                    product_id: product.id.to_string(),
                    price: format!("{} {}", product.price.display_amount(), product.price.currency),
                });
            }
        }

        tracing::debug!(products = products.len(), currency = %currency, "catalog loaded");
        Ok(Self { currency, products })
    }

    /// The built-in distributor catalog, priced in `currency`.
    pub fn seed(currency: Currency) -> Self {
        Self {
            currency,
            products: super::seed::products(currency),
        }
    }

    /// Parse a catalog JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let currency = file.currency;
        let products = file
            .products
            .into_iter()
            .map(|record| record.into_product(currency))
            .collect();
        Self::new(currency, products)
    }

    /// Load a catalog JSON file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CommerceError::CatalogLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    /// Catalog currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing if it is absent.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Products in one category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Number of products in a category, or in the whole catalog for `None`.
    pub fn category_count(&self, category: Option<Category>) -> usize {
        match category {
            Some(category) => self.by_category(category).count(),
            None => self.products.len(),
        }
    }
}
