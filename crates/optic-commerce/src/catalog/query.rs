//! Catalog browsing: category filter, text search and sorting.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogStore, Category, Product};
use crate::error::CommerceError;

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogSort {
    /// Name A-Z.
    #[default]
    Name,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Minimum order quantity, low to high.
    MoqLow,
    /// Minimum order quantity, high to low.
    MoqHigh,
}

impl CatalogSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSort::Name => "name",
            CatalogSort::PriceLow => "price-low",
            CatalogSort::PriceHigh => "price-high",
            CatalogSort::MoqLow => "moq-low",
            CatalogSort::MoqHigh => "moq-high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogSort::Name => "Name: A-Z",
            CatalogSort::PriceLow => "Price: Low to High",
            CatalogSort::PriceHigh => "Price: High to Low",
            CatalogSort::MoqLow => "MOQ: Low to High",
            CatalogSort::MoqHigh => "MOQ: High to Low",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> std::cmp::Ordering {
        match self {
            CatalogSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            CatalogSort::PriceLow => a.price.amount_minor.cmp(&b.price.amount_minor),
            CatalogSort::PriceHigh => b.price.amount_minor.cmp(&a.price.amount_minor),
            CatalogSort::MoqLow => a.moq.cmp(&b.moq),
            CatalogSort::MoqHigh => b.moq.cmp(&a.moq),
        }
    }
}

impl FromStr for CatalogSort {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(CatalogSort::Name),
            "price-low" => Ok(CatalogSort::PriceLow),
            "price-high" => Ok(CatalogSort::PriceHigh),
            "moq-low" => Ok(CatalogSort::MoqLow),
            "moq-high" => Ok(CatalogSort::MoqHigh),
            _ => Err(CommerceError::UnknownSort(s.to_string())),
        }
    }
}

/// A catalog listing query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Restrict to one category (`None` = all products).
    pub category: Option<Category>,
    /// Case-insensitive text over name, description and model.
    pub text: Option<String>,
    /// Sort order.
    pub sort: CatalogSort,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the search text. Blank text matches everything.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.trim().is_empty() { None } else { Some(text) };
        self
    }

    pub fn with_sort(mut self, sort: CatalogSort) -> Self {
        self.sort = sort;
        self
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        match &self.text {
            Some(text) => product.matches_text(text),
            None => true,
        }
    }

    /// Run the query against a store.
    pub fn apply<'a>(&self, store: &'a CatalogStore) -> Vec<&'a Product> {
        let mut products: Vec<&Product> = store.all().iter().filter(|p| self.matches(p)).collect();
        products.sort_by(|a, b| self.sort.compare(a, b));
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_default_query_returns_all_by_name() {
        let store = CatalogStore::seed(Currency::USD);
        let results = CatalogQuery::new().apply(&store);
        assert_eq!(results.len(), 16);
        assert_eq!(results[0].name, "Acetate Square Frame");
        assert_eq!(results[15].name, "Wayfarer Sunglasses");
    }

    #[test]
    fn test_category_filter_with_price_sort() {
        let store = CatalogStore::seed(Currency::USD);
        let results = CatalogQuery::new()
            .with_category(Category::Lenses)
            .with_sort(CatalogSort::PriceHigh)
            .apply(&store);
        assert_eq!(ids(&results), vec!["L003", "L002", "L004", "L001"]);
    }

    #[test]
    fn test_text_search_matches_model() {
        let store = CatalogStore::seed(Currency::USD);
        let results = CatalogQuery::new().with_text("cr39").apply(&store);
        assert_eq!(ids(&results), vec!["L004", "L001"]);
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let query = CatalogQuery::new().with_text("   ");
        assert!(query.text.is_none());
    }

    #[test]
    fn test_moq_sort() {
        let store = CatalogStore::seed(Currency::USD);
        let results = CatalogQuery::new()
            .with_category(Category::Accessories)
            .with_sort(CatalogSort::MoqHigh)
            .apply(&store);
        assert_eq!(results[0].id.as_str(), "A001");
        assert_eq!(results[3].moq, 12);
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!("price-low".parse::<CatalogSort>().unwrap(), CatalogSort::PriceLow);
        assert!("cheapest".parse::<CatalogSort>().is_err());
    }
}
