//! Quote cart state and line items.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// One row of a quote: a product snapshot and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteLineItem {
    /// Product as it was when first added to the cart.
    pub product: Product,
    /// Quantity requested.
    pub quantity: i64,
}

impl QuoteLineItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// `quantity * unit price`.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }

    /// Whether the quantity sits on the MOQ floor (the "decrease" stepper is
    /// disabled in this state).
    pub fn is_at_moq(&self) -> bool {
        self.quantity <= self.product.moq
    }
}

/// Externally visible phase of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartPhase {
    /// No line items.
    Empty,
    /// At least one line item.
    Populated,
}

/// Snapshot of a quote cart.
///
/// `total` always equals the sum of every line's `quantity * price`: it is
/// recomputed from `items` whenever a state is built and cannot be set
/// directly.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuoteCartState {
    items: Vec<QuoteLineItem>,
    total: Money,
}

impl QuoteCartState {
    /// An empty cart quoting in `currency`.
    pub fn empty(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            total: Money::zero(currency),
        }
    }

    /// Build a state from line items, deriving the total.
    pub(crate) fn from_items(items: Vec<QuoteLineItem>, currency: Currency) -> Self {
        let total = Money::sum(items.iter().map(QuoteLineItem::line_total), currency);
        Self { items, total }
    }

    pub(crate) fn into_items(self) -> Vec<QuoteLineItem> {
        self.items
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[QuoteLineItem] {
        &self.items
    }

    /// Sum of all line totals.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn currency(&self) -> Currency {
        self.total.currency
    }

    /// Sum of quantities across all lines, saturating at the `i64` bounds.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).fold(0, i64::saturating_add)
    }

    /// Number of distinct product lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn phase(&self) -> CartPhase {
        if self.items.is_empty() {
            CartPhase::Empty
        } else {
            CartPhase::Populated
        }
    }

    /// Line item for a product, if present.
    pub fn get(&self, product_id: &ProductId) -> Option<&QuoteLineItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }
}

impl Default for QuoteCartState {
    fn default() -> Self {
        Self::empty(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: &str, price_cents: i64, moq: i64) -> Product {
        Product::new(id, id, id, Category::Frames, Money::new(price_cents, Currency::USD), moq)
    }

    #[test]
    fn test_empty_state() {
        let state = QuoteCartState::empty(Currency::USD);
        assert!(state.is_empty());
        assert_eq!(state.phase(), CartPhase::Empty);
        assert!(state.total().is_zero());
        assert_eq!(state.item_count(), 0);
    }

    #[test]
    fn test_total_is_derived_from_items() {
        let state = QuoteCartState::from_items(
            vec![
                QuoteLineItem::new(product("F001", 4500, 12), 12),
                QuoteLineItem::new(product("A001", 250, 100), 200),
            ],
            Currency::USD,
        );
        assert_eq!(state.total().amount_minor, 54000 + 50000);
        assert_eq!(state.item_count(), 212);
        assert_eq!(state.line_count(), 2);
        assert_eq!(state.phase(), CartPhase::Populated);
    }

    #[test]
    fn test_line_item_helpers() {
        let line = QuoteLineItem::new(product("S001", 5500, 12), 12);
        assert!(line.is_at_moq());
        assert_eq!(line.line_total().amount_minor, 66000);
        assert_eq!(line.product_id().as_str(), "S001");
    }

    #[test]
    fn test_item_count_saturates_on_huge_quantities() {
        let state = QuoteCartState::from_items(
            vec![
                QuoteLineItem::new(product("F001", 4500, 12), i64::MAX),
                QuoteLineItem::new(product("S001", 5500, 12), i64::MAX),
            ],
            Currency::USD,
        );
        assert_eq!(state.item_count(), i64::MAX);
        assert_eq!(state.total().amount_minor, i64::MAX);
    }
}
