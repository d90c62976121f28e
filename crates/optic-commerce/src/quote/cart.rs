//! Quote cart engine.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::quote::{reduce, QuoteAction, QuoteCartState};

/// Owns the quote cart state for a session.
///
/// Every mutation goes through [`reduce`], replacing the state as a whole,
/// so a reader never sees a half-applied update.
#[derive(Debug, Clone)]
pub struct QuoteCart {
    state: QuoteCartState,
}

impl QuoteCart {
    /// Create an empty cart quoting in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            state: QuoteCartState::empty(currency),
        }
    }

    /// Current state.
    pub fn state(&self) -> &QuoteCartState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> QuoteCartState {
        self.state.clone()
    }

    /// Apply an action and return the new state.
    pub fn dispatch(&mut self, action: QuoteAction) -> &QuoteCartState {
        let currency = self.state.currency();
        let current = std::mem::replace(&mut self.state, QuoteCartState::empty(currency));
        self.state = reduce(current, action);
        &self.state
    }

    /// Add a product. Without a quantity one MOQ batch is added; adding a
    /// product already in the cart increases its quantity.
    ///
    /// # Panics
    /// Panics if `product` is not priced in the cart currency.
    pub fn add_item(&mut self, product: Product, quantity: Option<i64>) -> &QuoteCartState {
        self.dispatch(QuoteAction::AddItem { product, quantity })
    }

    /// Remove a product's line. Unknown ids are ignored.
    pub fn remove_item(&mut self, product_id: &ProductId) -> &QuoteCartState {
        self.dispatch(QuoteAction::RemoveItem {
            product_id: product_id.clone(),
        })
    }

    /// Set a line's quantity, never below the product MOQ. Unknown ids are
    /// ignored.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> &QuoteCartState {
        self.dispatch(QuoteAction::UpdateQuantity {
            product_id: product_id.clone(),
            quantity,
        })
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> &QuoteCartState {
        self.dispatch(QuoteAction::Clear)
    }

    /// Raise a line by one MOQ batch.
    pub fn step_up(&mut self, product_id: &ProductId) -> &QuoteCartState {
        let Some(quantity) = self
            .state
            .get(product_id)
            .map(|item| item.quantity.saturating_add(item.product.moq))
        else {
            return &self.state;
        };
        self.update_quantity(product_id, quantity)
    }

    /// Lower a line by one MOQ batch, stopping at the MOQ.
    pub fn step_down(&mut self, product_id: &ProductId) -> &QuoteCartState {
        let Some(quantity) = self
            .state
            .get(product_id)
            .map(|item| item.quantity.saturating_sub(item.product.moq))
        else {
            return &self.state;
        };
        self.update_quantity(product_id, quantity)
    }

    /// Sum of quantities, for badges.
    pub fn item_count(&self) -> i64 {
        self.state.item_count()
    }

    pub fn total(&self) -> Money {
        self.state.total()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

impl Default for QuoteCart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    fn catalog() -> CatalogStore {
        CatalogStore::seed(Currency::USD)
    }

    fn product(store: &CatalogStore, id: &str) -> Product {
        store.get(&ProductId::new(id)).cloned().unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = QuoteCart::new(Currency::USD);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_operations_chain() {
        let store = catalog();
        let mut cart = QuoteCart::default();
        cart.add_item(product(&store, "F002"), None);
        cart.add_item(product(&store, "A001"), Some(300));
        assert_eq!(cart.item_count(), 24 + 300);
        assert_eq!(cart.total().amount_minor, 24 * 3200 + 300 * 250);

        let state = cart.remove_item(&ProductId::new("F002"));
        assert_eq!(state.line_count(), 1);
        assert_eq!(cart.total().amount_minor, 75000);
    }

    #[test]
    fn test_steppers() {
        let store = catalog();
        let mut cart = QuoteCart::default();
        let id = ProductId::new("F004");
        cart.add_item(product(&store, "F004"), None);

        cart.step_up(&id);
        cart.step_up(&id);
        assert_eq!(cart.state().get(&id).unwrap().quantity, 108);

        cart.step_down(&id);
        assert_eq!(cart.state().get(&id).unwrap().quantity, 72);

        cart.step_down(&id);
        cart.step_down(&id);
        assert_eq!(cart.state().get(&id).unwrap().quantity, 36);
        assert!(cart.state().get(&id).unwrap().is_at_moq());
    }

    #[test]
    fn test_steppers_ignore_unknown_ids() {
        let mut cart = QuoteCart::default();
        assert!(cart.step_up(&ProductId::new("F001")).is_empty());
        assert!(cart.step_down(&ProductId::new("F001")).is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = catalog();
        let mut cart = QuoteCart::default();
        cart.add_item(product(&store, "L003"), None);
        let before = cart.snapshot();
        cart.clear();
        assert_eq!(before.item_count(), 12);
        assert!(cart.is_empty());
    }
}
