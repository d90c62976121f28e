//! Quote cart state transitions.

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::quote::{QuoteCartState, QuoteLineItem};

/// An operation on the quote cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuoteAction {
    /// Add a product, or increase the quantity of its existing line.
    /// `None` (or zero) means one MOQ batch.
    AddItem {
        product: Product,
        quantity: Option<i64>,
    },
    /// Drop a product's line.
    RemoveItem { product_id: ProductId },
    /// Set a line's quantity, raised to the product MOQ if lower.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Drop every line.
    Clear,
}

impl QuoteAction {
    pub fn name(&self) -> &'static str {
        match self {
            QuoteAction::AddItem { .. } => "add_item",
            QuoteAction::RemoveItem { .. } => "remove_item",
            QuoteAction::UpdateQuantity { .. } => "update_quantity",
            QuoteAction::Clear => "clear",
        }
    }

    /// Product the action targets; `None` for `Clear`.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            QuoteAction::AddItem { product, .. } => Some(&product.id),
            QuoteAction::RemoveItem { product_id }
            | QuoteAction::UpdateQuantity { product_id, .. } => Some(product_id),
            QuoteAction::Clear => None,
        }
    }
}

/// Apply one action to a cart state and return the resulting state.
///
/// Every action is total: unknown product ids are a no-op, and the total is
/// recomputed from the resulting lines.
///
/// # Panics
/// Panics if an added product is priced in a different currency from the
/// cart. Catalogs and storefronts are single-currency, so this only happens
/// when a product from another catalog is handed to the cart.
pub fn reduce(state: QuoteCartState, action: QuoteAction) -> QuoteCartState {
    let currency = state.currency();
    let action_name = action.name();
    let product_id = action.product_id().cloned();
    let mut items = state.into_items();

    match action {
        QuoteAction::AddItem { product, quantity } => {
            assert_eq!(
                product.price.currency, currency,
                "Currency mismatch: product {} is not priced in the cart currency",
                product.id
            );

            let added = add_quantity(&product, quantity);
            match items.iter_mut().find(|i| i.product.id == product.id) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(added),
                None => items.push(QuoteLineItem::new(product, added)),
            }
        }
        QuoteAction::RemoveItem { product_id } => {
            items.retain(|i| i.product.id != product_id);
        }
        QuoteAction::UpdateQuantity {
            product_id,
            quantity,
        } => {
            if let Some(item) = items.iter_mut().find(|i| i.product.id == product_id) {
                item.quantity = quantity.max(item.product.moq);
            }
        }
        QuoteAction::Clear => items.clear(),
    }

    let next = QuoteCartState::from_items(items, currency);
    let quantity = product_id
        .as_ref()
        .and_then(|id| next.get(id))
        .map(|line| line.quantity);
    debug!(
        action = action_name,
        product_id = product_id.as_ref().map(ProductId::as_str),
        quantity,
        lines = next.line_count(),
        items = next.item_count(),
        total = %next.total(),
        "quote cart updated"
    );
    next
}

/// Quantity contributed by an add: the explicit amount, or one MOQ batch.
///
/// An explicit amount is not checked against the MOQ floor; a value below it
/// is kept as given and logged.
fn add_quantity(product: &Product, quantity: Option<i64>) -> i64 {
    match quantity {
        Some(q) if q != 0 => {
            if q < product.moq {
                warn!(
                    product_id = %product.id,
                    quantity = q,
                    moq = product.moq,
                    "explicit add quantity is below the minimum order quantity"
                );
            }
            q
        }
        _ => product.moq,
    }
}
