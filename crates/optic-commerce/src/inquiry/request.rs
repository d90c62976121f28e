//! Quote request payload handed to an inquiry sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::QuoteId;
use crate::inquiry::CustomerInfo;
use crate::money::Money;
use crate::quote::{QuoteCartState, QuoteLineItem};

/// Default prefix for quote ids.
pub const DEFAULT_QUOTE_PREFIX: &str = "HO-QUOTE";

/// A submitted, non-binding quote request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub quote_id: QuoteId,
    pub customer: CustomerInfo,
    pub items: Vec<QuoteLineItem>,
    pub total: Money,
    pub timestamp: DateTime<Utc>,
}

impl QuoteRequest {
    /// Snapshot a cart state into a request stamped at `timestamp`.
    pub fn from_cart(
        prefix: &str,
        customer: CustomerInfo,
        state: &QuoteCartState,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            quote_id: QuoteId::from_timestamp(prefix, timestamp.timestamp_millis()),
            customer,
            items: state.items().to_vec(),
            total: state.total(),
            timestamp,
        }
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).fold(0, i64::saturating_add)
    }
}
