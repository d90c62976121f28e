//! Wholesale optical storefront domain: catalog, quote cart and inquiries.
//!
//! - **Catalog**: Frames, sunglasses, lenses and accessories with minimum order quantities
//! - **Quote**: Reducer-driven quote cart with a derived total
//! - **Inquiry**: Customer details, quote requests, contact forms and sinks
//! - **Ledger**: Read-only invoice history with search and summaries
//! - **Storefront**: The session that ties the above together
//!
//! # Example
//!
//! ```rust
//! use optic_commerce::prelude::*;
//!
//! let catalog = CatalogStore::seed(Currency::USD);
//! let mut store = Storefront::open(catalog);
//!
//! // Adding without a quantity uses the product's MOQ.
//! store.add_to_quote(&ProductId::new("F001"), None).unwrap();
//! assert_eq!(store.quote().item_count(), 12);
//! assert_eq!(store.quote().total().display(), "$540.00");
//!
//! // Quantities never drop below the MOQ.
//! store.cart_mut().update_quantity(&ProductId::new("F001"), 3);
//! assert_eq!(store.quote().item_count(), 12);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod inquiry;
pub mod ledger;
pub mod quote;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{CatalogQuery, CatalogSort, CatalogStore, Category, Product};

    // Quote
    pub use crate::quote::{reduce, CartPhase, QuoteAction, QuoteCart, QuoteCartState, QuoteLineItem};

    // Inquiry
    pub use crate::inquiry::{
        ContactInquiry, CustomerInfo, InquirySink, InquiryType, LogSink, MemorySink, QuoteRequest,
    };

    // Ledger
    pub use crate::ledger::{InvoiceStatus, Ledger, LedgerEntry, LedgerQuery, LedgerSort, LedgerSummary};

    pub use crate::storefront::Storefront;
}
