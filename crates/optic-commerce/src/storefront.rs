//! Storefront session: catalog, quote cart and form hand-off.
//!
//! A [`Storefront`] is opened once per application run and passed by
//! reference to whatever front end drives it. It owns the session's single
//! [`QuoteCart`]; once closed, touching the cart is a programming error and
//! panics.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::CatalogStore;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::inquiry::{ContactInquiry, CustomerInfo, InquirySink, QuoteRequest, DEFAULT_QUOTE_PREFIX};
use crate::quote::{QuoteCart, QuoteCartState};

const CLOSED_SESSION: &str = "quote cart used outside an open storefront session";

/// A running storefront session.
#[derive(Debug)]
pub struct Storefront {
    catalog: CatalogStore,
    cart: Option<QuoteCart>,
    quote_prefix: String,
}

impl Storefront {
    /// Open a session over a catalog with an empty quote cart priced in the
    /// catalog's currency.
    pub fn open(catalog: CatalogStore) -> Self {
        let cart = QuoteCart::new(catalog.currency());
        info!(products = catalog.len(), currency = %catalog.currency(), "storefront session opened");
        Self {
            catalog,
            cart: Some(cart),
            quote_prefix: DEFAULT_QUOTE_PREFIX.to_string(),
        }
    }

    /// Set the prefix used for quote ids.
    pub fn with_quote_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.quote_prefix = prefix.into();
        self
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn is_open(&self) -> bool {
        self.cart.is_some()
    }

    /// The session's quote cart.
    ///
    /// # Panics
    /// Panics if the session has been closed.
    pub fn cart(&self) -> &QuoteCart {
        self.cart.as_ref().expect(CLOSED_SESSION)
    }

    /// Mutable access to the session's quote cart.
    ///
    /// # Panics
    /// Panics if the session has been closed.
    pub fn cart_mut(&mut self) -> &mut QuoteCart {
        self.cart.as_mut().expect(CLOSED_SESSION)
    }

    /// Current cart state.
    ///
    /// # Panics
    /// Panics if the session has been closed.
    pub fn quote(&self) -> &QuoteCartState {
        self.cart().state()
    }

    /// Look a product up in the catalog and add it to the quote.
    pub fn add_to_quote(
        &mut self,
        product_id: &ProductId,
        quantity: Option<i64>,
    ) -> Result<&QuoteCartState, CommerceError> {
        let product = self.catalog.require(product_id)?.clone();
        Ok(self.cart_mut().add_item(product, quantity))
    }

    /// Submit the current quote, stamped with the current time.
    pub fn submit_quote<S: InquirySink + ?Sized>(
        &mut self,
        customer: CustomerInfo,
        sink: &mut S,
    ) -> Result<QuoteRequest, CommerceError> {
        self.submit_quote_at(customer, sink, Utc::now())
    }

    /// Submit the current quote.
    ///
    /// The cart is cleared only after the sink accepts the request; on any
    /// error it is left as it was.
    pub fn submit_quote_at<S: InquirySink + ?Sized>(
        &mut self,
        customer: CustomerInfo,
        sink: &mut S,
        timestamp: DateTime<Utc>,
    ) -> Result<QuoteRequest, CommerceError> {
        customer.validate()?;
        let state = self.quote();
        if state.is_empty() {
            return Err(CommerceError::EmptyQuote);
        }

        let request = QuoteRequest::from_cart(&self.quote_prefix, customer, state, timestamp);
        sink.send_quote(&request)?;

        info!(quote_id = %request.quote_id, total = %request.total, "quote submitted");
        self.cart_mut().clear();
        Ok(request)
    }

    /// Validate and deliver a contact inquiry. The quote cart is untouched.
    pub fn send_contact<S: InquirySink + ?Sized>(
        &self,
        inquiry: &ContactInquiry,
        sink: &mut S,
    ) -> Result<(), CommerceError> {
        inquiry.validate()?;
        sink.send_contact(inquiry)?;
        info!(inquiry_type = %inquiry.inquiry_type, "contact inquiry sent");
        Ok(())
    }

    /// End the session, returning the final cart state.
    pub fn close(&mut self) -> Option<QuoteCartState> {
        let cart = self.cart.take()?;
        info!(lines = cart.state().line_count(), "storefront session closed");
        Some(cart.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::{InquiryType, MemorySink, QuoteRequest};
    use crate::money::Currency;

    struct FailingSink;

    impl InquirySink for FailingSink {
        fn send_quote(&mut self, _request: &QuoteRequest) -> Result<(), CommerceError> {
            Err(CommerceError::SubmissionFailed("network unreachable".to_string()))
        }

        fn send_contact(&mut self, _inquiry: &ContactInquiry) -> Result<(), CommerceError> {
            Err(CommerceError::SubmissionFailed("network unreachable".to_string()))
        }
    }

    fn storefront() -> Storefront {
        Storefront::open(CatalogStore::seed(Currency::USD))
    }

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Usman Tariq".to_string(),
            business_name: "Vision Plus".to_string(),
            city: "Lahore".to_string(),
            phone: "+92 42 1234567".to_string(),
            email: "usman@visionplus.pk".to_string(),
            notes: Some("Need delivery before Eid".to_string()),
        }
    }

    #[test]
    fn test_add_to_quote_by_id() {
        let mut store = storefront();
        let state = store.add_to_quote(&ProductId::new("S002"), None).unwrap();
        assert_eq!(state.item_count(), 18);
        assert!(matches!(
            store.add_to_quote(&ProductId::new("Q000"), None),
            Err(CommerceError::ProductNotFound(_))
        ));
        assert_eq!(store.quote().line_count(), 1);
    }

    #[test]
    fn test_cart_quotes_in_catalog_currency() {
        let mut store = Storefront::open(CatalogStore::seed(Currency::PKR));
        let state = store.add_to_quote(&ProductId::new("F001"), None).unwrap();
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.currency(), Currency::PKR);
        assert_eq!(state.total().currency, Currency::PKR);
    }

    #[test]
    fn test_submit_clears_cart() {
        let mut store = storefront().with_quote_prefix("TEST-QUOTE");
        store.add_to_quote(&ProductId::new("F001"), None).unwrap();
        let mut sink = MemorySink::new();

        let request = store.submit_quote(customer(), &mut sink).unwrap();
        assert!(request.quote_id.as_str().starts_with("TEST-QUOTE-"));
        assert_eq!(request.total.amount_minor, 54000);
        assert_eq!(sink.quotes.len(), 1);
        assert!(store.quote().is_empty());
    }

    #[test]
    fn test_failed_submission_keeps_cart() {
        let mut store = storefront();
        store.add_to_quote(&ProductId::new("F001"), None).unwrap();
        let before = store.quote().clone();

        let result = store.submit_quote(customer(), &mut FailingSink);
        assert!(matches!(result, Err(CommerceError::SubmissionFailed(_))));
        assert_eq!(store.quote(), &before);
    }

    #[test]
    fn test_invalid_customer_keeps_cart() {
        let mut store = storefront();
        store.add_to_quote(&ProductId::new("F001"), None).unwrap();
        let mut sink = MemorySink::new();
        let mut c = customer();
        c.phone.clear();

        assert!(store.submit_quote(c, &mut sink).is_err());
        assert!(sink.quotes.is_empty());
        assert_eq!(store.quote().line_count(), 1);
    }

    #[test]
    fn test_empty_quote_is_rejected() {
        let mut store = storefront();
        let mut sink = MemorySink::new();
        let result = store.submit_quote(customer(), &mut sink);
        assert!(matches!(result, Err(CommerceError::EmptyQuote)));
    }

    #[test]
    fn test_send_contact() {
        let store = storefront();
        let mut sink = MemorySink::new();
        let inquiry = ContactInquiry {
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            phone: "0300 1111111".to_string(),
            business_name: None,
            city: "Multan".to_string(),
            inquiry_type: InquiryType::Products,
            message: "Do you stock 1.74 index lenses?".to_string(),
        };
        store.send_contact(&inquiry, &mut sink).unwrap();
        assert_eq!(sink.contacts, vec![inquiry]);
    }

    #[test]
    fn test_close_returns_final_state() {
        let mut store = storefront();
        store.add_to_quote(&ProductId::new("A003"), None).unwrap();
        let last = store.close().unwrap();
        assert_eq!(last.item_count(), 12);
        assert!(!store.is_open());
        assert!(store.close().is_none());
    }

    #[test]
    #[should_panic(expected = "outside an open storefront session")]
    fn test_cart_access_after_close_panics() {
        let mut store = storefront();
        store.close();
        let _ = store.quote();
    }
}
