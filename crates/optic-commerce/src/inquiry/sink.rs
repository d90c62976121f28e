//! Destinations for quote requests and contact inquiries.

use tracing::info;

use crate::error::CommerceError;
use crate::inquiry::{ContactInquiry, QuoteRequest};

/// Receives submitted forms.
///
/// Returning `Ok` acknowledges the hand-off; the storefront only clears the
/// quote cart after that.
pub trait InquirySink {
    /// Deliver a quote request.
    fn send_quote(&mut self, request: &QuoteRequest) -> Result<(), CommerceError>;

    /// Deliver a contact inquiry.
    fn send_contact(&mut self, inquiry: &ContactInquiry) -> Result<(), CommerceError>;
}

/// Writes submissions to the log as JSON and acknowledges them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl InquirySink for LogSink {
    fn send_quote(&mut self, request: &QuoteRequest) -> Result<(), CommerceError> {
        let payload = serde_json::to_string(request)?;
        info!(
            quote_id = %request.quote_id,
            lines = request.items.len(),
            total = %request.total,
            payload = %payload,
            "quote request"
        );
        Ok(())
    }

    fn send_contact(&mut self, inquiry: &ContactInquiry) -> Result<(), CommerceError> {
        let payload = serde_json::to_string(inquiry)?;
        info!(
            inquiry_type = %inquiry.inquiry_type,
            payload = %payload,
            "contact form submission"
        );
        Ok(())
    }
}

/// Keeps submissions in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub quotes: Vec<QuoteRequest>,
    pub contacts: Vec<ContactInquiry>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InquirySink for MemorySink {
    fn send_quote(&mut self, request: &QuoteRequest) -> Result<(), CommerceError> {
        self.quotes.push(request.clone());
        Ok(())
    }

    fn send_contact(&mut self, inquiry: &ContactInquiry) -> Result<(), CommerceError> {
        self.contacts.push(inquiry.clone());
        Ok(())
    }
}

impl<S: InquirySink + ?Sized> InquirySink for &mut S {
    fn send_quote(&mut self, request: &QuoteRequest) -> Result<(), CommerceError> {
        (**self).send_quote(request)
    }

    fn send_contact(&mut self, inquiry: &ContactInquiry) -> Result<(), CommerceError> {
        (**self).send_contact(inquiry)
    }
}
