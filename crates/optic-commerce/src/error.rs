//! Commerce error types.

use thiserror::Error;

/// Errors that can occur outside the quote cart core.
///
/// The cart operations themselves are total; these cover catalog loading,
/// form validation and hand-off to an inquiry sink.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog records share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Minimum order quantity must be at least one.
    #[error("Invalid minimum order quantity for {product_id}: {moq}")]
    InvalidMoq { product_id: String, moq: i64 },

    /// Unit prices may not be negative.
    #[error("Invalid price for {product_id}: {price}")]
    InvalidPrice { product_id: String, price: String },

    /// A quote was submitted with no line items.
    #[error("Quote cart is empty")]
    EmptyQuote,

    /// A form field failed validation.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The inquiry sink rejected a submission.
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// Catalog source could not be read.
    #[error("Failed to load catalog: {0}")]
    CatalogLoad(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Date could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Unknown product category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown contact inquiry type.
    #[error("Unknown inquiry type: {0}")]
    UnknownInquiryType(String),

    /// Unknown invoice status.
    #[error("Unknown invoice status: {0}")]
    UnknownStatus(String),

    /// Unknown sort option.
    #[error("Unknown sort option: {0}")]
    UnknownSort(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<chrono::ParseError> for CommerceError {
    fn from(e: chrono::ParseError) -> Self {
        CommerceError::InvalidDate(e.to_string())
    }
}
