//! Newtype IDs for type-safe identifiers.
//!
//! Catalog product codes, invoice ids and quote ids are all plain strings on
//! the wire; the newtypes keep them from being swapped by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Catalog product code, e.g. `F001`.
    ProductId
);
define_id!(
    /// Ledger invoice record id, e.g. `INV-2024-001`.
    InvoiceId
);
define_id!(
    /// Submitted quote reference, e.g. `HO-QUOTE-1718000000000`.
    QuoteId
);

impl QuoteId {
    /// Build a quote id from a prefix and a millisecond timestamp.
    pub fn from_timestamp(prefix: &str, unix_millis: i64) -> Self {
        Self(format!("{}-{}", prefix, unix_millis))
    }
}
