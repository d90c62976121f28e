//! Invoice ledger records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{InvoiceId, ProductId};
use crate::money::Money;

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }

    /// Anything not paid counts towards the outstanding balance.
    pub fn is_outstanding(&self) -> bool {
        !matches!(self, InvoiceStatus::Paid)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Ok(InvoiceStatus::Paid),
            "pending" => Ok(InvoiceStatus::Pending),
            "overdue" => Ok(InvoiceStatus::Overdue),
            _ => Err(CommerceError::UnknownStatus(s.to_string())),
        }
    }
}

/// One product line on an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub product_id: ProductId,
    pub quantity: i64,
    pub price: Money,
}

impl InvoiceLine {
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// A historical invoice.
///
/// `amount` is the billed figure as recorded and may differ from the sum of
/// the lines (freight, negotiated discounts).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub date: NaiveDate,
    pub amount: Money,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl LedgerEntry {
    /// Sum of the line totals.
    pub fn items_total(&self) -> Money {
        Money::sum(
            self.items.iter().map(InvoiceLine::line_total),
            self.amount.currency,
        )
    }

    /// Case-insensitive match against invoice number and id.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.invoice_number.to_lowercase().contains(&needle)
            || self.id.as_str().to_lowercase().contains(&needle)
    }
}
