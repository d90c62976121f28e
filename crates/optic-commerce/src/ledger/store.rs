//! Static invoice ledger.

use chrono::NaiveDate;

use crate::error::CommerceError;
use crate::ids::{InvoiceId, ProductId};
use crate::ledger::{InvoiceLine, InvoiceStatus, LedgerEntry, LedgerQuery};
use crate::money::{Currency, Money};

/// Read-only list of historical invoices.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

type SeedInvoice = (&'static str, &'static str, &'static str, f64, InvoiceStatus, &'static [(&'static str, i64, f64)]);

#[rustfmt::skip]
const SEED_INVOICES: [SeedInvoice; 5] = [
    ("INV-2024-001", "HO-2024-0001", "2024-01-15", 2340.0, InvoiceStatus::Paid,
        &[("F001", 24, 45.0), ("S001", 12, 55.0), ("L001", 50, 15.0)]),
    ("INV-2024-002", "HO-2024-0002", "2024-01-28", 1580.0, InvoiceStatus::Paid,
        &[("F002", 36, 32.0), ("A001", 200, 2.5)]),
    ("INV-2024-003", "HO-2024-0003", "2024-02-10", 3250.0, InvoiceStatus::Pending,
        &[("L002", 20, 85.0), ("F003", 12, 78.0), ("S003", 12, 68.0)]),
    ("INV-2024-004", "HO-2024-0004", "2024-02-22", 890.0, InvoiceStatus::Overdue,
        &[("S002", 18, 42.0), ("A002", 24, 8.0)]),
    ("INV-2024-005", "HO-2024-0005", "2024-03-05", 4680.0, InvoiceStatus::Paid,
        &[("L003", 24, 125.0), ("F001", 36, 45.0)]),
];

impl Ledger {
    pub fn new(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }

    /// The distributor's invoice history, priced in `currency`.
    pub fn seed(currency: Currency) -> Result<Self, CommerceError> {
        let entries = SEED_INVOICES
            .iter()
            .map(|(id, number, date, amount, status, lines)| -> Result<LedgerEntry, CommerceError> {
                Ok(LedgerEntry {
                    id: InvoiceId::new(*id),
                    invoice_number: number.to_string(),
                    date: NaiveDate::parse_from_str(date, "%Y-%m-%d")?,
                    amount: Money::from_decimal(*amount, currency),
                    status: *status,
                    items: lines
                        .iter()
                        .map(|(product_id, quantity, price)| InvoiceLine {
                            product_id: ProductId::new(*product_id),
                            quantity: *quantity,
                            price: Money::from_decimal(*price, currency),
                        })
                        .collect(),
                    download_url: Some("#".to_string()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn get(&self, id: &InvoiceId) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Invoices that include a product.
    pub fn for_product<'a>(&'a self, product_id: &'a ProductId) -> impl Iterator<Item = &'a LedgerEntry> {
        self.entries
            .iter()
            .filter(move |e| e.items.iter().any(|line| &line.product_id == product_id))
    }

    /// Run a listing query.
    pub fn query(&self, query: &LedgerQuery) -> Vec<&LedgerEntry> {
        query.apply(&self.entries)
    }
}
