//! Invoice ledger: a static, read-only history of billed orders.

mod entry;
mod query;
mod store;

pub use entry::{InvoiceLine, InvoiceStatus, LedgerEntry};
pub use query::{LedgerQuery, LedgerSort, LedgerSummary};
pub use store::Ledger;
