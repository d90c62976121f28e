//! Ledger listing: search, status filter, sorting and summary figures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ledger::{InvoiceStatus, LedgerEntry};
use crate::money::{Currency, Money};

/// Sort options for the invoice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LedgerSort {
    /// Newest first.
    #[default]
    DateDesc,
    /// Oldest first.
    DateAsc,
    /// Largest amount first.
    AmountDesc,
    /// Smallest amount first.
    AmountAsc,
}

impl LedgerSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerSort::DateDesc => "date-desc",
            LedgerSort::DateAsc => "date-asc",
            LedgerSort::AmountDesc => "amount-desc",
            LedgerSort::AmountAsc => "amount-asc",
        }
    }

    fn compare(&self, a: &LedgerEntry, b: &LedgerEntry) -> std::cmp::Ordering {
        match self {
            LedgerSort::DateDesc => b.date.cmp(&a.date),
            LedgerSort::DateAsc => a.date.cmp(&b.date),
            LedgerSort::AmountDesc => b.amount.amount_minor.cmp(&a.amount.amount_minor),
            LedgerSort::AmountAsc => a.amount.amount_minor.cmp(&b.amount.amount_minor),
        }
    }
}

impl FromStr for LedgerSort {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date-desc" => Ok(LedgerSort::DateDesc),
            "date-asc" => Ok(LedgerSort::DateAsc),
            "amount-desc" => Ok(LedgerSort::AmountDesc),
            "amount-asc" => Ok(LedgerSort::AmountAsc),
            _ => Err(CommerceError::UnknownSort(s.to_string())),
        }
    }
}

/// An invoice list query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerQuery {
    /// Case-insensitive text over invoice number and id.
    pub text: Option<String>,
    /// Restrict to one status (`None` = all).
    pub status: Option<InvoiceStatus>,
    pub sort: LedgerSort,
}

impl LedgerQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.trim().is_empty() { None } else { Some(text) };
        self
    }

    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_sort(mut self, sort: LedgerSort) -> Self {
        self.sort = sort;
        self
    }

    fn matches(&self, entry: &LedgerEntry) -> bool {
        let text_ok = self.text.as_deref().map_or(true, |t| entry.matches_text(t));
        let status_ok = self.status.map_or(true, |s| entry.status == s);
        text_ok && status_ok
    }

    pub fn apply<'a>(&self, entries: &'a [LedgerEntry]) -> Vec<&'a LedgerEntry> {
        let mut matched: Vec<&LedgerEntry> = entries.iter().filter(|e| self.matches(e)).collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));
        matched
    }
}

/// Totals over a set of invoices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Number of invoices.
    pub count: usize,
    /// Billed amount across all invoices.
    pub total: Money,
    /// Billed amount on paid invoices.
    pub paid: Money,
    /// Billed amount on pending and overdue invoices.
    pub outstanding: Money,
}

impl LedgerSummary {
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = &'a LedgerEntry>,
        currency: Currency,
    ) -> Self {
        let (outstanding, paid): (Vec<&LedgerEntry>, Vec<&LedgerEntry>) = entries
            .into_iter()
            .partition(|entry| entry.status.is_outstanding());
        let outstanding_total = Money::sum(outstanding.iter().map(|e| e.amount), currency);
        let paid_total = Money::sum(paid.iter().map(|e| e.amount), currency);
        Self {
            count: outstanding.len() + paid.len(),
            total: outstanding_total + paid_total,
            paid: paid_total,
            outstanding: outstanding_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;

    fn ids(entries: &[&LedgerEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let ledger = Ledger::seed(Currency::USD).unwrap();
        let results = ledger.query(&LedgerQuery::new());
        assert_eq!(results.first().unwrap().id.as_str(), "INV-2024-005");
        assert_eq!(results.last().unwrap().id.as_str(), "INV-2024-001");
    }

    #[test]
    fn test_status_filter_and_amount_sort() {
        let ledger = Ledger::seed(Currency::USD).unwrap();
        let results = ledger.query(
            &LedgerQuery::new()
                .with_status(InvoiceStatus::Paid)
                .with_sort(LedgerSort::AmountAsc),
        );
        assert_eq!(ids(&results), vec!["INV-2024-002", "INV-2024-001", "INV-2024-005"]);
    }

    #[test]
    fn test_text_search() {
        let ledger = Ledger::seed(Currency::USD).unwrap();
        let results = ledger.query(&LedgerQuery::new().with_text("0004"));
        assert_eq!(ids(&results), vec!["INV-2024-004"]);
        assert!(ledger.query(&LedgerQuery::new().with_text("zzz")).is_empty());
    }

    #[test]
    fn test_summary() {
        let ledger = Ledger::seed(Currency::USD).unwrap();
        let summary = LedgerSummary::from_entries(ledger.entries(), Currency::USD);
        assert_eq!(summary.count, 5);
        assert_eq!(summary.total.amount_minor, 1_274_000);
        assert_eq!(summary.paid.amount_minor, 860_000);
        assert_eq!(summary.outstanding.amount_minor, 414_000);
    }

    #[test]
    fn test_summary_of_filtered_entries() {
        let ledger = Ledger::seed(Currency::USD).unwrap();
        let overdue = ledger.query(&LedgerQuery::new().with_status(InvoiceStatus::Overdue));
        let summary = LedgerSummary::from_entries(overdue, Currency::USD);
        assert_eq!(summary.count, 1);
        assert!(summary.paid.is_zero());
        assert_eq!(summary.outstanding.amount_minor, 89_000);
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!("amount-desc".parse::<LedgerSort>().unwrap(), LedgerSort::AmountDesc);
        assert!("newest".parse::<LedgerSort>().is_err());
    }
}
