//! Invoice history command.

use anyhow::Result;
use optic_commerce::ledger::{LedgerEntry, LedgerQuery, LedgerSummary};

use super::LedgerArgs;
use crate::context::Context;
use crate::output::status_badge;

const WIDTHS: [usize; 5] = [14, 14, 12, 12, 10];

#[derive(serde::Serialize)]
struct LedgerReport<'a> {
    invoices: Vec<&'a LedgerEntry>,
    summary: LedgerSummary,
}

/// Run the ledger command.
pub fn run(args: LedgerArgs, ctx: &Context) -> Result<()> {
    let ledger = ctx.ledger()?;

    let mut query = LedgerQuery::new().with_sort(args.sort);
    if let Some(status) = args.status {
        query = query.with_status(status);
    }
    if let Some(text) = args.search {
        query = query.with_text(text);
    }
    let invoices = ledger.query(&query);
    let summary = LedgerSummary::from_entries(invoices.iter().copied(), ctx.config.store.currency);

    if ctx.output.is_json() {
        ctx.output.json(&LedgerReport { invoices, summary });
        return Ok(());
    }

    ctx.output.header("Invoice Ledger");

    if invoices.is_empty() {
        ctx.output.info("No invoices match your filters.");
        return Ok(());
    }

    ctx.output.table_row(&["INVOICE", "NUMBER", "DATE", "AMOUNT", "STATUS"], &WIDTHS);
    ctx.output.info(&"-".repeat(WIDTHS.iter().sum::<usize>() + 2 * WIDTHS.len()));

    for entry in &invoices {
        let date = entry.date.format("%b %d, %Y").to_string();
        let amount = entry.amount.display();
        let status = status_badge(entry.status, WIDTHS[4]);
        ctx.output.table_row(
            &[entry.id.as_str(), &entry.invoice_number, &date, &amount, &status],
            &WIDTHS,
        );

        if args.lines {
            for line in &entry.items {
                ctx.output.list_item(&format!(
                    "{} x {} @ {} = {}",
                    line.product_id,
                    line.quantity,
                    line.price.display(),
                    line.line_total().display()
                ));
            }
        }
    }

    ctx.output.info("");
    ctx.output.kv("Invoices", &summary.count.to_string());
    ctx.output.kv("Billed", &summary.total.display());
    ctx.output.kv("Paid", &summary.paid.display());
    ctx.output.kv("Outstanding", &summary.outstanding.display());

    Ok(())
}
