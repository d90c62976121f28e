//! Product listing command.

use anyhow::Result;
use optic_commerce::catalog::{CatalogQuery, CatalogStore, Category, Product};

use super::CatalogArgs;
use crate::context::Context;
use crate::output::{truncate, Output};

const WIDTHS: [usize; 6] = [6, 28, 10, 12, 10, 6];

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let store = ctx.catalog()?;

    let mut query = CatalogQuery::new().with_sort(args.sort);
    if let Some(category) = args.category {
        query = query.with_category(category);
    }
    if let Some(text) = args.search {
        query = query.with_text(text);
    }
    let products = query.apply(&store);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let title = match query.category {
        Some(category) => format!("{}: {}", ctx.config.store.name, category.display_name()),
        None => format!("{}: All Products", ctx.config.store.name),
    };
    ctx.output.header(&title);
    print_category_counts(&store, &ctx.output);

    if products.is_empty() {
        ctx.output.info("No products match your filters.");
        return Ok(());
    }

    print_products(&products, &ctx.output);
    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {} of {} products, sorted by {}",
        products.len(),
        store.len(),
        query.sort.display_name()
    ));

    Ok(())
}

fn print_category_counts(store: &CatalogStore, output: &Output) {
    let counts: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} ({})", c.display_name(), store.category_count(Some(*c))))
        .collect();
    output.debug(&counts.join(", "));
}

/// Print a product table.
pub fn print_products(products: &[&Product], output: &Output) {
    output.table_row(&["ID", "NAME", "MODEL", "CATEGORY", "PRICE", "MOQ"], &WIDTHS);
    output.info(&"-".repeat(WIDTHS.iter().sum::<usize>() + 2 * WIDTHS.len()));

    for product in products {
        let name = truncate(&product.name, WIDTHS[1]);
        let price = product.price.display();
        let moq = product.moq.to_string();
        output.table_row(
            &[
                product.id.as_str(),
                &name,
                &product.model,
                product.category.display_name(),
                &price,
                &moq,
            ],
            &WIDTHS,
        );
        if output.is_verbose() {
            output.list_item(&product.description);
        }
    }
}
