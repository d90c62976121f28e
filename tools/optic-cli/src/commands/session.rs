//! Interactive quote session.
//!
//! Commands are read one per line, from the terminal or from a script. In a
//! script `submit` takes the customer details inline:
//!
//! ```text
//! add F001
//! add L002 40
//! set F001 24
//! submit name="Ayesha Khan" business="Clear Sight" city=Karachi phone=0300-1234567 email=a@clearsight.pk
//! ```

use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};

use anyhow::{bail, Context as _, Result};
use console::style;
use dialoguer::{Confirm, Input};
use optic_commerce::catalog::{CatalogQuery, Category};
use optic_commerce::inquiry::{CustomerInfo, LogSink};
use optic_commerce::quote::QuoteCartState;
use optic_commerce::{ProductId, Storefront};
use tracing::debug;

use super::catalog::print_products;
use super::SessionArgs;
use crate::context::Context;
use crate::output::{truncate, Output};

const LINE_WIDTHS: [usize; 5] = [6, 28, 8, 10, 12];

/// Largest quantity, either sign, accepted for a single `add` or `set`.
const MAX_QUANTITY: i64 = 1_000_000;

const HELP: [(&str, &str); 11] = [
    ("add <id> [qty]", "Add a product, one MOQ batch by default"),
    ("remove <id>", "Remove a product from the quote"),
    ("set <id> <qty>", "Set a quantity (never below the MOQ)"),
    ("inc <id>", "Add one MOQ batch"),
    ("dec <id>", "Take away one MOQ batch"),
    ("clear", "Empty the quote"),
    ("show", "Show the quote"),
    ("submit [key=value..]", "Send the quote request"),
    ("catalog [category]", "List products"),
    ("help", "Show this help"),
    ("quit", "End the session"),
];

/// One parsed session line.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Add {
        product_id: ProductId,
        quantity: Option<i64>,
    },
    Remove(ProductId),
    Set {
        product_id: ProductId,
        quantity: i64,
    },
    Inc(ProductId),
    Dec(ProductId),
    Clear,
    Show,
    /// Inline customer details, or `None` to prompt.
    Submit(Option<CustomerInfo>),
    Catalog(Option<Category>),
    Help,
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_storefront()?;

    let result = match args.script {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            let script = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read script: {}", path.display()))?;
            run_script(&script, &mut store, ctx)
        }
        None if io::stdin().is_terminal() => run_interactive(&mut store, ctx),
        None => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read session commands from stdin")?;
            run_script(&script, &mut store, ctx)
        }
    };

    if let Some(last) = store.close() {
        if !last.is_empty() {
            ctx.output.warn(&format!(
                "Session ended with {} unsubmitted line(s) ({})",
                last.line_count(),
                last.total().display()
            ));
        }
    }

    result
}

/// Execute every line of a script, stopping at the first failure.
fn run_script(script: &str, store: &mut Storefront, ctx: &Context) -> Result<()> {
    for (idx, line) in script.lines().enumerate() {
        let line_no = idx + 1;
        let Some(command) = parse_line(line).with_context(|| format!("line {}", line_no))? else {
            continue;
        };
        let flow = execute(command, store, ctx, false)
            .with_context(|| format!("line {}: {}", line_no, line.trim()))?;
        if let Flow::Quit = flow {
            break;
        }
    }
    Ok(())
}

fn run_interactive(store: &mut Storefront, ctx: &Context) -> Result<()> {
    ctx.output.header(&format!("{} quote session", ctx.config.store.name));
    ctx.output.info("Type `help` for commands, `quit` to leave.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("{} ", style("quote>").cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                ctx.output.error(&format!("{:#}", e));
                continue;
            }
        };

        match execute(command, store, ctx, true) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => ctx.output.error(&format!("{:#}", e)),
        }
    }

    Ok(())
}

fn execute(
    command: SessionCommand,
    store: &mut Storefront,
    ctx: &Context,
    interactive: bool,
) -> Result<Flow> {
    debug!(?command, "session command");
    let output = &ctx.output;

    match command {
        SessionCommand::Add {
            product_id,
            quantity,
        } => {
            let state = store.add_to_quote(&product_id, quantity)?;
            if let Some(item) = state.get(&product_id) {
                output.success(&format!(
                    "{} x {} in quote, total {}",
                    item.quantity,
                    item.product.name,
                    state.total().display()
                ));
            }
        }
        SessionCommand::Remove(product_id) => {
            if store.quote().get(&product_id).is_none() {
                output.warn(&format!("{} is not in the quote", product_id));
            } else {
                let state = store.cart_mut().remove_item(&product_id);
                output.success(&format!("Removed {}, total {}", product_id, state.total().display()));
            }
        }
        SessionCommand::Set {
            product_id,
            quantity,
        } => {
            let Some(moq) = store.quote().get(&product_id).map(|item| item.product.moq) else {
                output.warn(&format!("{} is not in the quote", product_id));
                return Ok(Flow::Continue);
            };
            if quantity < moq {
                output.warn(&format!("Minimum order for {} is {}", product_id, moq));
            }
            let state = store.cart_mut().update_quantity(&product_id, quantity);
            report_line(state, &product_id, output);
        }
        SessionCommand::Inc(product_id) | SessionCommand::Dec(product_id)
            if store.quote().get(&product_id).is_none() =>
        {
            output.warn(&format!("{} is not in the quote", product_id));
        }
        SessionCommand::Inc(product_id) => {
            let state = store.cart_mut().step_up(&product_id);
            report_line(state, &product_id, output);
        }
        SessionCommand::Dec(product_id) => {
            let state = store.cart_mut().step_down(&product_id);
            report_line(state, &product_id, output);
        }
        SessionCommand::Clear => {
            store.cart_mut().clear();
            output.success("Quote cleared");
        }
        SessionCommand::Show => show_quote(store.quote(), output),
        SessionCommand::Submit(customer) => submit(customer, store, ctx, interactive)?,
        SessionCommand::Catalog(category) => {
            let mut query = CatalogQuery::new();
            if let Some(category) = category {
                query = query.with_category(category);
            }
            let products = query.apply(store.catalog());
            if output.is_json() {
                output.json(&products);
            } else {
                print_products(&products, output);
            }
        }
        SessionCommand::Help => {
            for (usage, about) in HELP {
                output.table_row(&[usage, about], &[22, 44]);
            }
        }
        SessionCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn submit(
    customer: Option<CustomerInfo>,
    store: &mut Storefront,
    ctx: &Context,
    interactive: bool,
) -> Result<()> {
    if store.quote().is_empty() {
        bail!("Your quote is empty. Add products before submitting.");
    }

    let customer = match customer {
        Some(customer) => customer,
        None if interactive => {
            let customer = prompt_customer()?;
            let confirmed = Confirm::new()
                .with_prompt(format!(
                    "Submit quote for {} item(s) totalling {}?",
                    store.quote().item_count(),
                    store.quote().total().display()
                ))
                .default(true)
                .interact()?;
            if !confirmed {
                ctx.output.warn("Cancelled");
                return Ok(());
            }
            customer
        }
        None => bail!("submit needs name=.. business=.. city=.. phone=.. email=.. in a script"),
    };

    let request = store
        .submit_quote(customer, &mut LogSink)
        .context("Quote was not submitted")?;

    if ctx.output.is_json() {
        ctx.output.json(&request);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Quote {} submitted: {} item(s), {}",
        request.quote_id,
        request.item_count(),
        request.total.display()
    ));
    ctx.output.info(&format!(
        "{} will contact {} within 24 hours.",
        ctx.config.store.name, request.customer.email
    ));
    Ok(())
}

fn prompt_customer() -> Result<CustomerInfo> {
    let name: String = Input::new().with_prompt("Your name").interact_text()?;
    let business_name: String = Input::new().with_prompt("Business name").interact_text()?;
    let city: String = Input::new().with_prompt("City").interact_text()?;
    let phone: String = Input::new().with_prompt("Phone").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let notes: String = Input::new()
        .with_prompt("Notes (optional)")
        .allow_empty(true)
        .interact_text()?;

    Ok(CustomerInfo {
        name,
        business_name,
        city,
        phone,
        email,
        notes: Some(notes).filter(|n| !n.trim().is_empty()),
    })
}

fn report_line(state: &QuoteCartState, product_id: &ProductId, output: &Output) {
    if let Some(item) = state.get(product_id) {
        output.success(&format!(
            "{} now {} (line {}, total {})",
            product_id,
            item.quantity,
            item.line_total().display(),
            state.total().display()
        ));
    }
}

fn show_quote(state: &QuoteCartState, output: &Output) {
    if output.is_json() {
        output.json(state);
        return;
    }
    if state.is_empty() {
        output.info("Your quote is empty. Use `add <id>` to add products.");
        return;
    }

    output.table_row(&["ID", "NAME", "QTY", "UNIT", "LINE TOTAL"], &LINE_WIDTHS);
    output.info(&"-".repeat(LINE_WIDTHS.iter().sum::<usize>() + 2 * LINE_WIDTHS.len()));
    for item in state.items() {
        let name = truncate(&item.product.name, LINE_WIDTHS[1]);
        let quantity = if item.is_at_moq() {
            format!("{}*", item.quantity)
        } else {
            item.quantity.to_string()
        };
        let unit = item.product.price.display();
        let line_total = item.line_total().display();
        output.table_row(
            &[item.product_id().as_str(), &name, &quantity, &unit, &line_total],
            &LINE_WIDTHS,
        );
    }
    output.info("");
    output.kv("Lines", &state.line_count().to_string());
    output.kv("Items", &state.item_count().to_string());
    output.kv("Total", &state.total().display());
    output.debug("* quantity is at the minimum order");
}

/// Parse one session line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(line)?;
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (name.to_lowercase().as_str(), args) {
        ("add", [id]) => SessionCommand::Add {
            product_id: product_id(id),
            quantity: None,
        },
        ("add", [id, qty]) => SessionCommand::Add {
            product_id: product_id(id),
            quantity: Some(parse_quantity(qty)?),
        },
        ("remove" | "rm", [id]) => SessionCommand::Remove(product_id(id)),
        ("set", [id, qty]) => SessionCommand::Set {
            product_id: product_id(id),
            quantity: parse_quantity(qty)?,
        },
        ("inc" | "+", [id]) => SessionCommand::Inc(product_id(id)),
        ("dec" | "-", [id]) => SessionCommand::Dec(product_id(id)),
        ("clear", []) => SessionCommand::Clear,
        ("show" | "ls", []) => SessionCommand::Show,
        ("submit", []) => SessionCommand::Submit(None),
        ("submit", fields) => SessionCommand::Submit(Some(parse_customer(fields)?)),
        ("catalog", []) => SessionCommand::Catalog(None),
        ("catalog", [category]) => SessionCommand::Catalog(Some(category.parse()?)),
        ("help" | "?", []) => SessionCommand::Help,
        ("quit" | "exit", []) => SessionCommand::Quit,
        (
            "add" | "remove" | "rm" | "set" | "inc" | "+" | "dec" | "-" | "clear" | "show" | "ls"
            | "catalog" | "help" | "?" | "quit" | "exit",
            _,
        ) => bail!("wrong arguments for `{}`; type `help` for usage", name),
        _ => bail!("unknown command `{}`; type `help` for commands", name),
    };

    Ok(Some(command))
}

fn product_id(raw: &str) -> ProductId {
    ProductId::new(raw.to_uppercase())
}

fn parse_quantity(raw: &str) -> Result<i64> {
    let quantity = raw
        .parse::<i64>()
        .with_context(|| format!("invalid quantity `{}`", raw))?;
    if quantity.unsigned_abs() > MAX_QUANTITY.unsigned_abs() {
        bail!("quantity `{}` exceeds the limit of {}", raw, MAX_QUANTITY);
    }
    Ok(quantity)
}

/// Build customer details from `key=value` fields.
fn parse_customer(fields: &[String]) -> Result<CustomerInfo> {
    let mut customer = CustomerInfo::default();
    for field in fields {
        let Some((key, value)) = field.split_once('=') else {
            bail!("expected key=value, got `{}`", field);
        };
        let value = value.to_string();
        match key.to_lowercase().as_str() {
            "name" => customer.name = value,
            "business" | "business_name" => customer.business_name = value,
            "city" => customer.city = value,
            "phone" => customer.phone = value,
            "email" => customer.email = value,
            "notes" => customer.notes = Some(value).filter(|n| !n.trim().is_empty()),
            other => bail!("unknown customer field `{}`", other),
        }
    }
    Ok(customer)
}

/// Split on whitespace, keeping double-quoted runs together.
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut started = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                started = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if started {
                    tokens.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }

    if in_quotes {
        bail!("unterminated quote");
    }
    if started {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;
    use std::path::PathBuf;

    fn context() -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: PathBuf::from("."),
        }
    }

    #[test]
    fn test_tokenize_quotes() {
        let tokens = tokenize(r#"submit name="Ayesha Khan" city=Karachi notes="""#).unwrap();
        assert_eq!(tokens, vec!["submit", "name=Ayesha Khan", "city=Karachi", "notes="]);
        assert!(tokenize(r#"submit name="Ayesha"#).is_err());
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse_line("add f001").unwrap(),
            Some(SessionCommand::Add {
                product_id: ProductId::new("F001"),
                quantity: None
            })
        );
        assert_eq!(
            parse_line("  add S001 36 ").unwrap(),
            Some(SessionCommand::Add {
                product_id: ProductId::new("S001"),
                quantity: Some(36)
            })
        );
        assert!(parse_line("add S001 many").is_err());
    }

    #[test]
    fn test_parse_blank_and_comments() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # reorder for March").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("checkout").is_err());
        assert!(parse_line("set F001").is_err());
        assert!(parse_line("catalog hats").is_err());
    }

    #[test]
    fn test_parse_rejects_oversized_quantity() {
        assert!(parse_line("add F001 1000000").is_ok());
        assert!(parse_line("add F001 -1000000").is_ok());
        assert!(parse_line("add F001 1000001").is_err());
        assert!(parse_line("set F001 -1000001").is_err());
        let err = parse_line("add F001 9223372036854775807").unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
    }

    #[test]
    fn test_parse_submit_fields() {
        let command = parse_line(
            r#"submit name="Ayesha Khan" business="Clear Sight" city=Karachi phone=0300-1234567 email=a@clearsight.pk"#,
        )
        .unwrap();
        let Some(SessionCommand::Submit(Some(customer))) = command else {
            panic!("expected inline submit, got {:?}", command);
        };
        assert_eq!(customer.name, "Ayesha Khan");
        assert_eq!(customer.business_name, "Clear Sight");
        assert!(customer.notes.is_none());
        assert!(customer.validate().is_ok());

        assert!(parse_line("submit colour=red").is_err());
        assert_eq!(parse_line("submit").unwrap(), Some(SessionCommand::Submit(None)));
    }

    #[test]
    fn test_script_builds_and_submits_quote() {
        let ctx = context();
        let mut store = ctx.open_storefront().unwrap();
        let script = "\
add F001
add F001
set F001 5
add S001
show
remove F001
";
        run_script(script, &mut store, &ctx).unwrap();
        assert_eq!(store.quote().line_count(), 1);
        assert_eq!(store.quote().total().amount_minor, 66000);

        run_script(
            "submit name=Bilal business=\"Bilal Optics\" city=Quetta phone=081-555 email=bilal@optics.pk",
            &mut store,
            &ctx,
        )
        .unwrap();
        assert!(store.quote().is_empty());
    }

    #[test]
    fn test_script_stops_at_first_error() {
        let ctx = context();
        let mut store = ctx.open_storefront().unwrap();
        let err = run_script("add F001\nadd Z999\nadd S001\n", &mut store, &ctx).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
        assert_eq!(store.quote().line_count(), 1);
    }

    #[test]
    fn test_script_submit_requires_fields() {
        let ctx = context();
        let mut store = ctx.open_storefront().unwrap();
        run_script("add A003", &mut store, &ctx).unwrap();
        assert!(run_script("submit", &mut store, &ctx).is_err());
        assert_eq!(store.quote().line_count(), 1);
    }

    #[test]
    fn test_quit_stops_script() {
        let ctx = context();
        let mut store = ctx.open_storefront().unwrap();
        run_script("add L001\nquit\nclear\n", &mut store, &ctx).unwrap();
        assert_eq!(store.quote().item_count(), 50);
    }
}
