//! Optic CLI - Command line storefront for an optical wholesale catalog.
//!
//! Commands:
//! - `optic catalog` - Browse and search products
//! - `optic ledger` - Review invoice history
//! - `optic contact` - Send a contact inquiry
//! - `optic session` - Build and submit a quote request
//! - `optic config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, ContactArgs, LedgerArgs, SessionArgs};

/// Optic CLI - Browse the wholesale catalog and request quotes
#[derive(Parser)]
#[command(name = "optic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with minimum order quantities
    Catalog(CatalogArgs),

    /// Show past invoices and balances
    Ledger(LedgerArgs),

    /// Send a message to the sales team
    Contact(ContactArgs),

    /// Build a quote interactively or from a script
    Session(SessionArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    logging::setup_tracing(&ctx.config.logging.level, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Ledger(args) => commands::ledger::run(args, &ctx),
        Commands::Contact(args) => commands::contact::run(args, &ctx),
        Commands::Session(args) => commands::session::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
