//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod ledger;
pub mod session;

use clap::{Args, Subcommand};
use optic_commerce::catalog::{CatalogSort, Category};
use optic_commerce::inquiry::InquiryType;
use optic_commerce::ledger::{InvoiceStatus, LedgerSort};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show one category (frames, sunglasses, lenses, accessories).
    #[arg(long)]
    pub category: Option<Category>,

    /// Search name, model and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order (name, price-low, price-high, moq-low, moq-high).
    #[arg(long, default_value = "name")]
    pub sort: CatalogSort,
}

/// Arguments for the ledger command.
#[derive(Args)]
pub struct LedgerArgs {
    /// Only show one status (paid, pending, overdue).
    #[arg(long)]
    pub status: Option<InvoiceStatus>,

    /// Search invoice numbers.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order (date-desc, date-asc, amount-desc, amount-asc).
    #[arg(long, default_value = "date-desc")]
    pub sort: LedgerSort,

    /// Show the product lines of each invoice.
    #[arg(short, long)]
    pub lines: bool,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Your full name.
    #[arg(long)]
    pub name: String,

    /// Email address.
    #[arg(long)]
    pub email: String,

    /// Phone number.
    #[arg(long)]
    pub phone: String,

    /// Business name.
    #[arg(long)]
    pub business_name: Option<String>,

    /// City.
    #[arg(long)]
    pub city: String,

    /// What the inquiry is about (wholesale, pricing, products, support, other).
    #[arg(long, default_value = "wholesale")]
    pub inquiry_type: InquiryType,

    /// Message text.
    #[arg(short, long)]
    pub message: String,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Read session commands from a file instead of the terminal.
    #[arg(long)]
    pub script: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
