//! Lookali CLI - browse the marketplace catalog from the terminal.
//!
//! Commands:
//! - `lookali products|services|sellers|stays` - Filtered, sorted listings
//! - `lookali suggest` - Search box autocomplete
//! - `lookali product|service|seller` - Detail pages
//! - `lookali contact` - WhatsApp message to a product's seller
//! - `lookali checkout` - Build a cart and message each seller
//! - `lookali share` - Share links
//! - `lookali config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    CheckoutArgs, ConfigArgs, ContactArgs, ProductArgs, ProductsArgs, SellerArgs, SellersArgs,
    ServiceArgs, ServicesArgs, ShareArgs, StaysArgs, SuggestArgs,
};

/// Lookali CLI - Browse products, services, sellers and stays
#[derive(Parser)]
#[command(name = "lookali")]
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

    /// Catalog JSON file (default: bundled demo catalog)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// List services
    Services(ServicesArgs),

    /// List sellers
    Sellers(SellersArgs),

    /// List stays
    Stays(StaysArgs),

    /// Autocomplete product names
    Suggest(SuggestArgs),

    /// Show a product or stay
    Product(ProductArgs),

    /// Show a service
    Service(ServiceArgs),

    /// Show a seller profile
    Seller(SellerArgs),

    /// Write a WhatsApp message about a product
    Contact(ContactArgs),

    /// Build a cart and write one WhatsApp message per seller
    Checkout(CheckoutArgs),

    /// Print share links for a product or seller
    Share(ShareArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "lookali=debug" } else { "lookali=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Setup output formatting
    let output = output::Output::new(cli.json);

    // Load config and catalog
    let ctx = match context::Context::load(
        cli.config.as_deref(),
        cli.catalog.as_deref(),
        output.clone(),
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::browse::products(args, &ctx),
        Commands::Services(args) => commands::browse::services(args, &ctx),
        Commands::Sellers(args) => commands::browse::sellers(args, &ctx),
        Commands::Stays(args) => commands::browse::stays(args, &ctx),
        Commands::Suggest(args) => commands::browse::suggestions(args, &ctx),
        Commands::Product(args) => commands::detail::product(args, &ctx),
        Commands::Service(args) => commands::detail::service(args, &ctx),
        Commands::Seller(args) => commands::detail::seller(args, &ctx),
        Commands::Contact(args) => commands::contact::contact(args, &ctx),
        Commands::Checkout(args) => commands::contact::checkout(args, &ctx),
        Commands::Share(args) => commands::contact::share(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
