//! Eco CLI - Command line storefront for EcoShop.
//!
//! Commands:
//! - `eco products` - List and filter products
//! - `eco show` - Show a product
//! - `eco categories` - List categories
//! - `eco cart` - Apply cart actions and print the order summary
//! - `eco shop` - Interactive shopping session with checkout
//! - `eco config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, ConfigArgs, ProductsArgs, ShopArgs, ShowArgs};

/// Eco CLI - Browse the EcoShop catalog, fill a cart and check out
#[derive(Parser)]
#[command(name = "eco")]
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
    /// List products, optionally filtered
    Products(ProductsArgs),

    /// Show a product's details
    Show(ShowArgs),

    /// List product categories
    Categories,

    /// Apply cart actions and print the cart
    Cart(CartArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let mut logging = ctx.config.logging.clone();
    if ctx.output.is_verbose() {
        let level = logging.level.min(eco_observability::LogLevel::Debug);
        logging = logging.with_level(level);
    }
    if let Err(e) = eco_observability::init(&logging) {
        ctx.output.warn(&e.to_string());
    }

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
