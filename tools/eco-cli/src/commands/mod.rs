//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod config;
pub mod products;
pub mod shop;
pub mod show;

use clap::{Args, Subcommand};

use cart::CartCommand;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Case-insensitive text matched against name and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category to include (repeatable; "all" lifts the restriction).
    #[arg(short = 'C', long = "category")]
    pub categories: Vec<String>,

    /// Lowest price to include.
    #[arg(long)]
    pub min: Option<i64>,

    /// Highest price to include (default: the configured price ceiling).
    #[arg(long)]
    pub max: Option<i64>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Actions to apply in order: add:<id>, add:<id>x<n>, remove:<id>,
    /// set:<id>=<qty>, clear.
    #[arg(required = true)]
    pub actions: Vec<CartCommand>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Skip the simulated processing delay at checkout.
    #[arg(long)]
    pub instant: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default eco.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the configuration and the catalog it points to.
    Validate,
}
