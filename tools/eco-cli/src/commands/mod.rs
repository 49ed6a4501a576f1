//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod listings;
pub mod render;
pub mod sell;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category to show (all, electronics, home, clothing, beauty, sports).
    #[arg(long)]
    pub category: Option<String>,

    /// Sort key (rating, sustainability).
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Decoration seed, overriding the config.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Product fixture file, overriding the config.
    #[arg(long)]
    pub fixture: Option<String>,
}

/// Arguments for the listings command.
#[derive(Args)]
pub struct ListingsArgs {
    /// Show only active listings.
    #[arg(long)]
    pub active: bool,
}

/// Arguments for the sell command. Fields left out are prompted for.
#[derive(Args, Default)]
pub struct SellArgs {
    /// Product title.
    #[arg(long)]
    pub title: Option<String>,

    /// Price, e.g. 25.99.
    #[arg(long)]
    pub price: Option<String>,

    /// Category slug (electronics, home, fashion, furniture, beauty, sports).
    #[arg(long)]
    pub category: Option<String>,

    /// Condition slug (new, like-new, good, fair).
    #[arg(long)]
    pub condition: Option<String>,

    /// Description.
    #[arg(long)]
    pub description: Option<String>,

    /// Eco feature; repeat for several.
    #[arg(long = "feature")]
    pub features: Vec<String>,

    /// Image file name; repeat for several.
    #[arg(long = "image")]
    pub images: Vec<String>,

    /// Update this listing instead of creating one.
    #[arg(long)]
    pub edit: Option<u64>,

    /// Skip prompts and the confirmation.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(subcommand)]
    pub page: RenderPage,

    /// Write the page to this file instead of stdout.
    #[arg(short, long, global = true)]
    pub out: Option<String>,
}

#[derive(Subcommand)]
pub enum RenderPage {
    /// The catalog page.
    Catalog {
        /// Category to show.
        #[arg(long)]
        category: Option<String>,

        /// Sort key.
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// The seller page.
    Sell {
        /// Render with the listing form open.
        #[arg(long)]
        open: bool,
    },
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
