//! Eco CLI - Command line tool for the sustainable marketplace.
//!
//! Commands:
//! - `eco browse` - Print the derived catalog view
//! - `eco listings` - Print the seller's listings and dashboard
//! - `eco sell` - Enter a listing draft and submit it
//! - `eco render` - Render a page to HTML
//! - `eco config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{BrowseArgs, ConfigArgs, ListingsArgs, RenderArgs, SellArgs};

/// Eco CLI - Browse the catalog and manage seller listings
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
    /// Print the catalog filtered and sorted by a browse query
    Browse(BrowseArgs),

    /// Print the seller's listings and dashboard
    Listings(ListingsArgs),

    /// Enter a new listing and submit it to the configured store
    Sell(SellArgs),

    /// Render a page to HTML
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Listings(args) => commands::listings::run(args, &ctx).await,
        Commands::Sell(args) => commands::sell::run(args, &ctx).await,
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
