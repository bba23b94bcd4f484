//! SpendLens CLI - Procurement spend analytics
//!
//! Usage:
//!   spendlens analyze --file orders.csv       Spend summary and breakdowns
//!   spendlens insights --file orders.csv      Cost-saving recommendations
//!   spendlens report --file orders.csv        Analysis + insights as JSON
//!   spendlens options --file orders.csv       Available filter values

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Analyze {
            file,
            filters,
            json,
        } => commands::cmd_analyze(&file, &filters, config, json),
        Commands::Insights {
            file,
            filters,
            json,
        } => commands::cmd_insights(&file, &filters, config, json),
        Commands::Report { file, filters } => commands::cmd_report(&file, &filters, config),
        Commands::Options { file } => commands::cmd_options(&file),
        Commands::Config { path } => commands::cmd_config(config, path),
    }
}
