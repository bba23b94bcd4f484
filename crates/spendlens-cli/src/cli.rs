//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// SpendLens - Procurement spend analytics
#[derive(Parser)]
#[command(name = "spendlens")]
#[command(about = "Procurement spend analysis and cost-saving insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Heuristics config file (TOML)
    ///
    /// Defaults to the user data directory override if present,
    /// otherwise the built-in heuristics.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze spend: summary, breakdowns, price variance, maverick spend
    Analyze {
        /// Orders file (CSV, or JSON with a .json extension)
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate cost-saving insights
    Insights {
        /// Orders file (CSV, or JSON with a .json extension)
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print insights as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print analysis and insights together as JSON
    Report {
        /// Orders file (CSV, or JSON with a .json extension)
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the vendors, categories and regions available for filtering
    Options {
        /// Orders file (CSV, or JSON with a .json extension)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show the effective heuristics configuration
    Config {
        /// Print the override file location instead
        #[arg(long)]
        path: bool,
    },
}

/// Order filters shared by the analysis commands
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Only orders from this vendor
    #[arg(long)]
    pub vendor: Option<String>,

    /// Only orders in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only orders in this region
    #[arg(long)]
    pub region: Option<String>,

    /// Time period: last-7-days, last-30-days, last-90-days, last-year, all-time
    #[arg(long, default_value = "all-time")]
    pub period: String,

    /// Custom start date (YYYY-MM-DD) - overrides period
    #[arg(long)]
    pub from: Option<String>,

    /// Custom end date (YYYY-MM-DD) - overrides period
    #[arg(long)]
    pub to: Option<String>,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            vendor: None,
            category: None,
            region: None,
            period: "all-time".to_string(),
            from: None,
            to: None,
        }
    }
}
