//! Filter options and configuration commands

use std::path::Path;

use anyhow::{Context, Result};
use spendlens_core::config::default_config_path;
use spendlens_core::{load_orders, FilterOptions};

use super::load_heuristics;

pub fn cmd_options(file: &Path) -> Result<()> {
    let orders = load_orders(file)
        .with_context(|| format!("Failed to load orders from {}", file.display()))?;
    let options = FilterOptions::from_orders(&orders);

    println!();
    println!("🔎 Filter Options ({} orders)", orders.len());
    println!("   ─────────────────────────────────────────────────────────────");

    print_values("Vendors", &options.vendors);
    print_values("Categories", &options.categories);
    print_values("Regions", &options.regions);

    Ok(())
}

fn print_values(label: &str, values: &[String]) {
    println!();
    println!("   {} ({})", label, values.len());
    for value in values {
        println!("     {}", value);
    }
}

/// Print the effective heuristics as TOML, or where the override lives
pub fn cmd_config(config: Option<&Path>, show_path: bool) -> Result<()> {
    if show_path {
        match config.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => {
                let state = if path.exists() { "" } else { " (not present)" };
                println!("{}{}", path.display(), state);
            }
            None => println!("No data directory available; using built-in heuristics"),
        }
        return Ok(());
    }

    let heuristics = load_heuristics(config)?;
    let rendered = heuristics.to_toml().context("Failed to render heuristics")?;
    print!("{}", rendered);

    Ok(())
}
