//! Shared utilities: order loading, filter resolution and heuristics loading

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use spendlens_core::{load_orders, DatePreset, HeuristicsConfig, Order, OrderFilter};

use crate::cli::FilterArgs;

/// Load heuristics from an explicit path, or the default resolution
pub fn load_heuristics(config: Option<&Path>) -> Result<HeuristicsConfig> {
    match config {
        Some(path) => HeuristicsConfig::load_from(path)
            .with_context(|| format!("Failed to load heuristics from {}", path.display())),
        None => HeuristicsConfig::load().context("Failed to load heuristics"),
    }
}

/// Turn filter flags into an [`OrderFilter`]
///
/// `--from` / `--to` replace the corresponding bound of `--period`.
pub fn resolve_filter(args: &FilterArgs, today: NaiveDate) -> Result<OrderFilter> {
    let preset = DatePreset::from_str(&args.period).map_err(anyhow::Error::msg)?;
    let (preset_start, preset_end) = preset.range(today);

    let start = match args.from.as_deref() {
        Some(from) => Some(
            NaiveDate::parse_from_str(from, "%Y-%m-%d")
                .context("Invalid --from date format (use YYYY-MM-DD)")?,
        ),
        None => preset_start,
    };
    let end = match args.to.as_deref() {
        Some(to) => NaiveDate::parse_from_str(to, "%Y-%m-%d")
            .context("Invalid --to date format (use YYYY-MM-DD)")?,
        None => preset_end,
    };

    if let Some(start) = start {
        if start > end {
            anyhow::bail!("Start date {} is after end date {}", start, end);
        }
    }

    Ok(OrderFilter::new()
        .vendor(args.vendor.as_deref())
        .category(args.category.as_deref())
        .region(args.region.as_deref())
        .date_range(start, Some(end)))
}

/// Load orders from a file and apply the filter flags
pub fn load_filtered_orders(file: &Path, args: &FilterArgs) -> Result<Vec<Order>> {
    let orders = load_orders(file)
        .with_context(|| format!("Failed to load orders from {}", file.display()))?;
    let filter = resolve_filter(args, Utc::now().date_naive())?;
    let filtered = filter.apply(&orders);

    if filtered.is_empty() && !orders.is_empty() {
        tracing::warn!(
            loaded = orders.len(),
            "No orders match the given filters"
        );
    }

    Ok(filtered)
}
