//! Spend analysis command

use std::path::Path;

use anyhow::{Context, Result};
use spendlens_core::{AnalysisResult, SpendAnalyzer, SpendBreakdown};

use super::{load_filtered_orders, load_heuristics, truncate};
use crate::cli::FilterArgs;

/// Rows shown per breakdown table
const BREAKDOWN_ROWS: usize = 10;

pub fn cmd_analyze(
    file: &Path,
    filters: &FilterArgs,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let heuristics = load_heuristics(config)?;
    let orders = load_filtered_orders(file, filters)?;
    let result = SpendAnalyzer::with_config(heuristics.analysis).analyze(&orders);

    if json {
        let output =
            serde_json::to_string_pretty(&result).context("Failed to serialize analysis")?;
        println!("{}", output);
        return Ok(());
    }

    print_summary(&result);
    if result.summary.total_orders == 0 {
        return Ok(());
    }

    print_breakdown("🏢 Spend by Vendor", "Vendor", &result.spend_by_vendor);
    print_breakdown("📦 Spend by Category", "Category", &result.spend_by_category);
    print_breakdown("🌍 Spend by Region", "Region", &result.spend_by_region);
    print_top_vendors(&result);
    print_price_variance(&result);
    print_maverick(&result);

    Ok(())
}

fn print_summary(result: &AnalysisResult) {
    let s = &result.summary;

    println!();
    println!("📊 Spend Summary");
    println!("   ─────────────────────────────────────────────────────────────");

    if s.total_orders == 0 {
        println!("   No orders match the given filters.");
        return;
    }

    println!("   Total spend:        ${:.2}", s.total_spend);
    println!("   Orders:             {}", s.total_orders);
    println!("   Vendors:            {}", s.unique_vendors);
    println!("   Avg order value:    ${:.2}", s.avg_order_value);
    println!(
        "   Maverick spend:     ${:.2} ({:.1}%)",
        s.maverick_spend, s.maverick_percentage
    );
    println!("   Potential savings:  ${:.2}", s.potential_savings);
}

fn print_breakdown(title: &str, label: &str, rows: &[SpendBreakdown]) {
    println!();
    println!("{}", title);
    println!("   {:25} │ {:>12} │ {:>6} │ {:>6}", label, "Spend", "%", "Orders");
    println!("   ──────────────────────────┼──────────────┼────────┼────────");

    for row in rows.iter().take(BREAKDOWN_ROWS) {
        println!(
            "   {:25} │ {:>12.2} │ {:>5.1}% │ {:>6}",
            truncate(&row.key, 25),
            row.spend,
            row.percentage,
            row.orders
        );
    }

    if rows.len() > BREAKDOWN_ROWS {
        println!("   ... and {} more", rows.len() - BREAKDOWN_ROWS);
    }
}

fn print_top_vendors(result: &AnalysisResult) {
    println!();
    println!("🏆 Top Vendors");
    println!(
        "   {:25} │ {:>12} │ {:>6} │ {:>8} │ {:>6} │ {:>5}",
        "Vendor", "Spend", "Orders", "Delivery", "Off %", "Score"
    );
    println!("   ──────────────────────────┼──────────────┼────────┼──────────┼────────┼───────");

    for v in &result.top_vendors {
        println!(
            "   {:25} │ {:>12.2} │ {:>6} │ {:>8.1} │ {:>5.1}% │ {:>5.1}",
            truncate(&v.vendor, 25),
            v.spend,
            v.orders,
            v.avg_delivery_score,
            v.off_contract_percentage,
            v.performance_score
        );
    }
}

fn print_price_variance(result: &AnalysisResult) {
    println!();
    println!("💲 Price Variance");

    if result.price_variance.is_empty() {
        println!("   No items were ordered more than once.");
        return;
    }

    println!(
        "   {:25} │ {:>10} │ {:>10} │ {:>10} │ {:>8}",
        "Item", "Avg", "Min", "Max", "Var %"
    );
    println!("   ──────────────────────────┼────────────┼────────────┼────────────┼──────────");

    for item in result.price_variance.iter().take(BREAKDOWN_ROWS) {
        println!(
            "   {:25} │ {:>10.2} │ {:>10.2} │ {:>10.2} │ {:>7.1}%",
            truncate(&item.item, 25),
            item.avg_price,
            item.min_price,
            item.max_price,
            item.variance
        );
    }

    if result.price_variance.len() > BREAKDOWN_ROWS {
        println!(
            "   ... and {} more",
            result.price_variance.len() - BREAKDOWN_ROWS
        );
    }
}

fn print_maverick(result: &AnalysisResult) {
    let m = &result.maverick_analysis;

    println!();
    println!("⚠️  Maverick Spend");
    println!(
        "   Off-contract: ${:.2} ({:.1}%) across {} orders",
        m.off_contract_spend, m.off_contract_percentage, m.off_contract_orders
    );
    println!("   Recoverable:  ${:.2}", m.potential_savings);

    if m.top_off_contract_vendors.is_empty() {
        return;
    }

    println!();
    println!("   {:25} │ {:>12} │ {:>6}", "Vendor", "Off-contract", "Orders");
    println!("   ──────────────────────────┼──────────────┼────────");
    for v in &m.top_off_contract_vendors {
        println!(
            "   {:25} │ {:>12.2} │ {:>6}",
            truncate(&v.vendor, 25),
            v.off_contract_spend,
            v.off_contract_orders
        );
    }
}
