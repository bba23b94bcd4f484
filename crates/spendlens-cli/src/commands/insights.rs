//! Insight commands

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use spendlens_core::{AnalysisResult, Insight, InsightGenerator, Priority, SpendAnalyzer};

use super::{load_filtered_orders, load_heuristics, truncate};
use crate::cli::FilterArgs;

/// Run analysis and insight generation with the effective heuristics
fn analyze_with_insights(
    file: &Path,
    filters: &FilterArgs,
    config: Option<&Path>,
) -> Result<(AnalysisResult, Vec<Insight>)> {
    let heuristics = load_heuristics(config)?;
    let orders = load_filtered_orders(file, filters)?;

    let result = SpendAnalyzer::with_config(heuristics.analysis).analyze(&orders);
    let insights = InsightGenerator::with_config(heuristics.insights).generate(&result);
    Ok((result, insights))
}

pub fn cmd_insights(
    file: &Path,
    filters: &FilterArgs,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let (result, insights) = analyze_with_insights(file, filters, config)?;

    if json {
        let output =
            serde_json::to_string_pretty(&insights).context("Failed to serialize insights")?;
        println!("{}", output);
        return Ok(());
    }

    println!();
    println!("💡 Cost-Saving Insights");
    println!("   ─────────────────────────────────────────────────────────────");

    if insights.is_empty() {
        println!("   No insights for the selected orders.");
        return Ok(());
    }

    let total: f64 = insights.iter().map(|i| i.potential_saving).sum();
    println!(
        "   {} insights, ${:.2} potential savings on ${:.2} spend",
        insights.len(),
        total,
        result.summary.total_spend
    );

    for insight in &insights {
        println!();
        println!(
            "   {} {} [{}]",
            priority_icon(insight.priority),
            insight.title,
            insight.priority
        );
        println!("      {}", truncate(&insight.description, 160));
        println!(
            "      Saving: ${:.2} │ {} │ {} │ Impact: {}",
            insight.potential_saving, insight.category, insight.implementation_time, insight.impact
        );
    }

    Ok(())
}

/// Combined analysis + insights payload
pub fn cmd_report(file: &Path, filters: &FilterArgs, config: Option<&Path>) -> Result<()> {
    let (result, insights) = analyze_with_insights(file, filters, config)?;

    let report = json!({
        "analysis": serde_json::to_value(&result).context("Failed to serialize analysis")?,
        "insights": serde_json::to_value(&insights).context("Failed to serialize insights")?,
    });
    let output = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", output);

    Ok(())
}

fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "🔴",
        Priority::High => "🟠",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}
