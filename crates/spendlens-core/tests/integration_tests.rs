//! Integration tests for spendlens-core
//!
//! These tests exercise the full import → filter → analyze → insights workflow.

use chrono::NaiveDate;
use spendlens_core::{
    config::HeuristicsConfig,
    filter::{DatePreset, FilterOptions, OrderFilter},
    import::{parse_orders_csv, parse_orders_json},
    insights::{InsightGenerator, InsightKind, Priority},
    SpendAnalyzer,
};

/// Six orders across three vendors, three categories and three regions:
/// - Bolt is bought from two vendors at 2.00 to 3.00 (40% variance)
/// - Paper has two orders at the same price (0% variance)
/// - Laptop has a single order and is excluded from price variance
/// - Zenith's bolt order and Orbit's paper order are off-contract (500 of 2150)
fn procurement_csv() -> &'static str {
    r#"id,vendor,category,region,item_name,quantity,unit_price,total_amount,order_date,contract_type,delivery_score
PO-1001,Acme,Hardware,North America,Bolt,100,$2.00,$200.00,2024-01-10,contract,4.5
PO-1002,Acme,Hardware,North America,Bolt,100,$2.50,$250.00,2024-02-10,contract,4.0
PO-1003,Zenith,Hardware,Europe,Bolt,100,$3.00,$300.00,2024-03-10,off-contract,3.0
PO-1004,Zenith,Office,Europe,Paper,50,$4.00,$200.00,2024-03-15,contract,3.5
PO-1005,Orbit,Office,Asia Pacific,Paper,50,$4.00,$200.00,2024-03-20,off-contract,2.0
PO-1006,Orbit,IT,Asia Pacific,Laptop,1,"$1,000.00","$1,000.00",2024-03-25,contract,5.0"#
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// =============================================================================
// Analysis Workflow
// =============================================================================

#[test]
fn test_full_analysis_workflow() {
    let orders = parse_orders_csv(procurement_csv().as_bytes()).expect("Failed to parse CSV");
    assert_eq!(orders.len(), 6);

    let result = SpendAnalyzer::new().analyze(&orders);

    let summary = &result.summary;
    assert!(approx(summary.total_spend, 2150.0));
    assert_eq!(summary.total_orders, 6);
    assert_eq!(summary.unique_vendors, 3);
    assert!(approx(summary.maverick_spend, 500.0));
    assert!(approx(summary.maverick_percentage, 500.0 / 2150.0 * 100.0));

    // Orbit 1200, Zenith 500, Acme 450
    let vendors: Vec<&str> = result.spend_by_vendor.iter().map(|v| v.key.as_str()).collect();
    assert_eq!(vendors, vec!["Orbit", "Zenith", "Acme"]);

    let categories: Vec<&str> = result.spend_by_category.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(categories, vec!["IT", "Hardware", "Office"]);

    let share: f64 = result.spend_by_region.iter().map(|r| r.percentage).sum();
    assert!(approx(share, 100.0));

    assert_eq!(result.price_variance.len(), 2);
    let bolt = &result.price_variance[0];
    assert_eq!(bolt.item, "Bolt");
    assert!(approx(bolt.variance, 40.0));
    assert!(approx(bolt.total_quantity, 300.0));
    assert_eq!(bolt.vendors.len(), 2);
    assert_eq!(bolt.regions.len(), 2);
    assert_eq!(result.price_variance[1].item, "Paper");
    assert!(approx(result.price_variance[1].variance, 0.0));

    let zenith = result
        .top_vendors
        .iter()
        .find(|v| v.vendor == "Zenith")
        .expect("Zenith should be a top vendor");
    assert!(approx(zenith.off_contract_percentage, 60.0));
    assert!(approx(zenith.performance_score, 42.8));

    let maverick = &result.maverick_analysis;
    assert_eq!(maverick.off_contract_orders, 2);
    assert!(approx(maverick.potential_savings, 75.0));
    assert_eq!(maverick.top_off_contract_vendors[0].vendor, "Zenith");

    // Maverick 75 plus two variance items at 2150 * 0.1 * 0.1 each
    assert!(approx(summary.potential_savings, 75.0 + 2.0 * 21.5));
}

#[test]
fn test_full_insight_workflow() {
    let orders = parse_orders_csv(procurement_csv().as_bytes()).expect("Failed to parse CSV");
    let result = SpendAnalyzer::new().analyze(&orders);
    let insights = InsightGenerator::new().generate(&result);

    let ids: Vec<InsightKind> = insights.iter().map(|i| i.id).collect();
    assert_eq!(
        ids,
        vec![
            InsightKind::PriceStandardization,
            InsightKind::MaverickSpend,
            InsightKind::VolumeDiscounts,
            InsightKind::RegionalOptimization,
            InsightKind::VendorPerformance,
            InsightKind::AutomationOpportunity,
        ]
    );

    let maverick = &insights[1];
    assert_eq!(maverick.priority, Priority::Critical);
    assert!(approx(maverick.potential_saving, 75.0));

    // Every category is above 10% of spend
    assert!(approx(insights[2].potential_saving, 2150.0 * 0.08));

    // Orbit (62.1) and Zenith (42.8) score below 70, Acme (74.8) does not
    assert!(approx(insights[4].potential_saving, (1200.0 + 500.0) * 0.15));
    assert!(insights[4].description.starts_with("2 key vendors"));

    for insight in &insights {
        assert!(insight.potential_saving >= 0.0);
        assert!(!insight.title.is_empty());
    }
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_filtered_analysis() {
    let orders = parse_orders_csv(procurement_csv().as_bytes()).unwrap();

    let zenith = OrderFilter::new().vendor(Some("Zenith")).apply(&orders);
    let result = SpendAnalyzer::new().analyze(&zenith);
    assert!(approx(result.summary.total_spend, 500.0));
    assert!(approx(result.summary.maverick_percentage, 60.0));
    assert!(result.price_variance.is_empty());

    let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let march = OrderFilter::new()
        .preset(DatePreset::Last30Days, today)
        .apply(&orders);
    assert_eq!(march.len(), 4);

    let nothing = OrderFilter::new()
        .region(Some("Antarctica"))
        .apply(&orders);
    let empty = SpendAnalyzer::new().analyze(&nothing);
    assert_eq!(empty.summary.total_orders, 0);
    assert_eq!(empty.summary.total_spend, 0.0);
    assert!(empty.spend_by_vendor.is_empty());

    // Empty input still yields the two unconditional insights, both at zero
    let insights = InsightGenerator::new().generate(&empty);
    let ids: Vec<InsightKind> = insights.iter().map(|i| i.id).collect();
    assert_eq!(
        ids,
        vec![
            InsightKind::VolumeDiscounts,
            InsightKind::AutomationOpportunity
        ]
    );
    assert!(insights.iter().all(|i| i.potential_saving == 0.0));
}

#[test]
fn test_filter_options_from_import() {
    let orders = parse_orders_csv(procurement_csv().as_bytes()).unwrap();
    let options = FilterOptions::from_orders(&orders);

    assert_eq!(options.vendors, vec!["Acme", "Orbit", "Zenith"]);
    assert_eq!(options.categories, vec!["Hardware", "IT", "Office"]);
    assert_eq!(options.regions, vec!["Asia Pacific", "Europe", "North America"]);
}

// =============================================================================
// Configuration and Serialization
// =============================================================================

#[test]
fn test_custom_heuristics_change_results() {
    let orders = parse_orders_csv(procurement_csv().as_bytes()).unwrap();

    let config = HeuristicsConfig::from_toml(
        r#"
[analysis]
maverick_recovery_rate = 0.5

[insights]
maverick_alert_pct = 50.0
max_insights = 2
"#,
    )
    .expect("Failed to parse config");

    let result = SpendAnalyzer::with_config(config.analysis.clone()).analyze(&orders);
    assert!(approx(result.maverick_analysis.potential_savings, 250.0));

    let insights = InsightGenerator::with_config(config.insights.clone()).generate(&result);
    assert_eq!(insights.len(), 2);
    assert!(insights.iter().all(|i| i.id != InsightKind::MaverickSpend));
}

#[test]
fn test_json_output_is_camel_case() {
    let orders = parse_orders_csv(procurement_csv().as_bytes()).unwrap();
    let result = SpendAnalyzer::new().analyze(&orders);

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["summary"]["totalSpend"].is_number());
    assert!(json["maverickAnalysis"]["topOffContractVendors"].is_array());
    assert_eq!(json["priceVariance"][0]["item"], "Bolt");

    let insights = InsightGenerator::new().generate(&result);
    let json = serde_json::to_value(&insights).unwrap();
    assert_eq!(json[0]["id"], "price-standardization");
    assert_eq!(json[0]["status"], "Identified");
    assert!(json[0]["potentialSaving"].is_number());

    // Orders round-trip through the JSON importer
    let exported = serde_json::to_string(&orders).unwrap();
    let reimported = parse_orders_json(exported.as_bytes()).unwrap();
    assert_eq!(reimported, orders);
}
