//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use spendlens_core::test_utils::OrderBuilder;
use tempfile::TempDir;

use crate::cli::FilterArgs;
use crate::commands::{self, truncate};

const ORDERS_CSV: &str = "\
id,vendor,category,region,item_name,quantity,unit_price,total_amount,order_date,contract_type,delivery_score
PO-1,Acme,Hardware,North America,Bolt,100,2.00,200.00,2024-01-10,contract,4.5
PO-2,Acme,Hardware,North America,Bolt,100,2.50,250.00,2024-02-10,contract,4.0
PO-3,Zenith,Hardware,Europe,Bolt,100,3.00,300.00,2024-03-10,off-contract,3.0
PO-4,Zenith,Office,Europe,Paper,50,4.00,200.00,2024-03-15,contract,3.5
";

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn setup_orders_csv() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "orders.csv", ORDERS_CSV);
    (dir, path)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ========== Filter Resolution Tests ==========

#[test]
fn test_resolve_filter_defaults_to_all_time() {
    let today = date(2024, 6, 30);
    let filter = commands::resolve_filter(&FilterArgs::default(), today).unwrap();

    assert_eq!(filter.start_date, None);
    assert_eq!(filter.end_date, Some(today));
    assert_eq!(filter.vendor, None);
}

#[test]
fn test_resolve_filter_period_and_fields() {
    let args = FilterArgs {
        vendor: Some("Acme".into()),
        region: Some("Europe".into()),
        period: "last-90-days".into(),
        ..Default::default()
    };
    let filter = commands::resolve_filter(&args, date(2024, 6, 30)).unwrap();

    assert_eq!(filter.vendor.as_deref(), Some("Acme"));
    assert_eq!(filter.region.as_deref(), Some("Europe"));
    assert_eq!(filter.category, None);
    assert_eq!(filter.start_date, Some(date(2024, 4, 1)));
}

#[test]
fn test_resolve_filter_explicit_dates_override_period() {
    let args = FilterArgs {
        period: "last-7-days".into(),
        from: Some("2024-01-01".into()),
        to: Some("2024-02-29".into()),
        ..Default::default()
    };
    let filter = commands::resolve_filter(&args, date(2024, 6, 30)).unwrap();

    assert_eq!(filter.start_date, Some(date(2024, 1, 1)));
    assert_eq!(filter.end_date, Some(date(2024, 2, 29)));
}

#[test]
fn test_resolve_filter_rejects_bad_values() {
    let today = date(2024, 6, 30);

    let bad_period = FilterArgs {
        period: "last-decade".into(),
        ..Default::default()
    };
    assert!(commands::resolve_filter(&bad_period, today).is_err());

    let bad_date = FilterArgs {
        from: Some("01/02/2024".into()),
        ..Default::default()
    };
    assert!(commands::resolve_filter(&bad_date, today).is_err());

    let inverted = FilterArgs {
        from: Some("2024-05-01".into()),
        to: Some("2024-04-01".into()),
        ..Default::default()
    };
    assert!(commands::resolve_filter(&inverted, today).is_err());
}

#[test]
fn test_load_filtered_orders() {
    let (_dir, path) = setup_orders_csv();

    let all = commands::load_filtered_orders(&path, &FilterArgs::default()).unwrap();
    assert_eq!(all.len(), 4);

    let zenith = FilterArgs {
        vendor: Some("Zenith".into()),
        ..Default::default()
    };
    let orders = commands::load_filtered_orders(&path, &zenith).unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o.vendor == "Zenith"));

    let range = FilterArgs {
        from: Some("2024-02-01".into()),
        to: Some("2024-03-10".into()),
        ..Default::default()
    };
    assert_eq!(commands::load_filtered_orders(&path, &range).unwrap().len(), 2);
}

#[test]
fn test_load_filtered_orders_missing_file() {
    let result = commands::load_filtered_orders(Path::new("/nonexistent/orders.csv"), &FilterArgs::default());
    assert!(result.is_err());
}

// ========== Analyze / Insights Command Tests ==========

#[test]
fn test_cmd_analyze() {
    let (_dir, path) = setup_orders_csv();
    let result = commands::cmd_analyze(&path, &FilterArgs::default(), None, false);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_analyze_json() {
    let (_dir, path) = setup_orders_csv();
    let result = commands::cmd_analyze(&path, &FilterArgs::default(), None, true);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_analyze_no_matches() {
    let (_dir, path) = setup_orders_csv();
    let args = FilterArgs {
        category: Some("Furniture".into()),
        ..Default::default()
    };
    let result = commands::cmd_analyze(&path, &args, None, false);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_analyze_from_json_file() {
    let dir = TempDir::new().unwrap();
    let orders = vec![
        OrderBuilder::new("Acme", "Bolt").unit_price(2.0).build(),
        OrderBuilder::new("Zenith", "Bolt")
            .unit_price(3.0)
            .off_contract()
            .build(),
    ];
    let path = write_file(&dir, "orders.json", &serde_json::to_string(&orders).unwrap());

    assert!(commands::cmd_analyze(&path, &FilterArgs::default(), None, false).is_ok());
    assert!(commands::cmd_insights(&path, &FilterArgs::default(), None, true).is_ok());
}

#[test]
fn test_cmd_analyze_invalid_csv() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "orders.csv", "vendor,amount\nAcme,12\n");
    let result = commands::cmd_analyze(&path, &FilterArgs::default(), None, false);
    assert!(result.is_err());
}

#[test]
fn test_cmd_insights() {
    let (_dir, path) = setup_orders_csv();
    assert!(commands::cmd_insights(&path, &FilterArgs::default(), None, false).is_ok());
    assert!(commands::cmd_insights(&path, &FilterArgs::default(), None, true).is_ok());
}

#[test]
fn test_cmd_report() {
    let (_dir, path) = setup_orders_csv();
    let result = commands::cmd_report(&path, &FilterArgs::default(), None);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_insights_with_custom_config() {
    let (dir, path) = setup_orders_csv();
    let config = write_file(
        &dir,
        "heuristics.toml",
        "[insights]\nmax_insights = 1\nmaverick_alert_pct = 90.0\n",
    );

    let heuristics = commands::load_heuristics(Some(config.as_path())).unwrap();
    assert_eq!(heuristics.insights.max_insights, 1);

    let result = commands::cmd_insights(&path, &FilterArgs::default(), Some(config.as_path()), false);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_insights_rejects_invalid_config() {
    let (dir, path) = setup_orders_csv();
    let config = write_file(
        &dir,
        "heuristics.toml",
        "[analysis]\ndelivery_weight = 0.9\n",
    );

    let result = commands::cmd_insights(&path, &FilterArgs::default(), Some(config.as_path()), false);
    assert!(result.is_err());
}

// ========== Options / Config Command Tests ==========

#[test]
fn test_cmd_options() {
    let (_dir, path) = setup_orders_csv();
    assert!(commands::cmd_options(&path).is_ok());
}

#[test]
fn test_cmd_config() {
    assert!(commands::cmd_config(None, false).is_ok());
    assert!(commands::cmd_config(None, true).is_ok());

    let missing = Path::new("/nonexistent/heuristics.toml");
    assert!(commands::cmd_config(Some(missing), true).is_ok());
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a much longer vendor name", 10), "a much ...");
    assert_eq!(truncate("Zürich Präzision GmbH", 9), "Zürich...");
}
