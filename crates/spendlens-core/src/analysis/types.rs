//! Output types for the spend analysis engine
//!
//! All types serialize to camelCase JSON so downstream dashboards and
//! exporters can consume them directly.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Headline figures for an order set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendSummary {
    pub total_spend: f64,
    pub total_orders: usize,
    pub unique_vendors: usize,
    pub maverick_spend: f64,
    pub maverick_percentage: f64,
    /// Maverick recovery plus the variance-based estimate. The two parts may
    /// overlap; they are added without reconciliation.
    pub potential_savings: f64,
    /// Zero when there are no orders
    pub avg_order_value: f64,
}

/// Spend for one vendor, category or region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendBreakdown {
    pub key: String,
    pub spend: f64,
    /// Share of total spend (0 when total spend is 0)
    pub percentage: f64,
    pub orders: usize,
}

/// Unit price spread for an item bought in two or more orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPriceVariance {
    pub item: String,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    /// (max - min) / avg as a percentage; 0 when the average price is 0
    pub variance: f64,
    pub total_quantity: f64,
    pub vendors: BTreeSet<String>,
    pub regions: BTreeSet<String>,
}

/// Ranked vendor with its composite performance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPerformance {
    pub vendor: String,
    pub spend: f64,
    pub orders: usize,
    /// Rounded to one decimal
    pub avg_delivery_score: f64,
    /// Rounded to one decimal
    pub off_contract_percentage: f64,
    /// 0-100, rounded to one decimal
    pub performance_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffContractVendor {
    pub vendor: String,
    pub off_contract_spend: f64,
    pub off_contract_orders: usize,
}

/// Off-contract spend report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaverickAnalysis {
    pub off_contract_spend: f64,
    pub off_contract_percentage: f64,
    pub off_contract_orders: usize,
    /// Off-contract spend times the assumed recovery rate
    pub potential_savings: f64,
    pub top_off_contract_vendors: Vec<OffContractVendor>,
}

/// Complete result of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: SpendSummary,
    pub spend_by_vendor: Vec<SpendBreakdown>,
    pub spend_by_category: Vec<SpendBreakdown>,
    pub spend_by_region: Vec<SpendBreakdown>,
    pub price_variance: Vec<ItemPriceVariance>,
    pub top_vendors: Vec<VendorPerformance>,
    pub maverick_analysis: MaverickAnalysis,
}

/// `part / whole * 100`, or 0 when `whole` is 0
pub(crate) fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_zero_denominator() {
        assert_eq!(percent_of(50.0, 0.0), 0.0);
        assert_eq!(percent_of(0.0, 0.0), 0.0);
        assert_eq!(percent_of(25.0, 200.0), 12.5);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(4.26), 4.3);
        assert_eq!(round1(4.24), 4.2);
        assert_eq!(round1(100.0), 100.0);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let value = serde_json::to_value(SpendSummary::default()).unwrap();
        assert!(value.get("totalSpend").is_some());
        assert!(value.get("avgOrderValue").is_some());
        assert!(value.get("total_spend").is_none());
    }

    #[test]
    fn test_variance_sets_serialize_as_arrays() {
        let entry = ItemPriceVariance {
            item: "Widget".to_string(),
            avg_price: 1.0,
            min_price: 1.0,
            max_price: 1.0,
            variance: 0.0,
            total_quantity: 2.0,
            vendors: ["B", "A"].iter().map(|s| s.to_string()).collect(),
            regions: BTreeSet::new(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["vendors"], serde_json::json!(["A", "B"]));
        assert_eq!(value["regions"], serde_json::json!([]));
    }
}
