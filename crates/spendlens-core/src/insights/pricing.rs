//! Pricing insights
//!
//! - Price standardization for items with wide unit price spread
//! - Volume discounts on large categories
//! - Regional pricing harmonization

use crate::analysis::AnalysisResult;
use crate::config::InsightConfig;

use super::engine::InsightRule;
use super::types::{Insight, InsightKind, Priority};

/// Fires whenever price variance data exists
pub struct PriceStandardizationRule;

impl InsightRule for PriceStandardizationRule {
    fn id(&self) -> InsightKind {
        InsightKind::PriceStandardization
    }

    fn evaluate(&self, result: &AnalysisResult, config: &InsightConfig) -> Option<Insight> {
        if result.price_variance.is_empty() {
            return None;
        }

        // Each item is assumed to be a fixed share of total spend
        let item_spend = result.summary.total_spend * config.item_spend_share;
        let high: Vec<_> = result
            .price_variance
            .iter()
            .filter(|item| item.variance > config.high_variance_pct)
            .collect();
        let saving: f64 = high
            .iter()
            .map(|item| item_spend * (item.variance / 100.0) * config.variance_capture_rate)
            .sum();

        Some(Insight::new(
            self.id(),
            Priority::High,
            saving,
            format!(
                "{} items show price variance above {}%. Standardizing procurement of these \
                 items could significantly reduce costs.",
                high.len(),
                config.high_variance_pct
            ),
        ))
    }
}

/// Always fires; savings come only from categories holding a large share of spend
pub struct VolumeDiscountRule;

impl InsightRule for VolumeDiscountRule {
    fn id(&self) -> InsightKind {
        InsightKind::VolumeDiscounts
    }

    fn evaluate(&self, result: &AnalysisResult, config: &InsightConfig) -> Option<Insight> {
        let large: Vec<_> = result
            .spend_by_category
            .iter()
            .filter(|c| c.percentage > config.large_category_share_pct)
            .collect();

        let saving: f64 = large
            .iter()
            .fold(0.0, |acc, c| acc + c.spend * config.volume_discount_rate);
        let names: Vec<&str> = large.iter().map(|c| c.key.as_str()).collect();

        Some(Insight::new(
            self.id(),
            Priority::Medium,
            saving,
            format!(
                "Large spending categories ({}) present opportunities for volume-based \
                 pricing negotiations.",
                names.join(", ")
            ),
        ))
    }
}

/// Fires when regional spend shares are far apart
pub struct RegionalOptimizationRule;

impl InsightRule for RegionalOptimizationRule {
    fn id(&self) -> InsightKind {
        InsightKind::RegionalOptimization
    }

    fn evaluate(&self, result: &AnalysisResult, config: &InsightConfig) -> Option<Insight> {
        let regions = &result.spend_by_region;
        if regions.len() <= 1 {
            return None;
        }

        let max = regions
            .iter()
            .map(|r| r.percentage)
            .fold(f64::NEG_INFINITY, f64::max);
        let min = regions
            .iter()
            .map(|r| r.percentage)
            .fold(f64::INFINITY, f64::min);
        if max - min <= config.regional_spread_pct {
            return None;
        }

        Some(Insight::new(
            self.id(),
            Priority::Medium,
            result.summary.total_spend * config.regional_savings_rate,
            "Significant regional spending variations detected. Implementing global pricing \
             agreements could reduce costs across regions.",
        ))
    }
}
