//! Vendor-base insights
//!
//! - Consolidation of a long tail of small vendors
//! - Improvement or replacement of poorly performing key vendors

use crate::analysis::AnalysisResult;
use crate::config::InsightConfig;

use super::engine::InsightRule;
use super::types::{Insight, InsightKind, Priority};

/// Fires when the vendor base is large; savings come from the small-share tail
pub struct VendorConsolidationRule;

impl InsightRule for VendorConsolidationRule {
    fn id(&self) -> InsightKind {
        InsightKind::VendorConsolidation
    }

    fn evaluate(&self, result: &AnalysisResult, config: &InsightConfig) -> Option<Insight> {
        let vendors = &result.spend_by_vendor;
        if vendors.len() <= config.consolidation_min_vendors {
            return None;
        }

        let small: Vec<_> = vendors
            .iter()
            .filter(|v| v.percentage < config.small_vendor_share_pct)
            .collect();
        let small_spend = small.iter().fold(0.0, |acc, v| acc + v.spend);

        Some(Insight::new(
            self.id(),
            Priority::High,
            small_spend * config.consolidation_savings_rate,
            format!(
                "You have {} vendors representing less than {}% of total spend each. \
                 Consolidating with preferred vendors could reduce administrative costs \
                 and improve negotiating power.",
                small.len(),
                config.small_vendor_share_pct
            ),
        ))
    }
}

/// Fires when any top vendor scores below the performance threshold
pub struct VendorPerformanceRule;

impl InsightRule for VendorPerformanceRule {
    fn id(&self) -> InsightKind {
        InsightKind::VendorPerformance
    }

    fn evaluate(&self, result: &AnalysisResult, config: &InsightConfig) -> Option<Insight> {
        let low: Vec<_> = result
            .top_vendors
            .iter()
            .filter(|v| v.performance_score < config.low_performance_score)
            .collect();
        if low.is_empty() {
            return None;
        }

        let low_spend: f64 = low.iter().map(|v| v.spend).sum();

        Some(Insight::new(
            self.id(),
            Priority::Medium,
            low_spend * config.performance_savings_rate,
            format!(
                "{} key vendors have performance scores below {}%. Implementing performance \
                 improvement programs or vendor replacement could reduce costs and improve \
                 service quality.",
                low.len(),
                config.low_performance_score
            ),
        ))
    }
}
