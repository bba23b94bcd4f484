//! Procurement program insights
//!
//! Recommendations driven by overall spend rather than a specific anomaly.

use crate::analysis::AnalysisResult;
use crate::config::InsightConfig;

use super::engine::InsightRule;
use super::types::{Insight, InsightKind, Priority};

/// Always fires
pub struct AutomationRule;

impl InsightRule for AutomationRule {
    fn id(&self) -> InsightKind {
        InsightKind::AutomationOpportunity
    }

    fn evaluate(&self, result: &AnalysisResult, config: &InsightConfig) -> Option<Insight> {
        Some(Insight::new(
            self.id(),
            Priority::Medium,
            result.summary.total_spend * config.automation_savings_rate,
            "Implementing e-procurement platforms and automated approval workflows can \
             reduce processing costs and improve compliance.",
        ))
    }
}

/// Fires once total spend passes the strategic sourcing floor
pub struct StrategicSourcingRule;

impl InsightRule for StrategicSourcingRule {
    fn id(&self) -> InsightKind {
        InsightKind::StrategicSourcing
    }

    fn evaluate(&self, result: &AnalysisResult, config: &InsightConfig) -> Option<Insight> {
        let total = result.summary.total_spend;
        if total <= config.strategic_sourcing_min_spend {
            return None;
        }

        Some(Insight::new(
            self.id(),
            Priority::High,
            total * config.strategic_sourcing_rate,
            "Your spend volume qualifies for strategic sourcing initiatives. Implementing \
             category management and supplier relationship management can drive \
             significant value.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_total(total: f64) -> AnalysisResult {
        let mut result = AnalysisResult::default();
        result.summary.total_spend = total;
        result
    }

    #[test]
    fn test_automation_always_fires() {
        let insight = AutomationRule
            .evaluate(&with_total(250_000.0), &InsightConfig::default())
            .unwrap();
        assert!((insight.potential_saving - 10_000.0).abs() < 1e-6);
        assert_eq!(insight.implementation_time, "6-12 months");
    }

    #[test]
    fn test_strategic_sourcing_threshold() {
        let config = InsightConfig::default();

        assert!(StrategicSourcingRule
            .evaluate(&with_total(5_000_000.0), &config)
            .is_none());

        let insight = StrategicSourcingRule
            .evaluate(&with_total(6_000_000.0), &config)
            .unwrap();
        assert_eq!(insight.priority, Priority::High);
        assert!((insight.potential_saving - 720_000.0).abs() < 1e-6);
    }
}
