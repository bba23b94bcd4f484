//! Contract compliance insight

use crate::analysis::AnalysisResult;
use crate::config::InsightConfig;

use super::engine::InsightRule;
use super::types::{Insight, InsightKind, Priority};

/// Fires when off-contract spend exceeds the alert share
///
/// Reuses the maverick recovery estimate from the analysis so the two
/// figures always agree.
pub struct MaverickSpendRule;

impl InsightRule for MaverickSpendRule {
    fn id(&self) -> InsightKind {
        InsightKind::MaverickSpend
    }

    fn evaluate(&self, result: &AnalysisResult, config: &InsightConfig) -> Option<Insight> {
        let maverick = &result.maverick_analysis;
        if maverick.off_contract_percentage <= config.maverick_alert_pct {
            return None;
        }

        Some(Insight::new(
            self.id(),
            Priority::Critical,
            maverick.potential_savings,
            format!(
                "{:.1}% of spending is off-contract. Implementing stricter procurement \
                 controls and preferred vendor programs can capture significant savings.",
                maverick.off_contract_percentage
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::test_utils::OrderBuilder;

    #[test]
    fn test_maverick_rule_threshold() {
        let config = InsightConfig::default();

        // 20% off-contract
        let high = analyze(&[
            OrderBuilder::new("A", "Bolt").total(800.0).build(),
            OrderBuilder::new("B", "Bolt")
                .total(200.0)
                .off_contract()
                .build(),
        ]);
        let insight = MaverickSpendRule.evaluate(&high, &config).unwrap();
        assert_eq!(insight.priority, Priority::Critical);
        assert_eq!(
            insight.potential_saving,
            high.maverick_analysis.potential_savings
        );
        assert!(insight.description.starts_with("20.0% of spending"));

        // Exactly 15% does not fire
        let borderline = analyze(&[
            OrderBuilder::new("A", "Bolt").total(850.0).build(),
            OrderBuilder::new("B", "Bolt")
                .total(150.0)
                .off_contract()
                .build(),
        ]);
        assert!(MaverickSpendRule.evaluate(&borderline, &config).is_none());
    }
}
