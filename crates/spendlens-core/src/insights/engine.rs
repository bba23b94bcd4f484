//! Insight Generator - runs rules over an analysis result

use crate::analysis::AnalysisResult;
use crate::config::InsightConfig;

use super::compliance::MaverickSpendRule;
use super::pricing::{PriceStandardizationRule, RegionalOptimizationRule, VolumeDiscountRule};
use super::program::{AutomationRule, StrategicSourcingRule};
use super::types::{Insight, InsightKind};
use super::vendor::{VendorConsolidationRule, VendorPerformanceRule};

/// Generate insights with the default rules and thresholds
pub fn generate_insights(result: &AnalysisResult) -> Vec<Insight> {
    InsightGenerator::new().generate(result)
}

/// A single heuristic that may turn an analysis into a recommendation
pub trait InsightRule: Send + Sync {
    /// Which insight this rule produces
    fn id(&self) -> InsightKind;

    /// Human-readable name
    fn name(&self) -> &'static str {
        self.id().title()
    }

    /// Return an insight if the rule's trigger condition holds
    fn evaluate(&self, result: &AnalysisResult, config: &InsightConfig) -> Option<Insight>;
}

/// Evaluates registered rules in order and caps the output
pub struct InsightGenerator {
    rules: Vec<Box<dyn InsightRule>>,
    config: InsightConfig,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightGenerator {
    /// Create a generator with the built-in rules and default thresholds
    pub fn new() -> Self {
        Self::with_config(InsightConfig::default())
    }

    /// Create a generator with the built-in rules and custom thresholds
    pub fn with_config(config: InsightConfig) -> Self {
        let mut generator = Self {
            rules: vec![],
            config,
        };

        // Registration order is emission order
        generator.register(Box::new(VendorConsolidationRule));
        generator.register(Box::new(PriceStandardizationRule));
        generator.register(Box::new(MaverickSpendRule));
        generator.register(Box::new(VolumeDiscountRule));
        generator.register(Box::new(RegionalOptimizationRule));
        generator.register(Box::new(VendorPerformanceRule));
        generator.register(Box::new(AutomationRule));
        generator.register(Box::new(StrategicSourcingRule));

        generator
    }

    /// Append a rule after the existing ones
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Run every rule in registration order
    ///
    /// Output keeps rule order and is truncated to `max_insights`; it is not
    /// re-ranked by priority or savings.
    pub fn generate(&self, result: &AnalysisResult) -> Vec<Insight> {
        let mut insights = Vec::new();

        for rule in &self.rules {
            let insight = rule.evaluate(result, &self.config);
            tracing::debug!(
                rule = rule.id().as_str(),
                name = rule.name(),
                fired = insight.is_some(),
                "Insight rule evaluated"
            );
            insights.extend(insight);
        }

        if insights.len() > self.config.max_insights {
            tracing::debug!(
                generated = insights.len(),
                max = self.config.max_insights,
                "Truncating insights"
            );
            insights.truncate(self.config.max_insights);
        }

        insights
    }

    /// Registered rule ids in evaluation order
    pub fn rule_ids(&self) -> Vec<InsightKind> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }
}
