//! Heuristics configuration
//!
//! Every policy constant used by the analysis engine and the insight
//! generator lives here. The values are fixed design parameters rather than
//! anything derived from data, so they are exposed for tuning.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a layered resolution:
//! 1. Explicit path passed by the caller (if it exists)
//! 2. Override in data dir (~/.local/share/spendlens/config/heuristics.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Keys missing from a file keep their built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/heuristics.toml");

// ========== Analysis Constants ==========

/// Share of off-contract spend assumed recoverable
pub const MAVERICK_RECOVERY_RATE: f64 = 0.15;
pub const DELIVERY_WEIGHT: f64 = 0.4;
pub const COMPLIANCE_WEIGHT: f64 = 0.4;
pub const VOLUME_WEIGHT: f64 = 0.2;
pub const MAX_DELIVERY_SCORE: f64 = 5.0;
/// Order count at which the volume component of the performance score saturates
pub const VOLUME_SATURATION_ORDERS: u32 = 50;
pub const TOP_VENDOR_LIMIT: usize = 10;
pub const TOP_OFF_CONTRACT_VENDOR_LIMIT: usize = 5;
pub const VARIANCE_SAVINGS_ITEM_LIMIT: usize = 10;
/// Proxy for a single item's share of total spend (per-item totals are not tracked)
pub const ITEM_SPEND_SHARE: f64 = 0.10;
pub const VARIANCE_SAVINGS_RATE: f64 = 0.10;

// ========== Insight Constants ==========

pub const MAX_INSIGHTS: usize = 8;
pub const CONSOLIDATION_MIN_VENDORS: usize = 50;
pub const SMALL_VENDOR_SHARE_PCT: f64 = 2.0;
pub const CONSOLIDATION_SAVINGS_RATE: f64 = 0.12;
pub const HIGH_VARIANCE_PCT: f64 = 25.0;
pub const VARIANCE_CAPTURE_RATE: f64 = 0.30;
pub const MAVERICK_ALERT_PCT: f64 = 15.0;
pub const LARGE_CATEGORY_SHARE_PCT: f64 = 10.0;
pub const VOLUME_DISCOUNT_RATE: f64 = 0.08;
pub const REGIONAL_SPREAD_PCT: f64 = 20.0;
pub const REGIONAL_SAVINGS_RATE: f64 = 0.06;
pub const LOW_PERFORMANCE_SCORE: f64 = 70.0;
pub const PERFORMANCE_SAVINGS_RATE: f64 = 0.15;
pub const AUTOMATION_SAVINGS_RATE: f64 = 0.04;
pub const STRATEGIC_SOURCING_MIN_SPEND: f64 = 5_000_000.0;
pub const STRATEGIC_SOURCING_RATE: f64 = 0.12;

/// Parameters for the spend analysis engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub maverick_recovery_rate: f64,
    pub delivery_weight: f64,
    pub compliance_weight: f64,
    pub volume_weight: f64,
    pub max_delivery_score: f64,
    pub volume_saturation_orders: u32,
    pub top_vendor_limit: usize,
    pub top_off_contract_vendor_limit: usize,
    pub variance_savings_item_limit: usize,
    pub item_spend_share: f64,
    pub variance_savings_rate: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            maverick_recovery_rate: MAVERICK_RECOVERY_RATE,
            delivery_weight: DELIVERY_WEIGHT,
            compliance_weight: COMPLIANCE_WEIGHT,
            volume_weight: VOLUME_WEIGHT,
            max_delivery_score: MAX_DELIVERY_SCORE,
            volume_saturation_orders: VOLUME_SATURATION_ORDERS,
            top_vendor_limit: TOP_VENDOR_LIMIT,
            top_off_contract_vendor_limit: TOP_OFF_CONTRACT_VENDOR_LIMIT,
            variance_savings_item_limit: VARIANCE_SAVINGS_ITEM_LIMIT,
            item_spend_share: ITEM_SPEND_SHARE,
            variance_savings_rate: VARIANCE_SAVINGS_RATE,
        }
    }
}

/// Thresholds and savings rates for the insight rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub max_insights: usize,
    pub consolidation_min_vendors: usize,
    pub small_vendor_share_pct: f64,
    pub consolidation_savings_rate: f64,
    pub high_variance_pct: f64,
    /// Same proxy as [`AnalysisConfig::item_spend_share`]
    pub item_spend_share: f64,
    pub variance_capture_rate: f64,
    pub maverick_alert_pct: f64,
    pub large_category_share_pct: f64,
    pub volume_discount_rate: f64,
    pub regional_spread_pct: f64,
    pub regional_savings_rate: f64,
    pub low_performance_score: f64,
    pub performance_savings_rate: f64,
    pub automation_savings_rate: f64,
    pub strategic_sourcing_min_spend: f64,
    pub strategic_sourcing_rate: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            max_insights: MAX_INSIGHTS,
            consolidation_min_vendors: CONSOLIDATION_MIN_VENDORS,
            small_vendor_share_pct: SMALL_VENDOR_SHARE_PCT,
            consolidation_savings_rate: CONSOLIDATION_SAVINGS_RATE,
            high_variance_pct: HIGH_VARIANCE_PCT,
            item_spend_share: ITEM_SPEND_SHARE,
            variance_capture_rate: VARIANCE_CAPTURE_RATE,
            maverick_alert_pct: MAVERICK_ALERT_PCT,
            large_category_share_pct: LARGE_CATEGORY_SHARE_PCT,
            volume_discount_rate: VOLUME_DISCOUNT_RATE,
            regional_spread_pct: REGIONAL_SPREAD_PCT,
            regional_savings_rate: REGIONAL_SAVINGS_RATE,
            low_performance_score: LOW_PERFORMANCE_SCORE,
            performance_savings_rate: PERFORMANCE_SAVINGS_RATE,
            automation_savings_rate: AUTOMATION_SAVINGS_RATE,
            strategic_sourcing_min_spend: STRATEGIC_SOURCING_MIN_SPEND,
            strategic_sourcing_rate: STRATEGIC_SOURCING_RATE,
        }
    }
}

/// Complete heuristics configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicsConfig {
    pub analysis: AnalysisConfig,
    pub insights: InsightConfig,
}

impl HeuristicsConfig {
    /// Load using the default resolution (data dir override, then embedded)
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load with an explicit override path, falling back to the default resolution
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid heuristics TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to render heuristics: {}", e)))
    }

    /// Reject settings that would make the scoring formulas meaningless
    pub fn validate(&self) -> Result<()> {
        let a = &self.analysis;
        let rates = [
            ("analysis.maverick_recovery_rate", a.maverick_recovery_rate),
            ("analysis.delivery_weight", a.delivery_weight),
            ("analysis.compliance_weight", a.compliance_weight),
            ("analysis.volume_weight", a.volume_weight),
            ("analysis.item_spend_share", a.item_spend_share),
            ("analysis.variance_savings_rate", a.variance_savings_rate),
            ("insights.consolidation_savings_rate", self.insights.consolidation_savings_rate),
            ("insights.item_spend_share", self.insights.item_spend_share),
            ("insights.variance_capture_rate", self.insights.variance_capture_rate),
            ("insights.volume_discount_rate", self.insights.volume_discount_rate),
            ("insights.regional_savings_rate", self.insights.regional_savings_rate),
            ("insights.performance_savings_rate", self.insights.performance_savings_rate),
            ("insights.automation_savings_rate", self.insights.automation_savings_rate),
            ("insights.strategic_sourcing_rate", self.insights.strategic_sourcing_rate),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let weight_sum = a.delivery_weight + a.compliance_weight + a.volume_weight;
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(Error::Config(format!(
                "performance weights must sum to 1.0, got {}",
                weight_sum
            )));
        }

        if !a.max_delivery_score.is_finite() || a.max_delivery_score <= 0.0 {
            return Err(Error::Config(
                "analysis.max_delivery_score must be a positive number".into(),
            ));
        }
        if a.volume_saturation_orders == 0 {
            return Err(Error::Config(
                "analysis.volume_saturation_orders must be positive".into(),
            ));
        }

        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| {
        d.join("spendlens")
            .join("config")
            .join("heuristics.toml")
    })
}

/// Load configuration (explicit path, then data dir override, then embedded default)
fn load_config(override_path: Option<&Path>) -> Result<HeuristicsConfig> {
    if let Some(path) = override_path {
        if path.exists() {
            return read_config(path);
        }
        tracing::warn!(
            path = %path.display(),
            "Heuristics config not found, using defaults"
        );
    }

    if let Some(default_path) = default_config_path() {
        if default_path.exists() {
            return read_config(&default_path);
        }
    }

    HeuristicsConfig::from_toml(DEFAULT_CONFIG)
}

fn read_config(path: &Path) -> Result<HeuristicsConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "Loaded heuristics config");
    HeuristicsConfig::from_toml(&content)
}
