//! SpendLens Core Library
//!
//! Shared functionality for the SpendLens procurement analytics tool:
//! - Purchase-order model and CSV/JSON import
//! - Order filters and date-range presets
//! - Spend analysis engine (breakdowns, price variance, maverick spend)
//! - Rule-based cost-saving insight generator
//! - Heuristics configuration with file overrides

pub mod analysis;
pub mod config;
pub mod error;
pub mod filter;
pub mod import;
pub mod insights;
pub mod models;

/// Test utilities including order builders
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use analysis::{
    analyze, AnalysisResult, ItemPriceVariance, MaverickAnalysis, OffContractVendor,
    SpendAnalyzer, SpendBreakdown, SpendSummary, VendorPerformance,
};
pub use config::{AnalysisConfig, HeuristicsConfig, InsightConfig};
pub use error::{Error, Result};
pub use filter::{DatePreset, FilterOptions, OrderFilter};
pub use import::{load_orders, parse_orders_csv, parse_orders_json};
pub use insights::{
    generate_insights, Insight, InsightGenerator, InsightKind, InsightRule, InsightStatus,
    Priority,
};
pub use models::{ContractType, Order};
