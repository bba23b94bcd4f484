//! Spend Analysis Engine
//!
//! Turns a list of purchase orders into spend metrics:
//!
//! - **Summary** - total spend, order and vendor counts, average order value
//! - **Breakdowns** - spend by vendor, category and region with share of total
//! - **Price variance** - unit price spread for items bought more than once
//! - **Top vendors** - highest-spend vendors with a composite performance score
//! - **Maverick analysis** - off-contract spend and its estimated recovery
//!
//! Analysis runs in two phases: a single accumulation pass over the orders
//! into typed per-key totals, then a finalize pass that derives ratios.
//! Every ratio with a zero denominator resolves to 0.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spendlens_core::analysis::analyze;
//!
//! let result = analyze(&orders);
//! println!("{:.2}", result.summary.total_spend);
//! ```

mod accumulate;
pub mod engine;
pub mod types;

pub use engine::{analyze, SpendAnalyzer};
pub use types::{
    AnalysisResult, ItemPriceVariance, MaverickAnalysis, OffContractVendor, SpendBreakdown,
    SpendSummary, VendorPerformance,
};
