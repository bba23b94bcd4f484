//! Insight Generator - Cost-Saving Recommendations
//!
//! Turns an [`AnalysisResult`](crate::analysis::AnalysisResult) into a short
//! list of recommendations. Each rule has a fixed trigger condition and a
//! heuristic savings estimate; rules run in a fixed order and the output is
//! capped (8 by default) without re-ranking.
//!
//! ## Built-in Rules
//!
//! 1. **Vendor consolidation** - more than 50 vendors (High)
//! 2. **Price standardization** - any price variance data (High)
//! 3. **Maverick spend** - more than 15% off-contract (Critical)
//! 4. **Volume discounts** - always, saving from categories above 10% of spend (Medium)
//! 5. **Regional optimization** - regional share spread above 20 points (Medium)
//! 6. **Vendor performance** - top vendors scoring below 70 (Medium)
//! 7. **Automation** - always (Medium)
//! 8. **Strategic sourcing** - total spend above 5,000,000 (High)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spendlens_core::{analyze, generate_insights};
//!
//! let result = analyze(&orders);
//! for insight in generate_insights(&result) {
//!     println!("{}: {:.0}", insight.title, insight.potential_saving);
//! }
//! ```

pub mod compliance;
pub mod engine;
pub mod pricing;
pub mod program;
pub mod types;
pub mod vendor;

pub use engine::{generate_insights, InsightGenerator, InsightRule};
pub use types::{Insight, InsightKind, InsightStatus, Priority};
