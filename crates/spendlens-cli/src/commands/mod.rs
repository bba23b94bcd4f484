//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (order loading, filter resolution, heuristics)
//! - `analyze` - Spend analysis tables
//! - `insights` - Insight list and combined JSON report
//! - `options` - Filter values and effective configuration

pub mod analyze;
pub mod core;
pub mod insights;
pub mod options;

// Re-export command functions for main.rs
pub use analyze::*;
pub use core::*;
pub use insights::*;
pub use options::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
