//! Order filters
//!
//! Callers narrow the order set before analysis: by vendor, category,
//! region and an inclusive date range. Date ranges can also be derived from
//! the dashboard's relative period presets.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Order;

/// Builder for order filters
///
/// Unset criteria match everything. String criteria use exact equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
    pub vendor: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl OrderFilter {
    /// Create a new filter builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set vendor filter
    pub fn vendor(mut self, vendor: Option<&str>) -> Self {
        self.vendor = vendor.map(str::to_string);
        self
    }

    /// Set category filter
    pub fn category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(str::to_string);
        self
    }

    /// Set region filter
    pub fn region(mut self, region: Option<&str>) -> Self {
        self.region = region.map(str::to_string);
        self
    }

    /// Set inclusive date bounds (either side may be open)
    pub fn date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Set the date bounds from a relative preset
    pub fn preset(self, preset: DatePreset, today: NaiveDate) -> Self {
        let (start, end) = preset.range(today);
        self.date_range(start, Some(end))
    }

    /// True if no criteria are set
    pub fn is_empty(&self) -> bool {
        self.vendor.is_none()
            && self.category.is_none()
            && self.region.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    pub fn matches(&self, order: &Order) -> bool {
        fn eq(want: &Option<String>, have: &str) -> bool {
            want.as_deref().map_or(true, |w| w == have)
        }

        eq(&self.vendor, &order.vendor)
            && eq(&self.category, &order.category)
            && eq(&self.region, &order.region)
            && self.start_date.map_or(true, |d| order.order_date >= d)
            && self.end_date.map_or(true, |d| order.order_date <= d)
    }

    /// Matching orders, in input order
    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        let filtered: Vec<Order> = orders
            .iter()
            .filter(|o| self.matches(o))
            .cloned()
            .collect();

        tracing::debug!(
            total = orders.len(),
            matched = filtered.len(),
            "Applied order filter"
        );
        filtered
    }
}

/// Relative reporting periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatePreset {
    Last7Days,
    Last30Days,
    Last90Days,
    /// Trailing 365 days
    LastYear,
    /// No lower bound
    AllTime,
}

impl DatePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Last7Days => "last-7-days",
            Self::Last30Days => "last-30-days",
            Self::Last90Days => "last-90-days",
            Self::LastYear => "last-year",
            Self::AllTime => "all-time",
        }
    }

    pub fn all() -> &'static [DatePreset] {
        &[
            Self::Last7Days,
            Self::Last30Days,
            Self::Last90Days,
            Self::LastYear,
            Self::AllTime,
        ]
    }

    /// Resolve to (start, end) relative to `today`, both inclusive
    pub fn range(&self, today: NaiveDate) -> (Option<NaiveDate>, NaiveDate) {
        let days = match self {
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Last90Days => 90,
            Self::LastYear => 365,
            Self::AllTime => return (None, today),
        };
        (Some(today - Duration::days(days)), today)
    }
}

impl fmt::Display for DatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last-7-days" => Ok(Self::Last7Days),
            "last-30-days" => Ok(Self::Last30Days),
            "last-90-days" => Ok(Self::Last90Days),
            "last-year" => Ok(Self::LastYear),
            "all-time" | "all" => Ok(Self::AllTime),
            _ => Err(format!(
                "Unknown period: {}. Available: last-7-days, last-30-days, last-90-days, last-year, all-time",
                s
            )),
        }
    }
}

/// Distinct values available for each filter field, sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub vendors: Vec<String>,
    pub categories: Vec<String>,
    pub regions: Vec<String>,
}

impl FilterOptions {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut vendors = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut regions = BTreeSet::new();

        for order in orders {
            vendors.insert(order.vendor.as_str());
            categories.insert(order.category.as_str());
            regions.insert(order.region.as_str());
        }

        Self {
            vendors: vendors.into_iter().map(str::to_string).collect(),
            categories: categories.into_iter().map(str::to_string).collect(),
            regions: regions.into_iter().map(str::to_string).collect(),
        }
    }
}
