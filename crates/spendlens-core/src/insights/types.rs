//! Core types for the Insight Generator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The cost-saving recommendations the generator knows how to make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightKind {
    /// Many small vendors that could be consolidated
    VendorConsolidation,
    /// Items bought at widely different unit prices
    PriceStandardization,
    /// High share of off-contract spend
    MaverickSpend,
    /// Large categories with leverage for volume pricing
    VolumeDiscounts,
    /// Uneven spend across regions
    RegionalOptimization,
    /// Key vendors scoring poorly
    VendorPerformance,
    /// E-procurement and approval workflow automation
    AutomationOpportunity,
    /// Spend large enough for category management
    StrategicSourcing,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VendorConsolidation => "vendor-consolidation",
            Self::PriceStandardization => "price-standardization",
            Self::MaverickSpend => "maverick-spend",
            Self::VolumeDiscounts => "volume-discounts",
            Self::RegionalOptimization => "regional-optimization",
            Self::VendorPerformance => "vendor-performance",
            Self::AutomationOpportunity => "automation-opportunity",
            Self::StrategicSourcing => "strategic-sourcing",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::VendorConsolidation => "Vendor Consolidation Opportunity",
            Self::PriceStandardization => "Price Standardization Initiative",
            Self::MaverickSpend => "Maverick Spend Reduction",
            Self::VolumeDiscounts => "Volume Discount Negotiation",
            Self::RegionalOptimization => "Regional Pricing Optimization",
            Self::VendorPerformance => "Vendor Performance Improvement",
            Self::AutomationOpportunity => "Procurement Process Automation",
            Self::StrategicSourcing => "Strategic Sourcing Initiative",
        }
    }

    /// Business area the recommendation belongs to
    pub fn category(&self) -> &'static str {
        match self {
            Self::VendorConsolidation | Self::VendorPerformance => "Vendor Management",
            Self::PriceStandardization => "Price Optimization",
            Self::MaverickSpend => "Compliance",
            Self::VolumeDiscounts => "Contract Negotiation",
            Self::RegionalOptimization => "Global Sourcing",
            Self::AutomationOpportunity => "Process Improvement",
            Self::StrategicSourcing => "Strategic Sourcing",
        }
    }

    pub fn implementation_time(&self) -> &'static str {
        match self {
            Self::VendorConsolidation | Self::VendorPerformance => "3-6 months",
            Self::PriceStandardization => "2-4 months",
            Self::MaverickSpend => "1-3 months",
            Self::VolumeDiscounts => "4-8 months",
            Self::RegionalOptimization | Self::AutomationOpportunity => "6-12 months",
            Self::StrategicSourcing => "8-18 months",
        }
    }

    pub fn impact(&self) -> &'static str {
        match self {
            Self::VendorConsolidation => {
                "Reduces vendor management overhead and improves pricing power"
            }
            Self::PriceStandardization => "Standardizes pricing and reduces procurement costs",
            Self::MaverickSpend => "Improves contract compliance and reduces rogue spending",
            Self::VolumeDiscounts => "Leverages spending volume for better pricing terms",
            Self::RegionalOptimization => {
                "Harmonizes pricing across regions and improves cost predictability"
            }
            Self::VendorPerformance => {
                "Improves service quality and reduces operational disruptions"
            }
            Self::AutomationOpportunity => {
                "Reduces manual processing costs and improves process efficiency"
            }
            Self::StrategicSourcing => {
                "Transforms procurement from tactical to strategic value driver"
            }
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vendor-consolidation" => Ok(Self::VendorConsolidation),
            "price-standardization" => Ok(Self::PriceStandardization),
            "maverick-spend" => Ok(Self::MaverickSpend),
            "volume-discounts" => Ok(Self::VolumeDiscounts),
            "regional-optimization" => Ok(Self::RegionalOptimization),
            "vendor-performance" => Ok(Self::VendorPerformance),
            "automation-opportunity" => Ok(Self::AutomationOpportunity),
            "strategic-sourcing" => Ok(Self::StrategicSourcing),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// How urgently an insight should be acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Priority::Critical),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// Lifecycle of a recommendation once handed to a downstream tracker
///
/// The generator itself only ever produces `Identified`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightStatus {
    #[default]
    Identified,
    InProgress,
    Implemented,
}

impl InsightStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightStatus::Identified => "Identified",
            InsightStatus::InProgress => "InProgress",
            InsightStatus::Implemented => "Implemented",
        }
    }
}

impl fmt::Display for InsightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cost-saving recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: InsightKind,
    pub title: String,
    pub description: String,
    pub potential_saving: f64,
    pub priority: Priority,
    pub category: String,
    pub implementation_time: String,
    pub impact: String,
    pub status: InsightStatus,
}

impl Insight {
    /// Create an insight, filling the fixed fields from its kind
    pub fn new(
        kind: InsightKind,
        priority: Priority,
        potential_saving: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: kind,
            title: kind.title().to_string(),
            description: description.into(),
            potential_saving,
            priority,
            category: kind.category().to_string(),
            implementation_time: kind.implementation_time().to_string(),
            impact: kind.impact().to_string(),
            status: InsightStatus::Identified,
        }
    }
}
