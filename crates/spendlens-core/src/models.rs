//! Domain models for SpendLens

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Whether an order was placed under an approved vendor contract
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ContractType {
    /// Purchased under an approved contract
    #[default]
    Contract,
    /// Maverick purchase made outside any contract
    OffContract,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::OffContract => "off-contract",
        }
    }

    pub fn is_off_contract(&self) -> bool {
        matches!(self, Self::OffContract)
    }

    /// Lenient parse: anything not recognizably off-contract counts as contract.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "off-contract" | "off_contract" | "offcontract" | "off contract" | "maverick" => {
                Self::OffContract
            }
            _ => Self::Contract,
        }
    }
}

impl From<String> for ContractType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for ContractType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single purchase-order record
///
/// Orders are read-only inputs; the analysis engine only ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub vendor: String,
    pub category: String,
    pub region: String,
    #[serde(alias = "itemName")]
    pub item_name: String,
    pub quantity: f64,
    #[serde(alias = "unitPrice")]
    pub unit_price: f64,
    #[serde(alias = "totalAmount")]
    pub total_amount: f64,
    #[serde(alias = "orderDate")]
    pub order_date: NaiveDate,
    #[serde(
        default,
        alias = "contractType",
        deserialize_with = "deserialize_contract_type"
    )]
    pub contract_type: ContractType,
    /// Delivery rating on a 0-5 scale
    #[serde(
        default,
        alias = "deliveryScore",
        deserialize_with = "deserialize_delivery_score"
    )]
    pub delivery_score: f64,
}

/// Null or unrecognized contract types count as on-contract
fn deserialize_contract_type<'de, D>(deserializer: D) -> Result<ContractType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(ContractType::parse).unwrap_or_default())
}

/// Null delivery score is treated as unrated (0)
fn deserialize_delivery_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
