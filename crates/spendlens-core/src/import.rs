//! Order import from CSV and JSON exports

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ContractType, Order};

/// Load orders from a file, choosing the parser by extension
///
/// `.json` files are parsed as JSON; everything else is treated as CSV.
pub fn load_orders(path: &Path) -> Result<Vec<Order>> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let reader = BufReader::new(File::open(path)?);
    let orders = if is_json {
        parse_orders_json(reader)?
    } else {
        parse_orders_csv(reader)?
    };

    debug!(path = %path.display(), count = orders.len(), "Loaded orders");
    Ok(orders)
}

/// Parse a JSON array of orders, or an object with an `orders` array
///
/// Orders are decoded one at a time so a bad record is reported by its
/// 1-based position.
pub fn parse_orders_json<R: Read>(reader: R) -> Result<Vec<Order>> {
    let document: Value = serde_json::from_reader(reader)?;
    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove("orders") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(Error::Import(
                    "Expected an \"orders\" array in JSON object".into(),
                ))
            }
        },
        _ => {
            return Err(Error::Import(
                "Expected a JSON array of orders or an object with an \"orders\" array".into(),
            ))
        }
    };

    let mut orders = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let order = Order::deserialize(record)
            .map_err(|e| Error::Import(format!("Order {}: {}", index + 1, e)))?;
        orders.push(order);
    }

    debug!(count = orders.len(), "Parsed orders from JSON");
    Ok(orders)
}

/// Column positions resolved from the header row
struct Columns {
    id: Option<usize>,
    vendor: usize,
    category: usize,
    region: usize,
    item_name: usize,
    quantity: usize,
    unit_price: usize,
    total_amount: usize,
    order_date: usize,
    contract_type: Option<usize>,
    delivery_score: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |name: &str| {
            let key = normalize_header(name);
            normalized.iter().position(|h| *h == key)
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| Error::Import(format!("Missing required column: {}", name)))
        };

        Ok(Self {
            id: find("id"),
            vendor: require("vendor")?,
            category: require("category")?,
            region: require("region")?,
            item_name: require("item_name")?,
            quantity: require("quantity")?,
            unit_price: require("unit_price")?,
            total_amount: require("total_amount")?,
            order_date: require("order_date")?,
            contract_type: find("contract_type"),
            delivery_score: find("delivery_score"),
        })
    }
}

/// `Item Name`, `item_name` and `itemName` all normalize to `itemname`
fn normalize_header(header: &str) -> String {
    header
        .trim()
        .chars()
        .filter(|c| !matches!(c, '_' | ' ' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse order rows from CSV with a header row
pub fn parse_orders_csv<R: Read>(reader: R) -> Result<Vec<Order>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut orders = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let row = Row {
            record: &record,
            number: index + 1,
        };

        let contract_type = match row.optional(columns.contract_type) {
            Some(value) => ContractType::parse(value),
            None => ContractType::default(),
        };
        let delivery_score = match row.optional(columns.delivery_score) {
            Some(value) => row.amount(value, "delivery_score")?,
            None => 0.0,
        };

        orders.push(Order {
            id: row.optional(columns.id).map(str::to_string),
            vendor: row.text(columns.vendor, "vendor")?.to_string(),
            category: row.text(columns.category, "category")?.to_string(),
            region: row.text(columns.region, "region")?.to_string(),
            item_name: row.text(columns.item_name, "item_name")?.to_string(),
            quantity: row.number(columns.quantity, "quantity")?,
            unit_price: row.number(columns.unit_price, "unit_price")?,
            total_amount: row.number(columns.total_amount, "total_amount")?,
            order_date: row.date(columns.order_date, "order_date")?,
            contract_type,
            delivery_score,
        });
    }

    debug!(count = orders.len(), "Parsed orders from CSV");
    Ok(orders)
}

/// One data row plus its 1-based position (header excluded)
struct Row<'a> {
    record: &'a StringRecord,
    number: usize,
}

impl<'a> Row<'a> {
    fn error(&self, column: &str, detail: impl std::fmt::Display) -> Error {
        Error::Import(format!("Row {}, column {}: {}", self.number, column, detail))
    }

    fn text(&self, index: usize, column: &str) -> Result<&'a str> {
        self.record
            .get(index)
            .ok_or_else(|| self.error(column, "missing value"))
    }

    /// Present, non-empty cell or None
    fn optional(&self, index: Option<usize>) -> Option<&'a str> {
        index
            .and_then(|i| self.record.get(i))
            .filter(|value| !value.is_empty())
    }

    fn number(&self, index: usize, column: &str) -> Result<f64> {
        let value = self.text(index, column)?;
        self.amount(value, column)
    }

    fn amount(&self, value: &str, column: &str) -> Result<f64> {
        parse_amount(value).map_err(|_| self.error(column, format!("invalid number '{}'", value)))
    }

    fn date(&self, index: usize, column: &str) -> Result<NaiveDate> {
        let value = self.text(index, column)?;
        parse_date(value).map_err(|_| self.error(column, format!("invalid date '{}'", value)))
    }
}

/// Parse a date in any of the common export formats
fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%Y", // 01/15/2024
        "%m/%d/%y", // 01/15/24
        "%m-%d-%Y", // 01-15-2024
        "%d/%m/%Y", // 15/01/2024 (European)
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    // Timestamps from JS exports, e.g. 2024-01-15T09:30:00.000Z
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Ok(timestamp.date_naive());
    }

    Err(Error::Import(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    let value = cleaned
        .parse::<f64>()
        .map_err(|_| Error::Import(format!("Unable to parse amount: {}", s)))?;
    if !value.is_finite() {
        return Err(Error::Import(format!("Unable to parse amount: {}", s)));
    }
    Ok(value)
}
