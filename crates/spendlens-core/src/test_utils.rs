//! Test utilities for spendlens-core
//!
//! Builders for purchase orders so tests only spell out the fields they
//! care about.

use chrono::NaiveDate;

use crate::models::{ContractType, Order};

/// Builder for test orders
///
/// Defaults: category "General", region "North America", quantity 1,
/// unit price 100, on-contract, delivery score 4.0, dated 2024-01-15.
/// Unless set explicitly, the total is quantity * unit price.
pub struct OrderBuilder {
    order: Order,
    total: Option<f64>,
}

impl OrderBuilder {
    pub fn new(vendor: &str, item_name: &str) -> Self {
        Self {
            order: Order {
                id: None,
                vendor: vendor.to_string(),
                category: "General".to_string(),
                region: "North America".to_string(),
                item_name: item_name.to_string(),
                quantity: 1.0,
                unit_price: 100.0,
                total_amount: 0.0,
                order_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                contract_type: ContractType::Contract,
                delivery_score: 4.0,
            },
            total: None,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.order.id = Some(id.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.order.category = category.to_string();
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.order.region = region.to_string();
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.order.quantity = quantity;
        self
    }

    pub fn unit_price(mut self, unit_price: f64) -> Self {
        self.order.unit_price = unit_price;
        self
    }

    pub fn total(mut self, total: f64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.order.order_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn off_contract(mut self) -> Self {
        self.order.contract_type = ContractType::OffContract;
        self
    }

    pub fn delivery_score(mut self, score: f64) -> Self {
        self.order.delivery_score = score;
        self
    }

    pub fn build(self) -> Order {
        let mut order = self.order;
        order.total_amount = self
            .total
            .unwrap_or(order.quantity * order.unit_price);
        order
    }
}

/// `count` on-contract vendors with identical spend, one order each
pub fn evenly_split_vendors(count: usize, spend_each: f64) -> Vec<Order> {
    (0..count)
        .map(|i| {
            OrderBuilder::new(&format!("Vendor {:03}", i), &format!("Part {:03}", i))
                .total(spend_each)
                .delivery_score(5.0)
                .build()
        })
        .collect()
}
