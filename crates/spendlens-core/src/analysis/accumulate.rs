//! Accumulation phase: per-key running totals
//!
//! Nothing here computes a ratio. Percentages and averages are derived in
//! the finalize pass once every order has been folded in.

use std::collections::{BTreeSet, HashMap};

use crate::models::Order;

/// Key -> accumulator map that remembers first-appearance order
///
/// Iteration order is the order keys were first seen, so results built
/// from it (and stable sorts over them) do not depend on hashing.
#[derive(Debug)]
pub(crate) struct Grouped<A> {
    index: HashMap<String, usize>,
    entries: Vec<(String, A)>,
}

impl<A> Default for Grouped<A> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<A: Default> Grouped<A> {
    pub fn entry(&mut self, key: &str) -> &mut A {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(key.to_string(), idx);
                self.entries.push((key.to_string(), A::default()));
                idx
            }
        };
        &mut self.entries[idx].1
    }
}

impl<A> Grouped<A> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
        self.entries.iter().map(|(k, a)| (k.as_str(), a))
    }
}

/// Spend and order count for a category, region or off-contract vendor
#[derive(Debug, Default)]
pub(crate) struct SpendTotals {
    pub spend: f64,
    pub orders: usize,
}

impl SpendTotals {
    fn add(&mut self, amount: f64) {
        self.spend += amount;
        self.orders += 1;
    }
}

#[derive(Debug, Default)]
pub(crate) struct VendorTotals {
    pub spend: f64,
    pub orders: usize,
    pub delivery_score_sum: f64,
    pub on_contract_spend: f64,
    pub off_contract_spend: f64,
}

#[derive(Debug)]
pub(crate) struct ItemPrices {
    pub orders: usize,
    pub price_sum: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub total_quantity: f64,
    pub vendors: BTreeSet<String>,
    pub regions: BTreeSet<String>,
}

impl Default for ItemPrices {
    fn default() -> Self {
        Self {
            orders: 0,
            price_sum: 0.0,
            min_price: f64::INFINITY,
            max_price: f64::NEG_INFINITY,
            total_quantity: 0.0,
            vendors: BTreeSet::new(),
            regions: BTreeSet::new(),
        }
    }
}

/// Everything gathered in the single pass over the orders
#[derive(Debug, Default)]
pub(crate) struct Accumulated {
    pub total_spend: f64,
    pub total_orders: usize,
    pub vendors: Grouped<VendorTotals>,
    pub categories: Grouped<SpendTotals>,
    pub regions: Grouped<SpendTotals>,
    pub items: Grouped<ItemPrices>,
    pub off_contract_spend: f64,
    pub off_contract_orders: usize,
    pub off_contract_vendors: Grouped<SpendTotals>,
}

impl Accumulated {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut acc = Self::default();
        for order in orders {
            acc.add(order);
        }
        acc
    }

    fn add(&mut self, order: &Order) {
        let amount = order.total_amount;
        let off_contract = order.contract_type.is_off_contract();

        self.total_spend += amount;
        self.total_orders += 1;

        let vendor = self.vendors.entry(&order.vendor);
        vendor.spend += amount;
        vendor.orders += 1;
        vendor.delivery_score_sum += order.delivery_score;
        if off_contract {
            vendor.off_contract_spend += amount;
        } else {
            vendor.on_contract_spend += amount;
        }

        self.categories.entry(&order.category).add(amount);
        self.regions.entry(&order.region).add(amount);

        let item = self.items.entry(&order.item_name);
        item.orders += 1;
        item.price_sum += order.unit_price;
        item.min_price = item.min_price.min(order.unit_price);
        item.max_price = item.max_price.max(order.unit_price);
        item.total_quantity += order.quantity;
        item.vendors.insert(order.vendor.clone());
        item.regions.insert(order.region.clone());

        if off_contract {
            self.off_contract_spend += amount;
            self.off_contract_orders += 1;
            self.off_contract_vendors.entry(&order.vendor).add(amount);
        }
    }
}
