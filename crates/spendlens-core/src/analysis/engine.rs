//! Spend analysis engine - finalize pass and public entry points

use std::cmp::Ordering;

use crate::config::AnalysisConfig;
use crate::models::Order;

use super::accumulate::{Accumulated, Grouped, ItemPrices, SpendTotals, VendorTotals};
use super::types::{
    percent_of, round1, AnalysisResult, ItemPriceVariance, MaverickAnalysis, OffContractVendor,
    SpendBreakdown, SpendSummary, VendorPerformance,
};

/// Analyze orders with the default heuristics
pub fn analyze(orders: &[Order]) -> AnalysisResult {
    SpendAnalyzer::new().analyze(orders)
}

/// Turns an order list into an [`AnalysisResult`]
///
/// The analyzer holds only configuration, so one instance can be shared
/// across threads and reused for any number of calls.
#[derive(Debug, Clone, Default)]
pub struct SpendAnalyzer {
    config: AnalysisConfig,
}

impl SpendAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, orders: &[Order]) -> AnalysisResult {
        let acc = Accumulated::from_orders(orders);
        let total_spend = acc.total_spend;

        let spend_by_vendor = breakdown(&acc.vendors, total_spend, |v| (v.spend, v.orders));
        let spend_by_category = breakdown(&acc.categories, total_spend, totals);
        let spend_by_region = breakdown(&acc.regions, total_spend, totals);
        let price_variance = price_variance(&acc.items);
        let top_vendors = self.top_vendors(&acc.vendors);
        let maverick_analysis = self.maverick_analysis(&acc);

        let potential_savings =
            maverick_analysis.potential_savings + self.variance_savings(&price_variance, total_spend);

        let summary = SpendSummary {
            total_spend,
            total_orders: acc.total_orders,
            unique_vendors: acc.vendors.len(),
            maverick_spend: maverick_analysis.off_contract_spend,
            maverick_percentage: maverick_analysis.off_contract_percentage,
            potential_savings,
            avg_order_value: if acc.total_orders == 0 {
                0.0
            } else {
                total_spend / acc.total_orders as f64
            },
        };

        tracing::debug!(
            orders = summary.total_orders,
            vendors = summary.unique_vendors,
            variance_items = price_variance.len(),
            total_spend = summary.total_spend,
            "Spend analysis complete"
        );

        AnalysisResult {
            summary,
            spend_by_vendor,
            spend_by_category,
            spend_by_region,
            price_variance,
            top_vendors,
            maverick_analysis,
        }
    }

    /// Composite 0-100 score blending delivery, contract compliance and volume
    pub fn performance_score(
        &self,
        avg_delivery_score: f64,
        compliance_pct: f64,
        orders: usize,
    ) -> f64 {
        let c = &self.config;
        let delivery = avg_delivery_score / c.max_delivery_score * 100.0;
        let volume = (orders as f64 / f64::from(c.volume_saturation_orders) * 100.0).min(100.0);

        round1(
            delivery * c.delivery_weight
                + compliance_pct * c.compliance_weight
                + volume * c.volume_weight,
        )
    }

    fn top_vendors(&self, vendors: &Grouped<VendorTotals>) -> Vec<VendorPerformance> {
        let mut ranked: Vec<VendorPerformance> = vendors
            .iter()
            .map(|(vendor, v)| {
                let avg_delivery = if v.orders == 0 {
                    0.0
                } else {
                    v.delivery_score_sum / v.orders as f64
                };
                let off_contract_pct = percent_of(v.off_contract_spend, v.spend);
                // A vendor with no spend has nothing off-contract
                let compliance_pct = if v.spend == 0.0 {
                    100.0
                } else {
                    v.on_contract_spend / v.spend * 100.0
                };

                VendorPerformance {
                    vendor: vendor.to_string(),
                    spend: v.spend,
                    orders: v.orders,
                    avg_delivery_score: round1(avg_delivery),
                    off_contract_percentage: round1(off_contract_pct),
                    performance_score: self.performance_score(avg_delivery, compliance_pct, v.orders),
                }
            })
            .collect();

        ranked.sort_by(|a, b| by_spend_desc(a.spend, b.spend));
        ranked.truncate(self.config.top_vendor_limit);
        ranked
    }

    fn maverick_analysis(&self, acc: &Accumulated) -> MaverickAnalysis {
        let mut top: Vec<OffContractVendor> = acc
            .off_contract_vendors
            .iter()
            .map(|(vendor, t)| OffContractVendor {
                vendor: vendor.to_string(),
                off_contract_spend: t.spend,
                off_contract_orders: t.orders,
            })
            .collect();
        top.sort_by(|a, b| by_spend_desc(a.off_contract_spend, b.off_contract_spend));
        top.truncate(self.config.top_off_contract_vendor_limit);

        MaverickAnalysis {
            off_contract_spend: acc.off_contract_spend,
            off_contract_percentage: percent_of(acc.off_contract_spend, acc.total_spend),
            off_contract_orders: acc.off_contract_orders,
            potential_savings: acc.off_contract_spend * self.config.maverick_recovery_rate,
            top_off_contract_vendors: top,
        }
    }

    /// Rough recoverable amount from price spread on the highest-variance items
    ///
    /// Per-item spend is not tracked here, so each item is assumed to account
    /// for a fixed share of total spend. This is an approximation and can
    /// overlap with the maverick estimate.
    fn variance_savings(&self, price_variance: &[ItemPriceVariance], total_spend: f64) -> f64 {
        let c = &self.config;
        price_variance
            .iter()
            .take(c.variance_savings_item_limit)
            .map(|_| total_spend * c.item_spend_share * c.variance_savings_rate)
            .sum()
    }
}

fn totals(t: &SpendTotals) -> (f64, usize) {
    (t.spend, t.orders)
}

fn by_spend_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn breakdown<A>(
    grouped: &Grouped<A>,
    total_spend: f64,
    extract: impl Fn(&A) -> (f64, usize),
) -> Vec<SpendBreakdown> {
    let mut rows: Vec<SpendBreakdown> = grouped
        .iter()
        .map(|(key, acc)| {
            let (spend, orders) = extract(acc);
            SpendBreakdown {
                key: key.to_string(),
                spend,
                percentage: percent_of(spend, total_spend),
                orders,
            }
        })
        .collect();

    // sort_by is stable: equal spend keeps first-appearance order
    rows.sort_by(|a, b| by_spend_desc(a.spend, b.spend));
    rows
}

fn price_variance(items: &Grouped<ItemPrices>) -> Vec<ItemPriceVariance> {
    let mut rows: Vec<ItemPriceVariance> = items
        .iter()
        .filter(|(_, p)| p.orders >= 2)
        .map(|(item, p)| {
            let avg_price = p.price_sum / p.orders as f64;
            let variance = if avg_price == 0.0 {
                0.0
            } else {
                (p.max_price - p.min_price) / avg_price * 100.0
            };

            ItemPriceVariance {
                item: item.to_string(),
                avg_price,
                min_price: p.min_price,
                max_price: p.max_price,
                variance,
                total_quantity: p.total_quantity,
                vendors: p.vendors.clone(),
                regions: p.regions.clone(),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.variance.partial_cmp(&a.variance).unwrap_or(Ordering::Equal));
    rows
}
