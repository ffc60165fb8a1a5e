//! Top regions by revenue
//!
//! One accumulator per region: total revenue and total items sold.
//! Consumes the store's region index bucket by bucket.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::effective_limit;
use crate::store::DataStore;

/// Result rows returned when the caller does not supply a limit.
pub const DEFAULT_LIMIT: usize = 30;

/// Sales summary for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub region: String,
    pub total_revenue: Decimal,
    pub total_item_sold: i64,
}

/// Rank regions by total revenue, descending.
///
/// Equal revenue orders by region name ascending.
pub fn top_regions(store: &DataStore, limit: Option<&str>) -> Vec<RegionStats> {
    let limit = effective_limit(limit, DEFAULT_LIMIT);

    let mut results: Vec<RegionStats> = store
        .regions()
        .map(|region| {
            let mut total_revenue = Decimal::ZERO;
            let mut total_item_sold = 0i64;
            for t in store.records_for_region(region) {
                total_revenue += t.total_price;
                total_item_sold += t.quantity;
            }
            RegionStats {
                region: region.to_string(),
                total_revenue,
                total_item_sold,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.total_revenue
            .cmp(&a.total_revenue)
            .then_with(|| a.region.cmp(&b.region))
    });
    results.truncate(limit);
    results
}
