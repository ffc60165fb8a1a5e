//! Top products by quantity sold
//!
//! Groups the full record sequence by product display name. Quantity sold
//! accumulates across records; the stock figure is a snapshot taken from
//! the first record seen for that name, not a sum.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::effective_limit;
use crate::store::DataStore;

/// Result rows returned when the caller does not supply a limit.
pub const DEFAULT_LIMIT: usize = 20;

/// Sales summary for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_name: String,
    pub total_quantity_sold: i64,
    pub stock_quantity: i64,
}

/// Rank products by total quantity sold, descending.
///
/// Grouped by display name, not product id: distinct ids sharing a name
/// roll up together. Equal quantities order by product name ascending.
pub fn top_products(store: &DataStore, limit: Option<&str>) -> Vec<TopProduct> {
    let limit = effective_limit(limit, DEFAULT_LIMIT);

    // (quantity sold, stock snapshot from the first record seen)
    let mut groups: BTreeMap<&str, (i64, i64)> = BTreeMap::new();
    for t in store.all() {
        let entry = groups
            .entry(t.product_name.as_str())
            .or_insert((0, t.stock));
        entry.0 += t.quantity;
    }

    let mut results: Vec<TopProduct> = groups
        .into_iter()
        .map(|(product_name, (total_quantity_sold, stock_quantity))| TopProduct {
            product_name: product_name.to_string(),
            total_quantity_sold,
            stock_quantity,
        })
        .collect();

    results.sort_by(|a, b| {
        b.total_quantity_sold
            .cmp(&a.total_quantity_sold)
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    results.truncate(limit);
    results
}
