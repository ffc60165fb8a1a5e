//! Monthly sales volume
//!
//! Groups the full record sequence by calendar month (`YYYY-MM` key) and
//! accumulates the quantity sold. The only report sorted ascending:
//! lexicographic order of the month key equals chronological order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::effective_limit;
use crate::store::DataStore;

/// Result rows returned when the caller does not supply a limit.
pub const DEFAULT_LIMIT: usize = 100;

/// Quantity sold in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySales {
    /// Month key, formatted `YYYY-MM`.
    pub month: String,
    pub total_quantity_sold: i64,
}

/// Quantity sold per month, ascending by month.
pub fn monthly_sales(store: &DataStore, limit: Option<&str>) -> Vec<MonthlySales> {
    let limit = effective_limit(limit, DEFAULT_LIMIT);

    let mut groups: BTreeMap<String, i64> = BTreeMap::new();
    for t in store.all() {
        *groups.entry(t.month_key()).or_insert(0) += t.quantity;
    }

    // BTreeMap iteration is already ascending by month key.
    let mut results: Vec<MonthlySales> = groups
        .into_iter()
        .map(|(month, total_quantity_sold)| MonthlySales {
            month,
            total_quantity_sold,
        })
        .collect();

    results.truncate(limit);
    results
}
