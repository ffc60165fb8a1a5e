//! Revenue per country and product
//!
//! Two-level grouping: every (country, product name) pair accumulates the
//! revenue and transaction count of its records. Consumes the store's
//! country index one bucket at a time; products regroup within each bucket.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::effective_limit;
use crate::store::DataStore;

/// Result rows returned when the caller does not supply a limit.
pub const DEFAULT_LIMIT: usize = 100;

/// Revenue summary for one (country, product) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRevenue {
    pub country: String,
    pub product_name: String,
    pub total_revenue: Decimal,
    pub transaction_count: u64,
}

/// Rank (country, product) pairs by total revenue, descending.
///
/// Equal revenue orders by (country, product name) ascending.
pub fn country_revenue(store: &DataStore, limit: Option<&str>) -> Vec<CountryRevenue> {
    let limit = effective_limit(limit, DEFAULT_LIMIT);

    let mut groups: BTreeMap<(&str, &str), (Decimal, u64)> = BTreeMap::new();
    for country in store.countries() {
        for t in store.records_for_country(country) {
            let entry = groups
                .entry((country, t.product_name.as_str()))
                .or_insert((Decimal::ZERO, 0));
            entry.0 += t.total_price;
            entry.1 += 1;
        }
    }

    let mut results: Vec<CountryRevenue> = groups
        .into_iter()
        .map(
            |((country, product_name), (total_revenue, transaction_count))| CountryRevenue {
                country: country.to_string(),
                product_name: product_name.to_string(),
                total_revenue,
                transaction_count,
            },
        )
        .collect();

    results.sort_by(|a, b| {
        b.total_revenue.cmp(&a.total_revenue).then_with(|| {
            (a.country.as_str(), a.product_name.as_str())
                .cmp(&(b.country.as_str(), b.product_name.as_str()))
        })
    });
    results.truncate(limit);
    results
}
