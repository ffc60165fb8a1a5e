//! In-memory data store with secondary indexes
//!
//! Owns the full ordered record sequence (insertion order = file order) and
//! six indexes over the common grouping keys: country, product id, region,
//! category, user id, and transaction id. All indexes are built in a single
//! pass by `build`; the store is immutable afterwards, so readers on any
//! number of tasks need no coordination.
//!
//! Indexes hold positions into the record vector rather than cloned
//! records, and live in `BTreeMap`s so key iteration order is
//! deterministic. A wholesale reload builds a fresh store and republishes
//! it; a partially indexed store is never observable.

use std::collections::BTreeMap;

use types::ids::{ProductId, TransactionId, UserId};
use types::transaction::Transaction;

/// The process-wide read-only record store.
#[derive(Debug, Default)]
pub struct DataStore {
    /// Full record sequence, in file order.
    transactions: Vec<Transaction>,
    /// Country → positions of records from that country.
    by_country: BTreeMap<String, Vec<usize>>,
    /// Product id → positions of records for that product.
    by_product: BTreeMap<ProductId, Vec<usize>>,
    /// Region → positions of records from that region.
    by_region: BTreeMap<String, Vec<usize>>,
    /// Category → positions of records in that category.
    by_category: BTreeMap<String, Vec<usize>>,
    /// User id → positions of records by that user.
    by_user: BTreeMap<UserId, Vec<usize>>,
    /// Transaction id → position of the record. Last write wins on
    /// duplicate ids.
    by_transaction: BTreeMap<TransactionId, usize>,
}

impl DataStore {
    /// Build a store from the ingested record sequence.
    ///
    /// One pass over the input; no error conditions. Empty input yields an
    /// empty store with empty buckets.
    pub fn build(transactions: Vec<Transaction>) -> Self {
        let mut by_country: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut by_product: BTreeMap<ProductId, Vec<usize>> = BTreeMap::new();
        let mut by_region: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut by_category: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut by_user: BTreeMap<UserId, Vec<usize>> = BTreeMap::new();
        let mut by_transaction: BTreeMap<TransactionId, usize> = BTreeMap::new();

        for (pos, t) in transactions.iter().enumerate() {
            by_country.entry(t.country.clone()).or_default().push(pos);
            by_product
                .entry(t.product_id.clone())
                .or_default()
                .push(pos);
            by_region.entry(t.region.clone()).or_default().push(pos);
            by_category.entry(t.category.clone()).or_default().push(pos);
            by_user.entry(t.user_id.clone()).or_default().push(pos);
            by_transaction.insert(t.id.clone(), pos);
        }

        Self {
            transactions,
            by_country,
            by_product,
            by_region,
            by_category,
            by_user,
            by_transaction,
        }
    }

    /// The full record sequence, in file order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// All countries present in the dataset, in lexical order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.by_country.keys().map(String::as_str)
    }

    /// Records from the given country, in file order.
    pub fn records_for_country(&self, country: &str) -> Vec<&Transaction> {
        self.resolve(self.by_country.get(country))
    }

    /// All regions present in the dataset, in lexical order.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.by_region.keys().map(String::as_str)
    }

    /// Records from the given region, in file order.
    pub fn records_for_region(&self, region: &str) -> Vec<&Transaction> {
        self.resolve(self.by_region.get(region))
    }

    /// All categories present in the dataset, in lexical order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.by_category.keys().map(String::as_str)
    }

    /// Records in the given category, in file order.
    pub fn records_for_category(&self, category: &str) -> Vec<&Transaction> {
        self.resolve(self.by_category.get(category))
    }

    /// All product ids present in the dataset, in lexical order.
    pub fn products(&self) -> impl Iterator<Item = &ProductId> {
        self.by_product.keys()
    }

    /// Records for the given product id, in file order.
    pub fn records_for_product(&self, product: &ProductId) -> Vec<&Transaction> {
        self.resolve(self.by_product.get(product))
    }

    /// All user ids present in the dataset, in lexical order.
    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.by_user.keys()
    }

    /// Records by the given user, in file order.
    pub fn records_for_user(&self, user: &UserId) -> Vec<&Transaction> {
        self.resolve(self.by_user.get(user))
    }

    /// Look up a single record by transaction id.
    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.by_transaction.get(id).map(|&pos| &self.transactions[pos])
    }

    fn resolve(&self, positions: Option<&Vec<usize>>) -> Vec<&Transaction> {
        positions
            .map(|ps| ps.iter().map(|&p| &self.transactions[p]).collect())
            .unwrap_or_default()
    }
}
