//! The transaction record ingested from the commerce dataset
//!
//! One record per dataset row. Records are produced once by ingestion and
//! never mutated afterwards; every downstream structure (indexes, reports)
//! is derived from the full record sequence.

use crate::ids::{ProductId, TransactionId, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single commerce transaction.
///
/// Monetary fields use `Decimal` so revenue accumulation is exact and
/// deterministic. `Default` yields the zero-value record (empty strings,
/// zero amounts, epoch dates), matching the ingestion fallback for
/// unparseable fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub user_id: UserId,
    pub country: String,
    pub region: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub category: String,

    // Commercial details
    pub unit_price: Decimal,
    pub quantity: i64,
    pub total_price: Decimal,

    // Inventory snapshot carried on every row
    pub stock: i64,
    pub added_date: NaiveDate,
}

impl Transaction {
    /// Calendar month key for this transaction's date, formatted `YYYY-MM`.
    ///
    /// Lexicographic order of these keys equals chronological order.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}
