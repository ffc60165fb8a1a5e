//! CSV ingestion for the transaction dataset
//!
//! Reads the whole dataset file up front; the process never serves over a
//! partially loaded store. Thirteen fixed column positions, header row
//! skipped.
//!
//! Structural problems (missing file, malformed row shape) always fail the
//! load. Field-level coercion failures follow the named `FieldPolicy`:
//! `Zero` falls back to zero values, `Strict` rejects the load with
//! row/column detail.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;
use types::ids::{ProductId, TransactionId, UserId};
use types::transaction::Transaction;

// Fixed column positions in the dataset file.
const COL_ID: usize = 0;
const COL_DATE: usize = 1;
const COL_USER_ID: usize = 2;
const COL_COUNTRY: usize = 3;
const COL_REGION: usize = 4;
const COL_PRODUCT_ID: usize = 5;
const COL_PRODUCT_NAME: usize = 6;
const COL_CATEGORY: usize = 7;
const COL_PRICE: usize = 8;
const COL_QUANTITY: usize = 9;
const COL_TOTAL_PRICE: usize = 10;
const COL_STOCK: usize = 11;
const COL_ADDED_DATE: usize = 12;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: missing column {column}")]
    MissingColumn { row: u64, column: usize },

    #[error("row {row}, column {column}: cannot parse {value:?}")]
    InvalidField {
        row: u64,
        column: usize,
        value: String,
    },
}

/// How to treat numeric/date fields that fail to parse.
///
/// Row shape errors are fatal regardless of policy; this only governs
/// per-field coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FieldPolicy {
    /// Fall back to zero values (zero amounts, epoch date).
    Zero,
    /// Reject the load on the first unparseable field.
    Strict,
}

/// Load the transaction dataset from a CSV file.
///
/// The first row is a header and is skipped. Returns records in file
/// order.
pub fn load_csv(path: &Path, policy: FieldPolicy) -> Result<Vec<Transaction>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let mut transactions = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        // 1-based data row number, header excluded.
        let row = i as u64 + 1;

        transactions.push(Transaction {
            id: TransactionId::new(field(&record, row, COL_ID)?),
            date: parse_date(field(&record, row, COL_DATE)?, row, COL_DATE, policy)?,
            user_id: UserId::new(field(&record, row, COL_USER_ID)?),
            country: field(&record, row, COL_COUNTRY)?.to_string(),
            region: field(&record, row, COL_REGION)?.to_string(),
            product_id: ProductId::new(field(&record, row, COL_PRODUCT_ID)?),
            product_name: field(&record, row, COL_PRODUCT_NAME)?.to_string(),
            category: field(&record, row, COL_CATEGORY)?.to_string(),
            unit_price: parse_decimal(field(&record, row, COL_PRICE)?, row, COL_PRICE, policy)?,
            quantity: parse_i64(field(&record, row, COL_QUANTITY)?, row, COL_QUANTITY, policy)?,
            total_price: parse_decimal(
                field(&record, row, COL_TOTAL_PRICE)?,
                row,
                COL_TOTAL_PRICE,
                policy,
            )?,
            stock: parse_i64(field(&record, row, COL_STOCK)?, row, COL_STOCK, policy)?,
            added_date: parse_date(
                field(&record, row, COL_ADDED_DATE)?,
                row,
                COL_ADDED_DATE,
                policy,
            )?,
        });
    }

    Ok(transactions)
}

fn field<'r>(
    record: &'r csv::StringRecord,
    row: u64,
    column: usize,
) -> Result<&'r str, IngestError> {
    record
        .get(column)
        .ok_or(IngestError::MissingColumn { row, column })
}

fn parse_decimal(
    raw: &str,
    row: u64,
    column: usize,
    policy: FieldPolicy,
) -> Result<Decimal, IngestError> {
    match raw.trim().parse::<Decimal>() {
        Ok(value) => Ok(value),
        Err(_) => match policy {
            FieldPolicy::Zero => {
                debug!(row, column, value = raw, "coercing unparseable amount to zero");
                Ok(Decimal::ZERO)
            }
            FieldPolicy::Strict => Err(IngestError::InvalidField {
                row,
                column,
                value: raw.to_string(),
            }),
        },
    }
}

fn parse_i64(raw: &str, row: u64, column: usize, policy: FieldPolicy) -> Result<i64, IngestError> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(_) => match policy {
            FieldPolicy::Zero => {
                debug!(row, column, value = raw, "coercing unparseable count to zero");
                Ok(0)
            }
            FieldPolicy::Strict => Err(IngestError::InvalidField {
                row,
                column,
                value: raw.to_string(),
            }),
        },
    }
}

fn parse_date(
    raw: &str,
    row: u64,
    column: usize,
    policy: FieldPolicy,
) -> Result<NaiveDate, IngestError> {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(value) => Ok(value),
        Err(_) => match policy {
            FieldPolicy::Zero => {
                debug!(row, column, value = raw, "coercing unparseable date to epoch");
                Ok(NaiveDate::default())
            }
            FieldPolicy::Strict => Err(IngestError::InvalidField {
                row,
                column,
                value: raw.to_string(),
            }),
        },
    }
}
