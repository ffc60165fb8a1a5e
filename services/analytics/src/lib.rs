//! Analytics Service
//!
//! Loads a commerce transaction dataset into memory, indexes it over the
//! common grouping keys, and serves four pre-aggregated reports over an
//! HTTP API:
//! - Revenue per country and product
//! - Top products by quantity sold
//! - Monthly sales volume
//! - Top regions by revenue
//!
//! # Architecture
//!
//! ```text
//! CSV file
//!     │
//! ┌───▼────┐
//! │ Ingest │  ← fixed columns, named field-coercion policy
//! └───┬────┘
//!     │
//! ┌───▼────┐
//! │ Store  │  ← record sequence + six secondary indexes,
//! └───┬────┘    immutable once published
//!     │
//! ┌───▼─────┐
//! │ Reports │  ← group / flatten / sort / truncate
//! └───┬─────┘
//!     │
//! ┌───▼──────────────┐
//! │ HTTP API (axum)  │
//! └──────────────────┘
//! ```

pub mod cli;
pub mod handlers;
pub mod ingest;
pub mod reports;
pub mod router;
pub mod state;
pub mod store;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
