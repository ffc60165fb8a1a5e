//! Report endpoint handlers
//!
//! Thin layer over the aggregation engine: extract the optional `limit`
//! query parameter, run the report, serialize to JSON. Report queries
//! cannot fail, so every handler answers 200, including with an empty
//! array.

use crate::reports::{self, CountryRevenue, MonthlySales, RegionStats, TopProduct};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

/// Query parameters shared by all report endpoints.
///
/// `limit` stays textual here; the aggregation engine owns the
/// parse-or-default rule.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportQuery {
    pub limit: Option<String>,
}

pub async fn country_revenue(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<Vec<CountryRevenue>> {
    Json(reports::country_revenue(&state.store, query.limit.as_deref()))
}

pub async fn top_products(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<Vec<TopProduct>> {
    Json(reports::top_products(&state.store, query.limit.as_deref()))
}

pub async fn monthly_sales(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<Vec<MonthlySales>> {
    Json(reports::monthly_sales(&state.store, query.limit.as_deref()))
}

pub async fn top_regions(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<Vec<RegionStats>> {
    Json(reports::top_regions(&state.store, query.limit.as_deref()))
}
