//! HTTP endpoint behavior tests for the analytics API
//!
//! Drives the full router in-process and asserts on status codes and the
//! JSON wire format of each report.

use analytics::reports::{CountryRevenue, MonthlySales, RegionStats, TopProduct};
use analytics::router::create_router;
use analytics::state::AppState;
use analytics::store::DataStore;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;
use types::ids::{ProductId, TransactionId, UserId};
use types::transaction::Transaction;

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    date: &str,
    country: &str,
    region: &str,
    product_id: &str,
    product: &str,
    quantity: i64,
    total: i64,
    stock: i64,
) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        user_id: UserId::new("U-1"),
        country: country.to_string(),
        region: region.to_string(),
        product_id: ProductId::new(product_id),
        product_name: product.to_string(),
        category: "General".to_string(),
        quantity,
        total_price: Decimal::from(total),
        stock,
        ..Transaction::default()
    }
}

fn seeded_app() -> Router {
    let transactions = vec![
        record(
            "TX-1",
            "2023-01-01",
            "USA",
            "California",
            "P-1",
            "Widget",
            10,
            100,
            40,
        ),
        record(
            "TX-2",
            "2023-01-15",
            "USA",
            "California",
            "P-1",
            "Widget",
            20,
            150,
            90,
        ),
        record(
            "TX-3",
            "2023-02-01",
            "Canada",
            "Ontario",
            "P-2",
            "Gadget",
            15,
            300,
            70,
        ),
    ];
    create_router(AppState::new(DataStore::build(transactions)))
}

fn empty_app() -> Router {
    create_router(AppState::new(DataStore::build(Vec::new())))
}

async fn get_json<T: DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn test_country_revenue_sorted_with_counts() {
    let (status, body) =
        get_json::<Vec<CountryRevenue>>(seeded_app(), "/api/v1/country-revenue").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.len(), 2);

    assert_eq!(body[0].country, "Canada");
    assert_eq!(body[0].product_name, "Gadget");
    assert_eq!(body[0].total_revenue, Decimal::from(300));
    assert_eq!(body[0].transaction_count, 1);

    assert_eq!(body[1].country, "USA");
    assert_eq!(body[1].product_name, "Widget");
    assert_eq!(body[1].total_revenue, Decimal::from(250));
    assert_eq!(body[1].transaction_count, 2);
}

#[tokio::test]
async fn test_country_revenue_wire_field_names() {
    let (status, body) = get_json::<Value>(seeded_app(), "/api/v1/country-revenue").await;

    assert_eq!(status, StatusCode::OK);
    let first = &body.as_array().expect("array body")[0];
    for key in [
        "country",
        "product_name",
        "total_revenue",
        "transaction_count",
    ] {
        assert!(first.get(key).is_some(), "missing field {key}");
    }
}

#[tokio::test]
async fn test_top_products_stock_snapshot() {
    let (status, body) = get_json::<Vec<TopProduct>>(seeded_app(), "/api/v1/top-products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.len(), 2);

    assert_eq!(body[0].product_name, "Widget");
    assert_eq!(body[0].total_quantity_sold, 30);
    // Stock comes from the first Widget row, not 40 + 90.
    assert_eq!(body[0].stock_quantity, 40);

    assert_eq!(body[1].product_name, "Gadget");
    assert_eq!(body[1].total_quantity_sold, 15);
    assert_eq!(body[1].stock_quantity, 70);
}

#[tokio::test]
async fn test_monthly_sales_worked_example() {
    let (status, body) = get_json::<Vec<MonthlySales>>(seeded_app(), "/api/v1/monthly-sales").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        vec![
            MonthlySales {
                month: "2023-01".to_string(),
                total_quantity_sold: 30,
            },
            MonthlySales {
                month: "2023-02".to_string(),
                total_quantity_sold: 15,
            },
        ]
    );
}

#[tokio::test]
async fn test_top_regions_ranking() {
    let (status, body) = get_json::<Vec<RegionStats>>(seeded_app(), "/api/v1/top-regions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.len(), 2);

    assert_eq!(body[0].region, "Ontario");
    assert_eq!(body[0].total_revenue, Decimal::from(300));
    assert_eq!(body[0].total_item_sold, 15);

    assert_eq!(body[1].region, "California");
    assert_eq!(body[1].total_revenue, Decimal::from(250));
    assert_eq!(body[1].total_item_sold, 30);
}

#[tokio::test]
async fn test_limit_one_returns_single_top_entry() {
    let (status, body) =
        get_json::<Vec<CountryRevenue>>(seeded_app(), "/api/v1/country-revenue?limit=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].country, "Canada");

    let (status, body) =
        get_json::<Vec<TopProduct>>(seeded_app(), "/api/v1/top-products?limit=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].product_name, "Widget");
}

#[tokio::test]
async fn test_invalid_limit_falls_back_to_default() {
    for uri in [
        "/api/v1/country-revenue?limit=0",
        "/api/v1/country-revenue?limit=abc",
        "/api/v1/country-revenue?limit=-2",
        "/api/v1/country-revenue?limit=",
    ] {
        let (status, body) = get_json::<Vec<CountryRevenue>>(seeded_app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body.len(), 2, "{uri} should return all groups");
    }
}

#[tokio::test]
async fn test_empty_store_returns_empty_arrays() {
    for uri in [
        "/api/v1/country-revenue",
        "/api/v1/top-products",
        "/api/v1/monthly-sales",
        "/api/v1/top-regions",
    ] {
        let (status, body) = get_json::<Value>(empty_app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, Value::Array(Vec::new()), "{uri}");
    }
}
