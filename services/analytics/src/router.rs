use crate::handlers::reports;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/country-revenue", get(reports::country_revenue))
        .route("/top-products", get(reports::top_products))
        .route("/monthly-sales", get(reports::monthly_sales))
        .route("/top-regions", get(reports::top_regions));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
