use analytics::cli::Args;
use analytics::ingest;
use analytics::router::create_router;
use analytics::state::AppState;
use analytics::store::DataStore;
use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!("Starting analytics API service");

    // The load is all-or-nothing: any ingestion failure aborts startup
    // before the listener is bound.
    let transactions = ingest::load_csv(&args.data, args.field_policy)
        .with_context(|| format!("loading transactions from {}", args.data.display()))?;
    tracing::info!(count = transactions.len(), "Loaded transactions");

    let store = DataStore::build(transactions);
    tracing::info!(
        countries = store.countries().count(),
        regions = store.regions().count(),
        "Indexed data store built"
    );

    let state = AppState::new(store);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
