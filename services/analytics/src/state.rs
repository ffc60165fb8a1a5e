use crate::store::DataStore;
use std::sync::Arc;

/// Shared application state.
///
/// The store is immutable once published; handlers clone the `Arc`, never
/// the store. A wholesale reload would build a fresh store and swap the
/// `Arc`, leaving in-flight requests on the generation they captured.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
}

impl AppState {
    pub fn new(store: DataStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
