use std::sync::Arc;

use tokio::sync::RwLock;

use crate::client::MatchingBackend;
use crate::config::Config;
use crate::results::store::ResultsStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Matching service. Default: `MatchingClient`; tests swap in an in-memory backend.
    pub backend: Arc<dyn MatchingBackend>,
    /// Written only by reloads and filter changes.
    pub store: Arc<RwLock<ResultsStore>>,
    pub config: Config,
}

impl AppState {
    pub fn new(backend: Arc<dyn MatchingBackend>, config: Config) -> Self {
        Self {
            backend,
            store: Arc::new(RwLock::new(ResultsStore::new())),
            config,
        }
    }
}
