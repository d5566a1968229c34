use std::sync::Arc;

use crate::config::Config;
use crate::storage::Storage;
use crate::tools::facts::FactClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Per-visitor key-value store. File-backed in production, in-memory in tests.
    pub storage: Arc<dyn Storage>,
    pub facts: FactClient,
}
