use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::pending::queue::PendingWriteQueue;
use crate::taxonomy::TaxonomyProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable taxonomy source. Default: CatalogTaxonomyProvider over TAXONOMY_PATH.
    pub taxonomy: Arc<dyn TaxonomyProvider>,
    /// Confidence edits awaiting commit. The readiness engine never reads this.
    pub pending: Arc<Mutex<PendingWriteQueue>>,
}
