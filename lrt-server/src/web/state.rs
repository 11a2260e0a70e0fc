//! Application state for the web layer.

use std::sync::Arc;

use crate::aggregate::PolicyTable;
use crate::cache::CachedLrtClient;
use crate::lrt::LrtClient;

/// Shared application state.
///
/// Contains the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached Light Rail API client
    pub client: Arc<CachedLrtClient<LrtClient>>,

    /// Platform-handling rules for the route-mode views
    pub policies: Arc<PolicyTable>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(client: CachedLrtClient<LrtClient>, policies: PolicyTable) -> Self {
        Self {
            client: Arc::new(client),
            policies: Arc::new(policies),
        }
    }
}
