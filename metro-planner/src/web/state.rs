//! Application state for the web layer.

use crate::service::MetroService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the (possibly still loading) metro network
    pub service: MetroService,
}

impl AppState {
    pub fn new(service: MetroService) -> Self {
        Self { service }
    }
}
