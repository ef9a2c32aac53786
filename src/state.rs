//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds only immutable data: the startup configuration and the Notion
//! client. Requests never share mutable state, so no locks are needed.

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::notion::NotionPages;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub notion: Arc<dyn NotionPages>,
}

impl AppState {
    #[must_use]
    pub fn new(config: RelayConfig, notion: Arc<dyn NotionPages>) -> Self {
        Self { config: Arc::new(config), notion }
    }
}
