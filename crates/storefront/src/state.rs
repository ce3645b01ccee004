//! Application state shared across handlers.

use std::sync::Arc;

use crate::advisory::AdvisoryClient;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the static catalog, and the advisory client. Visitor
/// state (cart, selection, chat) lives in the session, not here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    advisory: AdvisoryClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Catalog::load();
        let advisory = AdvisoryClient::new(&config.advisory);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                advisory,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the advisory backend client.
    #[must_use]
    pub fn advisory(&self) -> &AdvisoryClient {
        &self.inner.advisory
    }
}
