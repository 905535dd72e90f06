//! Application state shared across handlers.

use std::sync::Arc;

use ocm_catalog_admin::{CommerceError, CommercetoolsClient};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; all handlers share one platform client and
/// therefore one cached access token.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    client: CommercetoolsClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, CommerceError> {
        let client = CommercetoolsClient::new(config.commercetools.clone())?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, client }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the platform API client.
    #[must_use]
    pub fn client(&self) -> &CommercetoolsClient {
        &self.inner.client
    }
}
