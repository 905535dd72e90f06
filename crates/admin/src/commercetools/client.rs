//! Core HTTP client: token caching, request dispatch, and error mapping.

use std::sync::Arc;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::RwLock;
use tracing::instrument;
use url::Url;

use super::auth::{AccessToken, request_token};
use super::{ApiErrorResponse, CommerceError};
use crate::config::CommercetoolsConfig;

/// Platform HTTP API client.
///
/// Cheap to clone; all clones share the HTTP connection pool and the cached
/// access token.
///
/// # Authentication
///
/// A token is requested lazily on the first call and cached in memory. It is
/// renewed when less than 60 seconds of its lifetime remain.
#[derive(Clone)]
pub struct CommercetoolsClient {
    inner: Arc<CommercetoolsClientInner>,
}

struct CommercetoolsClientInner {
    client: reqwest::Client,
    config: CommercetoolsConfig,
    /// In-memory token cache
    token: RwLock<Option<AccessToken>>,
}

impl std::fmt::Debug for CommercetoolsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommercetoolsClient")
            .field("project_key", &self.inner.config.project_key)
            .field("api_url", &self.inner.config.api_url.as_str())
            .finish_non_exhaustive()
    }
}

impl CommercetoolsClient {
    /// Create a new client for the configured project.
    ///
    /// No network traffic happens until the first API call.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::Http` if the HTTP client cannot be built.
    pub fn new(config: CommercetoolsConfig) -> Result<Self, CommerceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(concat!("ocm-catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(CommercetoolsClientInner {
                client,
                config,
                token: RwLock::new(None),
            }),
        })
    }

    /// Project key this client is bound to.
    #[must_use]
    pub fn project_key(&self) -> &str {
        &self.inner.config.project_key
    }

    /// Get a valid bearer token, requesting a new one if needed.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::AuthenticationFailed` if the token request is
    /// rejected.
    #[instrument(skip(self))]
    pub async fn access_token(&self) -> Result<String, CommerceError> {
        {
            let token = self.inner.token.read().await;
            if let Some(token) = token.as_ref()
                && !token.is_expired()
            {
                return Ok(token.access_token.expose_secret().to_string());
            }
        }

        let mut guard = self.inner.token.write().await;

        // Another task may have renewed it while we waited for the lock.
        if let Some(token) = guard.as_ref()
            && !token.is_expired()
        {
            return Ok(token.access_token.expose_secret().to_string());
        }

        let token = request_token(&self.inner.client, &self.inner.config).await?;
        let secret = token.access_token.expose_secret().to_string();
        *guard = Some(token);

        Ok(secret)
    }

    /// Drop the cached token so the next call requests a fresh one.
    pub async fn clear_token(&self) {
        *self.inner.token.write().await = None;
    }

    fn url(&self, segments: &[&str]) -> Result<Url, CommerceError> {
        let mut url = self.inner.config.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| CommerceError::InvalidUrl(self.inner.config.api_url.to_string()))?
            .pop_if_empty()
            .push(&self.inner.config.project_key)
            .extend(segments);
        Ok(url)
    }

    /// GET a resource and deserialize it.
    pub(super) async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, CommerceError> {
        let url = self.url(segments)?;
        let token = self.access_token().await?;
        let request = self
            .inner
            .client
            .get(url)
            .bearer_auth(token)
            .query(query);

        Self::send(request).await
    }

    /// GET a resource, mapping 404 to `None`.
    pub(super) async fn get_optional<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Option<T>, CommerceError> {
        match self.get(segments, query).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// POST a JSON body and deserialize the response.
    pub(super) async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, CommerceError> {
        let url = self.url(segments)?;
        let token = self.access_token().await?;
        let request = self
            .inner
            .client
            .post(url)
            .bearer_auth(token)
            .json(body);

        Self::send(request).await
    }

    async fn send<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, CommerceError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        let (message, errors) = match serde_json::from_slice::<ApiErrorResponse>(&body) {
            Ok(parsed) => (parsed.message, parsed.errors),
            Err(_) => (String::from_utf8_lossy(&body).into_owned(), Vec::new()),
        };

        let err = CommerceError::Api {
            status: status.as_u16(),
            message,
            errors,
        };
        tracing::debug!(status = status.as_u16(), kind = %err.kind(), error = %err, "API request failed");

        Err(err)
    }
}
