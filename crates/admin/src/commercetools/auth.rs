//! Client-credentials token flow.
//!
//! Exchanges the API client's ID and secret for a bearer token at
//! `{auth_url}/oauth/token`.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::instrument;

use super::CommerceError;
use crate::config::CommercetoolsConfig;

/// Tokens with less than this many seconds left are treated as expired.
const EXPIRY_BUFFER_SECS: i64 = 60;

/// Bearer token obtained from the auth endpoint.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// Bearer token for API requests.
    pub access_token: SecretString,
    /// Granted scopes, space separated.
    pub scope: String,
    /// Unix timestamp when the token expires.
    pub expires_at: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    /// Token lifetime in seconds.
    expires_in: i64,
    #[serde(default)]
    scope: String,
}

#[derive(Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Request a token using the client-credentials grant.
///
/// # Errors
///
/// Returns `CommerceError::AuthenticationFailed` if the credentials are
/// rejected, or `CommerceError::Http` if the auth host is unreachable.
#[instrument(skip(http, config), fields(project_key = %config.project_key))]
pub async fn request_token(
    http: &reqwest::Client,
    config: &CommercetoolsConfig,
) -> Result<AccessToken, CommerceError> {
    let now = chrono::Utc::now().timestamp();
    let scope = config.scope_param();

    let response = http
        .post(config.token_endpoint())
        .basic_auth(&config.client_id, Some(config.client_secret.expose_secret()))
        .form(&[("grant_type", "client_credentials"), ("scope", scope.as_str())])
        .send()
        .await?;

    let status = response.status();

    if status.is_success() {
        let token: TokenResponse = response.json().await?;
        tracing::debug!(expires_in = token.expires_in, "Obtained access token");

        return Ok(AccessToken {
            access_token: SecretString::from(token.access_token),
            scope: token.scope,
            expires_at: now + token.expires_in,
        });
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<TokenErrorResponse>(&body)
        .ok()
        .and_then(|e| e.error_description.or(e.message).or(e.error))
        .unwrap_or(body);

    Err(CommerceError::AuthenticationFailed(format!(
        "HTTP {status}: {message}"
    )))
}

impl AccessToken {
    /// Check if the token has expired or is about to.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_within(EXPIRY_BUFFER_SECS)
    }

    /// Check if the token will expire within the given number of seconds.
    #[must_use]
    pub fn expires_within(&self, seconds: i64) -> bool {
        let now = chrono::Utc::now().timestamp();
        now >= self.expires_at - seconds
    }
}
