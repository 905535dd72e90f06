//! Platform API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CTP_PROJECT_KEY` - Project key (e.g., `ocm`)
//! - `CTP_CLIENT_ID` - API client ID
//! - `CTP_CLIENT_SECRET` - API client secret (HIGH PRIVILEGE, high entropy)
//!
//! ## Optional
//! - `CTP_AUTH_URL` - Auth host (default: `https://auth.eu-central-1.aws.commercetools.com`)
//! - `CTP_API_URL` - API host (default: `https://api.eu-central-1.aws.commercetools.com`)
//! - `CTP_SCOPES` - Space-separated scopes (default: `manage_project:{project_key}`)
//! - `CTP_TIMEOUT_SECS` - HTTP timeout per request (default: 30)

use std::collections::HashMap;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;
const DEFAULT_AUTH_URL: &str = "https://auth.eu-central-1.aws.commercetools.com";
const DEFAULT_API_URL: &str = "https://api.eu-central-1.aws.commercetools.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Connection settings for the platform API.
///
/// Passed explicitly to [`crate::commercetools::CommercetoolsClient::new`];
/// there is no process-wide client. Implements `Debug` manually to redact
/// the client secret.
#[derive(Clone)]
pub struct CommercetoolsConfig {
    /// Project key, first path segment of every API call
    pub project_key: String,
    /// API client ID
    pub client_id: String,
    /// API client secret
    pub client_secret: SecretString,
    /// Auth host (token endpoint is `{auth_url}/oauth/token`)
    pub auth_url: Url,
    /// API host
    pub api_url: Url,
    /// Scopes requested with the client-credentials grant
    pub scopes: Vec<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for CommercetoolsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommercetoolsConfig")
            .field("project_key", &self.project_key)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("auth_url", &self.auth_url.as_str())
            .field("api_url", &self.api_url.as_str())
            .field("scopes", &self.scopes)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CommercetoolsConfig {
    /// Build a configuration from explicit values.
    ///
    /// Uses the default `manage_project:{project_key}` scope and timeout.
    /// Secret strength is not validated here; use [`Self::from_env`] for
    /// deployed configuration.
    #[must_use]
    pub fn new(
        project_key: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<SecretString>,
        auth_url: Url,
        api_url: Url,
    ) -> Self {
        let project_key = project_key.into();
        let scopes = vec![default_scope(&project_key)];
        Self {
            project_key,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            auth_url,
            api_url,
            scopes,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, URLs do not
    /// parse, or the client secret fails validation (placeholder detection,
    /// entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let project_key = get_required_env("CTP_PROJECT_KEY")?;
        let client_id = get_required_env("CTP_CLIENT_ID")?;
        let client_secret = get_validated_secret("CTP_CLIENT_SECRET")?;
        let auth_url = parse_url_env("CTP_AUTH_URL", DEFAULT_AUTH_URL)?;
        let api_url = parse_url_env("CTP_API_URL", DEFAULT_API_URL)?;
        let scopes = get_optional_env("CTP_SCOPES").map_or_else(
            || vec![default_scope(&project_key)],
            |raw| parse_scopes(&raw),
        );
        let timeout_secs = get_env_or_default("CTP_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        if scopes.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CTP_SCOPES".to_string(),
                "at least one scope is required".to_string(),
            ));
        }

        Ok(Self {
            project_key,
            client_id,
            client_secret,
            auth_url,
            api_url,
            scopes,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Token endpoint URL.
    #[must_use]
    pub fn token_endpoint(&self) -> String {
        format!("{}/oauth/token", self.auth_url.as_str().trim_end_matches('/'))
    }

    /// Scopes joined for the token request.
    #[must_use]
    pub fn scope_param(&self) -> String {
        self.scopes.join(" ")
    }

    /// Client secret, for building the basic-auth header.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn default_scope(project_key: &str) -> String {
    format!("manage_project:{project_key}")
}

/// Split a scope list on whitespace, dropping empty entries.
fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(String::from).collect()
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a URL variable, falling back to `default`.
fn parse_url_env(key: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = get_env_or_default(key, default);
    parse_base_url(&raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e))
}

/// Parse a base URL, requiring http(s) and a host.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("URL must have a host".to_string());
    }
    Ok(url)
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use the generated API client secret."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}
