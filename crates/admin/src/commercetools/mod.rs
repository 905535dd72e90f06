//! Platform HTTP API client with client-credentials authentication.
//!
//! # Architecture
//!
//! - The platform is the source of truth: no local state, direct API calls
//! - One cached bearer token per client, renewed shortly before expiry
//! - No retries: every failure is surfaced to the caller with an [`ErrorKind`]
//!
//! # Example
//!
//! ```rust,ignore
//! use ocm_catalog_admin::commercetools::CommercetoolsClient;
//!
//! let client = CommercetoolsClient::new(config)?;
//! let category = client.get_category_by_key("women-tops").await?;
//! ```

mod auth;
mod categories;
mod client;
mod product_types;
mod products;

pub use auth::AccessToken;
pub use categories::DEFAULT_CATEGORY_LIMIT;
pub use client::CommercetoolsClient;
pub use products::DEFAULT_PRODUCT_LIMIT;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes that signal a uniqueness or version conflict.
const CONFLICT_CODES: &[&str] = &["DuplicateField", "DuplicateValue", "ConcurrentModification"];

/// Error codes that signal a malformed or incomplete request.
const VALIDATION_CODES: &[&str] = &[
    "InvalidInput",
    "InvalidField",
    "RequiredField",
    "InvalidJsonInput",
    "InvalidOperation",
    "InvalidDateTime",
    "DuplicateAttributeValue",
    "DuplicateVariantValues",
];

/// Escape a value for use inside a double-quoted filter or predicate.
pub(super) fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Coarse classification of platform failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A key or unique value already exists, or a version mismatch.
    Conflict,
    /// Malformed or missing required fields.
    Validation,
    /// The addressed resource does not exist.
    NotFound,
    /// Credentials rejected or insufficient scope.
    Auth,
    /// Network failure, rate limiting, or a server-side error.
    Transient,
    /// Anything else (e.g., an unparseable response).
    Other,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Conflict => "conflict",
            Self::Validation => "validation",
            Self::NotFound => "not found",
            Self::Auth => "auth",
            Self::Transient => "transient",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// One entry of the platform's `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// Machine-readable code, e.g. `DuplicateField`.
    pub code: String,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Code-specific fields (`field`, `duplicateValue`, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Error body returned by the platform for non-success responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorObject>,
}

/// Errors that can occur when interacting with the platform API.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error (HTTP {status}): {}", format_api_errors(.message, .errors))]
    Api {
        status: u16,
        message: String,
        errors: Vec<ApiErrorObject>,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Token request rejected.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The configured API URL cannot take path segments.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl CommerceError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) => ErrorKind::Transient,
            Self::Parse(_) | Self::InvalidUrl(_) => ErrorKind::Other,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AuthenticationFailed(_) => ErrorKind::Auth,
            Self::Api { status, errors, .. } => classify_api_error(*status, errors),
        }
    }

    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.kind() == ErrorKind::Transient
    }
}

/// Map a status code and error codes to an [`ErrorKind`].
///
/// Error codes win over the status code: the platform reports duplicate keys
/// as HTTP 400 with code `DuplicateField`.
fn classify_api_error(status: u16, errors: &[ApiErrorObject]) -> ErrorKind {
    if errors
        .iter()
        .any(|e| CONFLICT_CODES.contains(&e.code.as_str()))
    {
        return ErrorKind::Conflict;
    }
    if errors.iter().any(|e| e.code == "ResourceNotFound") {
        return ErrorKind::NotFound;
    }
    if errors
        .iter()
        .any(|e| VALIDATION_CODES.contains(&e.code.as_str()))
    {
        return ErrorKind::Validation;
    }

    match status {
        409 => ErrorKind::Conflict,
        400 | 422 => ErrorKind::Validation,
        401 | 403 => ErrorKind::Auth,
        404 => ErrorKind::NotFound,
        429 | 500..=599 => ErrorKind::Transient,
        _ => ErrorKind::Other,
    }
}

fn format_api_errors(message: &str, errors: &[ApiErrorObject]) -> String {
    if errors.is_empty() {
        return if message.is_empty() {
            "(no error details provided)".to_string()
        } else {
            message.to_string()
        };
    }

    errors
        .iter()
        .map(|e| {
            if e.message.is_empty() {
                e.code.clone()
            } else {
                format!("{}: {}", e.code, e.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
