//! CLI command implementations.

pub mod categories;
pub mod product_types;
pub mod products;

use std::path::Path;

use ocm_catalog_admin::{CommercetoolsClient, CommercetoolsConfig};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

/// Build a platform client from `CTP_*` environment variables.
///
/// # Errors
///
/// Returns an error if configuration is missing or the HTTP client cannot be
/// built.
pub fn client() -> Result<CommercetoolsClient, Box<dyn std::error::Error>> {
    let config = CommercetoolsConfig::from_env()?;
    info!(project_key = %config.project_key, "Using platform project");
    Ok(CommercetoolsClient::new(config)?)
}

/// Parse YAML from `file`, or from `bundled` when no file is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the YAML is invalid.
pub async fn load_yaml<T: DeserializeOwned>(
    file: Option<&str>,
    bundled: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    let Some(file_path) = file else {
        return Ok(serde_yaml::from_str(bundled)?);
    };

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading YAML file");
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Write `value` to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[allow(clippy::print_stdout)]
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
