//! GCP Authentication
//!
//! Google Cloud Platform認証機能

use anyhow::{Context, Result};
use google_cloud_bigquery::client::{Client, ClientConfig};
use log::info;

use crate::domain::errors::ExportError;

/// BigQuery SDK が読み取る認証情報の環境変数
pub const CREDENTIALS_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Expands tilde in path and returns the full path
pub fn expand_key_path(key_path: &str) -> String {
    shellexpand::tilde(key_path).to_string()
}

/// Publishes the key path to `GOOGLE_APPLICATION_CREDENTIALS` and returns the expanded value
pub fn publish_credentials(key_path: &str) -> String {
    let expanded_path = expand_key_path(key_path);
    std::env::set_var(CREDENTIALS_ENV_VAR, &expanded_path);
    info!("{} set to {}", CREDENTIALS_ENV_VAR, expanded_path);
    expanded_path
}

/// Picks the billing project: explicit override first, then the one named by the credential
pub fn select_project_id(
    override_id: Option<String>,
    credential_project: Option<String>,
) -> Result<String> {
    override_id
        .filter(|id| !id.is_empty())
        .or(credential_project)
        .ok_or_else(|| ExportError::MissingProjectId.into())
}

/// Creates a BigQuery client with service account authentication
///
/// Returns the client together with the project id found in the credential, if any.
pub async fn create_bigquery_client(key_path: &str) -> Result<(Client, Option<String>)> {
    publish_credentials(key_path);

    let (config, project_id) = ClientConfig::new_with_auth()
        .await
        .context("Failed to authenticate with service account")?;

    let client = Client::new(config)
        .await
        .context("Failed to create BigQuery client")?;

    Ok((client, project_id))
}
