//! Authentication Module
//!
//! GCP認証関連の機能

pub mod credential_resolver;
pub mod gcp_auth;

pub use credential_resolver::{resolve_credential, ResolvedCredential};
pub use gcp_auth::create_bigquery_client;
