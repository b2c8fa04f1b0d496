//! Integration tests for bq-export
//!
//! These tests verify credential handling against the fixture key file.
//! The live test requires GCP credentials to run.

use bq_export::adapter::auth::resolve_credential;
use bq_export::application::dto::export_config::ExportConfig;
use bq_export::domain::entities::credential::Credential;
use bq_export::domain::entities::export_outcome::ExportOutcome;
use bq_export::driver::workflow::ExportWorkflow;
use std::fs;
use std::path::PathBuf;

/// Get the path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_fixture_key_is_valid_json() {
    let key = fixtures_path().join("service_account.json");
    let content = fs::read_to_string(&key).expect("Failed to read service_account.json");

    let json: serde_json::Value =
        serde_json::from_str(&content).expect("fixture should be valid JSON");
    assert_eq!(json["type"], "service_account");
    assert!(Credential::parse(&content).is_inline());
}

#[test]
fn test_fixture_path_resolves_without_temp_file() {
    let key = fixtures_path().join("service_account.json");
    let key = key.to_string_lossy().to_string();

    let resolved = resolve_credential(&key).unwrap();

    assert_eq!(resolved.cleanup_path(), None);
    assert_eq!(resolved.env_value(), key);
}

#[test]
fn test_fixture_contents_resolve_to_identical_temp_file() {
    let content = fs::read_to_string(fixtures_path().join("service_account.json")).unwrap();

    let resolved = resolve_credential(&content).unwrap();
    let temp_path = resolved.cleanup_path().unwrap().to_path_buf();

    assert_ne!(temp_path, fixtures_path().join("service_account.json"));
    assert_eq!(fs::read_to_string(&temp_path).unwrap(), content);

    resolved.cleanup().unwrap();
    assert!(!temp_path.exists());
}

/// Integration test that requires GCP credentials
/// Run with: cargo test --test integration_test -- --ignored
#[tokio::test]
#[ignore]
async fn test_bigquery_export_e2e() {
    // This test requires:
    // - BQ_EXPORT_TEST_SERVICE_ACCOUNT: inline JSON key or path to a key file
    // - BQ_EXPORT_TEST_PROJECT (optional): project to run the query in
    let service_account = std::env::var("BQ_EXPORT_TEST_SERVICE_ACCOUNT")
        .expect("BQ_EXPORT_TEST_SERVICE_ACCOUNT env var required for E2E test");
    let project_id = std::env::var("BQ_EXPORT_TEST_PROJECT").ok();

    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = ExportConfig::new(
        "SELECT 1 AS n, 'a' AS s UNION ALL SELECT 2, NULL ORDER BY n",
        service_account,
        "e2e.csv",
    )
    .with_folder(temp_dir.path().join("out").to_string_lossy())
    .with_project_id(project_id);

    let report = ExportWorkflow::new(config).execute().await.unwrap();

    match report.outcome {
        ExportOutcome::WrittenToFile { path, rows } => {
            assert_eq!(rows, 2);
            assert_eq!(fs::read_to_string(path).unwrap(), "n,s\n1,a\n2,\n");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}
