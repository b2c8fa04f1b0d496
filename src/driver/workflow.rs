//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapter::auth::{resolve_credential, ResolvedCredential};
use crate::adapter::bigquery::client::{BigQueryClientFactory, RealClientFactory};
use crate::adapter::repositories::bigquery_query_repository::BigQueryQueryRepository;
use crate::adapter::repositories::csv_result_writer::CsvResultWriter;
use crate::application::dto::export_config::ExportConfig;
use crate::application::use_cases::export_query::ExportQueryUseCase;
use crate::domain::entities::destination::Destination;
use crate::domain::entities::export_outcome::ExportOutcome;
use crate::domain::entities::query_spec::QuerySpec;

/// 1回の実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// フォルダとファイル名を結合したローカル出力パス（バケット出力時は未使用）
    pub destination_path: String,
    /// インラインJSON鍵を書き出した一時ファイル（実行終了時には削除済み）
    pub temp_credential_path: Option<PathBuf>,
    pub outcome: ExportOutcome,
}

/// Create the destination folder if a non-empty one was given and it does not exist yet
pub fn ensure_destination_folder(destination: &Destination) -> Result<()> {
    if let Some(folder) = destination.folder_to_create() {
        if !Path::new(folder).exists() {
            fs::create_dir_all(folder)
                .with_context(|| format!("Failed to create destination folder {}", folder))?;
            println!("✓ Created destination folder {}", folder);
        }
    }
    Ok(())
}

/// Query Export Workflow
pub struct ExportWorkflow {
    config: ExportConfig,
}

impl ExportWorkflow {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Execute the export against BigQuery
    pub async fn execute(&self) -> Result<ExportReport> {
        self.execute_with(|credential| {
            Arc::new(RealClientFactory::new(
                credential.env_value().to_string(),
                self.config.project_id.clone(),
            )) as Arc<dyn BigQueryClientFactory>
        })
        .await
    }

    /// Execute the export with a client factory built from the resolved credential
    ///
    /// The temporary credential file is removed on every exit path.
    pub async fn execute_with<B>(&self, build_factory: B) -> Result<ExportReport>
    where
        B: FnOnce(&ResolvedCredential) -> Arc<dyn BigQueryClientFactory>,
    {
        info!("Starting BigQuery export...");

        // Dropping the credential on an early return removes its temp file
        let credential = resolve_credential(&self.config.service_account)?;
        let temp_credential_path = credential.cleanup_path().map(Path::to_path_buf);

        let destination = Destination::new(
            self.config.destination_folder_name.clone(),
            self.config.destination_file_name.clone(),
        );
        let destination_path = destination.full_path();
        info!("Destination path: {}", destination_path);

        ensure_destination_folder(&destination)?;

        let factory = build_factory(&credential);
        let connection = factory.create_client().await.with_context(|| {
            format!(
                "Error accessing BigQuery with service account {}",
                credential.env_value()
            )
        })?;
        println!(
            "✓ Created BigQuery client (project: {})",
            connection.project_id
        );

        let query_repository = Arc::new(BigQueryQueryRepository::new(
            connection,
            self.config.location.clone(),
        ));
        let result_writer = Arc::new(CsvResultWriter::new());
        let use_case = ExportQueryUseCase::new(query_repository, result_writer);

        let spec = QuerySpec::new(self.config.query.clone(), self.config.bucket.clone());
        let outcome = use_case.execute(&spec, &destination).await?;

        credential.cleanup()?;

        Ok(ExportReport {
            destination_path,
            temp_credential_path,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_destination_folder_creates_nested() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("results").join("daily");
        let destination = Destination::new(folder.to_string_lossy(), "out.csv");

        ensure_destination_folder(&destination).unwrap();

        assert!(folder.is_dir());
    }

    #[test]
    fn test_ensure_destination_folder_existing() {
        let temp_dir = TempDir::new().unwrap();
        let destination = Destination::new(temp_dir.path().to_string_lossy(), "out.csv");

        assert!(ensure_destination_folder(&destination).is_ok());
    }

    #[test]
    fn test_ensure_destination_folder_empty_is_noop() {
        let destination = Destination::new("", "out.csv");
        assert!(ensure_destination_folder(&destination).is_ok());
    }

    #[test]
    fn test_ensure_destination_folder_blocked_by_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let folder = blocker.join("results");
        let destination = Destination::new(folder.to_string_lossy(), "out.csv");

        assert!(ensure_destination_folder(&destination).is_err());
    }
}
