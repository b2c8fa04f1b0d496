//! # Export Query Use Case
//!
//! クエリ結果エクスポートユースケース

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::domain::entities::destination::Destination;
use crate::domain::entities::export_outcome::ExportOutcome;
use crate::domain::entities::query_spec::{gcs_uri, ExportTarget, QuerySpec};
use crate::domain::repositories::query_repository::QueryRepository;
use crate::domain::repositories::result_writer::ResultWriter;

/// クエリ結果エクスポートユースケース
///
/// バケットが指定されていれば結果テーブルをバケットへ、
/// そうでなければ結果をローカルCSVへ書き出す
pub struct ExportQueryUseCase<Q: QueryRepository, W: ResultWriter> {
    query_repository: Arc<Q>,
    result_writer: Arc<W>,
}

impl<Q: QueryRepository, W: ResultWriter> ExportQueryUseCase<Q, W> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `query_repository` - クエリリポジトリ
    /// * `result_writer` - ローカル出力用ライター
    pub fn new(query_repository: Arc<Q>, result_writer: Arc<W>) -> Self {
        Self {
            query_repository,
            result_writer,
        }
    }

    /// クエリを実行してエクスポートする
    ///
    /// # Returns
    ///
    /// エクスポート結果。0行の場合はファイルを作らず `ExportOutcome::NoData`
    ///
    /// # Errors
    ///
    /// クエリの実行、エクスポート、書き込みのいずれかに失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        spec: &QuerySpec,
        destination: &Destination,
    ) -> Result<ExportOutcome> {
        let target = spec.target(destination);
        info!("Export target: {:?}", target);

        match target {
            ExportTarget::Bucket { bucket, object } => {
                let uri = gcs_uri(&bucket, &object);
                self.query_repository
                    .extract_to_bucket(spec.sql(), &uri)
                    .await?;

                println!("✓ Successfully exported your query to {}", uri);
                Ok(ExportOutcome::ExportedToBucket { uri })
            }
            ExportTarget::LocalFile(path) => {
                let results = self.query_repository.fetch_results(spec.sql()).await?;

                if results.is_empty() {
                    println!("⚠ No data was found. File not created");
                    return Ok(ExportOutcome::NoData);
                }

                self.result_writer
                    .write(&path, &results)
                    .await
                    .with_context(|| {
                        format!("Failed to write the data to csv {}", path.display())
                    })?;

                println!(
                    "✓ Successfully stored query results to {} ({} rows)",
                    path.display(),
                    results.len()
                );
                Ok(ExportOutcome::WrittenToFile {
                    path,
                    rows: results.len(),
                })
            }
        }
    }
}
