//! BigQuery Query Repository Implementation
//!
//! QueryRepositoryのBigQuery実装

use anyhow::Result;
use async_trait::async_trait;

use crate::adapter::bigquery::client::BigQueryConnection;
use crate::adapter::bigquery::query_runner::{collect_result_set, extract_query_to_bucket};
use crate::domain::entities::result_set::ResultSet;
use crate::domain::repositories::query_repository::QueryRepository;

/// BigQueryクエリリポジトリ
pub struct BigQueryQueryRepository {
    connection: BigQueryConnection,
    location: Option<String>,
}

impl BigQueryQueryRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `connection` - 認証済みクライアントとプロジェクト
    /// * `location` - エクスポートジョブのロケーション（未指定ならクエリジョブに従う）
    pub fn new(connection: BigQueryConnection, location: Option<String>) -> Self {
        Self {
            connection,
            location,
        }
    }
}

#[async_trait]
impl QueryRepository for BigQueryQueryRepository {
    async fn fetch_results(&self, sql: &str) -> Result<ResultSet> {
        collect_result_set(
            self.connection.client.as_ref(),
            &self.connection.project_id,
            sql,
        )
        .await
    }

    async fn extract_to_bucket(&self, sql: &str, destination_uri: &str) -> Result<()> {
        extract_query_to_bucket(
            self.connection.client.as_ref(),
            &self.connection.project_id,
            sql,
            destination_uri,
            self.location.clone(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::bigquery::client::MockBigQueryJobs;
    use crate::adapter::bigquery::models::{JobHandle, QueryPage};

    fn connection(mock: MockBigQueryJobs) -> BigQueryConnection {
        BigQueryConnection {
            client: Box::new(mock),
            project_id: "billing-project".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_results_uses_connection_project() {
        let mut mock = MockBigQueryJobs::new();
        mock.expect_query()
            .withf(|project, _| project == "billing-project")
            .times(1)
            .returning(|_, _| {
                Ok(QueryPage {
                    job: JobHandle {
                        job_id: "job-1".to_string(),
                        location: None,
                    },
                    complete: true,
                    columns: Some(vec!["n".to_string()]),
                    rows: vec![vec![Some("1".to_string())]],
                    page_token: None,
                })
            });

        let repo = BigQueryQueryRepository::new(connection(mock), None);
        let results = repo.fetch_results("SELECT 1 AS n").await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results.columns(), ["n".to_string()]);
    }

    #[tokio::test]
    async fn test_extract_failure_propagates() {
        let mut mock = MockBigQueryJobs::new();
        mock.expect_query()
            .returning(|_, _| Err(anyhow::anyhow!("403 Access Denied")));
        mock.expect_extract_table().never();

        let repo = BigQueryQueryRepository::new(connection(mock), Some("US".to_string()));
        let result = repo
            .extract_to_bucket("SELECT 1", "gs://mybucket/out.csv")
            .await;

        assert!(result.is_err());
    }
}
