//! BigQuery Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use google_cloud_bigquery::client::Client;
use google_cloud_bigquery::http::job::get::GetJobRequest;
use google_cloud_bigquery::http::job::get_query_results::GetQueryResultsRequest;
use google_cloud_bigquery::http::job::query::QueryRequest;
use google_cloud_bigquery::http::job::{
    Job, JobConfiguration, JobConfigurationExtract, JobConfigurationExtractSource, JobReference,
    JobState, JobType,
};
use google_cloud_bigquery::http::table::TableReference;
use log::info;

#[cfg(test)]
use mockall::automock;

use super::models::{JobHandle, JobStatusSummary, QueryPage, TableRef};
use crate::adapter::auth::gcp_auth::{create_bigquery_client, select_project_id};

/// Trait for the BigQuery job operations the exporter needs
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BigQueryJobs: Send + Sync {
    /// Start a query job and return its first page (possibly incomplete)
    async fn query(&self, project_id: &str, sql: &str) -> Result<QueryPage>;

    /// Fetch a page of results for a query job; `None` fetches the first page
    async fn query_results(
        &self,
        project_id: &str,
        job: &JobHandle,
        page_token: Option<String>,
    ) -> Result<QueryPage>;

    /// Look up the table a finished query job wrote its results to
    async fn destination_table(&self, project_id: &str, job: &JobHandle)
        -> Result<Option<TableRef>>;

    /// Start an extract job writing `table` to `destination_uri` as CSV with a header row
    async fn extract_table(
        &self,
        project_id: &str,
        table: &TableRef,
        destination_uri: &str,
        location: Option<String>,
    ) -> Result<JobHandle>;

    async fn job_status(&self, project_id: &str, job: &JobHandle) -> Result<JobStatusSummary>;
}

/// BigQuery client that owns the Client instance
pub struct OwnedBigQueryClient {
    client: Client,
}

impl OwnedBigQueryClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl BigQueryJobs for OwnedBigQueryClient {
    async fn query(&self, project_id: &str, sql: &str) -> Result<QueryPage> {
        let request = QueryRequest {
            query: sql.to_string(),
            use_legacy_sql: false,
            ..Default::default()
        };

        let response = self
            .client
            .job()
            .query(project_id, &request)
            .await
            .context("BigQuery query failed")?;

        Ok(QueryPage::from_response(
            response.job_reference,
            response.job_complete,
            response.schema,
            response.rows,
            response.page_token,
        ))
    }

    async fn query_results(
        &self,
        project_id: &str,
        job: &JobHandle,
        page_token: Option<String>,
    ) -> Result<QueryPage> {
        let request = GetQueryResultsRequest {
            page_token,
            location: job.location.clone(),
            ..Default::default()
        };

        let response = self
            .client
            .job()
            .get_query_results(project_id, &job.job_id, &request)
            .await
            .context("BigQuery getQueryResults failed")?;

        Ok(QueryPage::from_response(
            response.job_reference,
            response.job_complete,
            response.schema,
            response.rows,
            response.page_token,
        ))
    }

    async fn destination_table(
        &self,
        project_id: &str,
        job: &JobHandle,
    ) -> Result<Option<TableRef>> {
        let request = GetJobRequest {
            location: job.location.clone(),
        };

        let detail = self
            .client
            .job()
            .get(project_id, &job.job_id, &request)
            .await
            .context("BigQuery job lookup failed")?;

        Ok(match detail.configuration.job {
            JobType::Query(query) => query.destination_table.map(TableRef::from),
            _ => None,
        })
    }

    async fn extract_table(
        &self,
        project_id: &str,
        table: &TableRef,
        destination_uri: &str,
        location: Option<String>,
    ) -> Result<JobHandle> {
        let job = Job {
            job_reference: JobReference {
                project_id: project_id.to_string(),
                job_id: format!("bq_export_{}", uuid::Uuid::new_v4().simple()),
                location,
            },
            configuration: JobConfiguration {
                job: JobType::Extract(JobConfigurationExtract {
                    destination_uris: vec![destination_uri.to_string()],
                    print_header: Some(true),
                    source: JobConfigurationExtractSource::SourceTable(TableReference::from(
                        table,
                    )),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        };

        let created = self
            .client
            .job()
            .create(&job)
            .await
            .context("BigQuery extract job creation failed")?;

        info!("Started extract job {}", created.job_reference.job_id);
        Ok(JobHandle::from(created.job_reference))
    }

    async fn job_status(&self, project_id: &str, job: &JobHandle) -> Result<JobStatusSummary> {
        let request = GetJobRequest {
            location: job.location.clone(),
        };

        let detail = self
            .client
            .job()
            .get(project_id, &job.job_id, &request)
            .await
            .context("BigQuery job lookup failed")?;

        Ok(JobStatusSummary {
            done: matches!(detail.status.state, JobState::Done),
            error: detail.status.error_result.map(|e| format!("{:?}", e)),
        })
    }
}

/// An authenticated client bound to the project its jobs run in
pub struct BigQueryConnection {
    pub client: Box<dyn BigQueryJobs>,
    pub project_id: String,
}

/// Factory for creating BigQuery clients
#[async_trait]
pub trait BigQueryClientFactory: Send + Sync {
    async fn create_client(&self) -> Result<BigQueryConnection>;
}

/// Production implementation of BigQueryClientFactory
pub struct RealClientFactory {
    key_path: String,
    project_id: Option<String>,
}

impl RealClientFactory {
    /// # Arguments
    ///
    /// * `key_path` - 鍵ファイルのパス（`~` は展開される）
    /// * `project_id` - ジョブを実行するプロジェクト（未指定なら鍵ファイルから取得）
    pub fn new(key_path: String, project_id: Option<String>) -> Self {
        Self {
            key_path,
            project_id,
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl BigQueryClientFactory for RealClientFactory {
    async fn create_client(&self) -> Result<BigQueryConnection> {
        let (client, credential_project) = create_bigquery_client(&self.key_path).await?;
        let project_id = select_project_id(self.project_id.clone(), credential_project)?;

        Ok(BigQueryConnection {
            client: Box::new(OwnedBigQueryClient::new(client)),
            project_id,
        })
    }
}
