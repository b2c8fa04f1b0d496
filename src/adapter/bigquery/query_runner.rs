//! BigQuery Query Execution
//!
//! クエリの実行、結果のページング、バケットへのエクスポート

use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Duration;
use tokio::time::sleep;

use super::client::BigQueryJobs;
use super::models::{JobHandle, QueryPage};
use crate::domain::entities::result_set::ResultSet;
use crate::domain::errors::ExportError;

/// Delay between polls of a running job
pub const JOB_POLL_INTERVAL_MS: u64 = 500;

/// Run a query and wait until its job is complete
///
/// The returned page is the first page of results.
pub async fn run_query<T: BigQueryJobs + ?Sized>(
    client: &T,
    project_id: &str,
    sql: &str,
) -> Result<QueryPage> {
    let mut page = client
        .query(project_id, sql)
        .await
        .with_context(|| format!("Failed to execute your query: {}", sql))?;

    while !page.complete {
        debug!(
            "Query job {} still running, polling again in {}ms",
            page.job.job_id, JOB_POLL_INTERVAL_MS
        );
        sleep(Duration::from_millis(JOB_POLL_INTERVAL_MS)).await;

        page = client
            .query_results(project_id, &page.job, None)
            .await
            .with_context(|| format!("Failed to poll query job {}", page.job.job_id))?;
    }

    info!("Query job {} complete", page.job.job_id);
    Ok(page)
}

/// Run a query and collect every page of its results
pub async fn collect_result_set<T: BigQueryJobs + ?Sized>(
    client: &T,
    project_id: &str,
    sql: &str,
) -> Result<ResultSet> {
    let QueryPage {
        job,
        columns,
        rows,
        page_token,
        ..
    } = run_query(client, project_id, sql).await?;

    let mut results = ResultSet::new(columns.unwrap_or_default());
    results.extend(rows);

    let mut next_token = page_token;
    let mut page_count = 1;
    while let Some(token) = next_token {
        let page = client
            .query_results(project_id, &job, Some(token))
            .await
            .with_context(|| format!("Failed to fetch results of query job {}", job.job_id))?;

        results.set_columns_if_missing(page.columns);
        results.extend(page.rows);
        next_token = page.page_token;
        page_count += 1;
    }

    info!(
        "Fetched {} rows in {} pages from job {}",
        results.len(),
        page_count,
        job.job_id
    );
    Ok(results)
}

/// Poll a job until it is done; a job that finished with an error result is an error
pub async fn wait_for_job<T: BigQueryJobs + ?Sized>(
    client: &T,
    project_id: &str,
    job: &JobHandle,
) -> Result<()> {
    loop {
        let status = client
            .job_status(project_id, job)
            .await
            .with_context(|| format!("Failed to check status of job {}", job.job_id))?;

        if status.done {
            return match status.error {
                Some(message) => Err(ExportError::JobFailed {
                    job_id: job.job_id.clone(),
                    message,
                }
                .into()),
                None => Ok(()),
            };
        }

        debug!(
            "Job {} still running, polling again in {}ms",
            job.job_id, JOB_POLL_INTERVAL_MS
        );
        sleep(Duration::from_millis(JOB_POLL_INTERVAL_MS)).await;
    }
}

/// Run a query and extract its destination table to a `gs://` URI as CSV
///
/// The extract runs in `location` when given, otherwise in the query job's location.
pub async fn extract_query_to_bucket<T: BigQueryJobs + ?Sized>(
    client: &T,
    project_id: &str,
    sql: &str,
    destination_uri: &str,
    location: Option<String>,
) -> Result<()> {
    let page = run_query(client, project_id, sql).await?;

    let table = client
        .destination_table(project_id, &page.job)
        .await?
        .ok_or_else(|| ExportError::MissingDestinationTable {
            job_id: page.job.job_id.clone(),
        })?;
    info!(
        "Query results stored in {}.{}.{}",
        table.project_id, table.dataset_id, table.table_id
    );

    let location = location.or_else(|| page.job.location.clone());
    let extract_job = client
        .extract_table(project_id, &table, destination_uri, location)
        .await
        .with_context(|| format!("Failed to export query results to {}", destination_uri))?;

    wait_for_job(client, project_id, &extract_job)
        .await
        .with_context(|| format!("Failed to export query results to {}", destination_uri))
}
