//! # Domain Errors
//!
//! 下位のエラーを持たないドメインレベルの失敗

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("no BigQuery project id: pass --project-id or use a credential that names a project")]
    MissingProjectId,

    #[error("query job {job_id} has no destination table to extract")]
    MissingDestinationTable { job_id: String },

    #[error("job {job_id} failed: {message}")]
    JobFailed { job_id: String, message: String },
}
