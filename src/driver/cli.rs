//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::application::dto::export_config::ExportConfig;

/// BigQueryのクエリ結果をCSVとして保存するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "bq-export")]
#[command(
    about = "Run a BigQuery query and store the results as CSV locally or in a GCS bucket",
    long_about = None
)]
pub struct Args {
    /// SQL query to execute
    #[arg(long)]
    pub query: String,

    /// Service account key: inline JSON or a path to the key file
    #[arg(long)]
    pub service_account: String,

    /// Output file name (object name when exporting to a bucket)
    #[arg(long, default_value = "output.csv")]
    pub destination_file_name: String,

    /// Output folder, created if missing
    #[arg(long, default_value = "")]
    pub destination_folder_name: String,

    /// Export to this Cloud Storage bucket instead of a local file
    #[arg(long = "gcs-bucket")]
    pub bucket: Option<String>,

    /// Project to run the query job in (defaults to the key's project)
    #[arg(long)]
    pub project_id: Option<String>,

    /// Job location, e.g. US or asia-northeast1
    #[arg(long)]
    pub location: Option<String>,
}

impl From<Args> for ExportConfig {
    fn from(args: Args) -> Self {
        ExportConfig::new(args.query, args.service_account, args.destination_file_name)
            .with_folder(args.destination_folder_name)
            .with_bucket(args.bucket)
            .with_project_id(args.project_id)
            .with_location(args.location)
    }
}
