//! bq-export - BigQuery Query Exporter
//!
//! クエリ結果をCSVファイルまたは Cloud Storage バケットに保存

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use bq_export::driver::{Args, ExportWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let workflow = ExportWorkflow::new(args.into());
    let report = workflow.execute().await?;

    log::info!("Export finished: {:?}", report.outcome);
    println!("✓ Export complete!");

    Ok(())
}
