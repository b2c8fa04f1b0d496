//! CSV Result Writer Implementation
//!
//! ResultWriterのCSVファイル実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::path::Path;

use crate::domain::entities::result_set::ResultSet;
use crate::domain::repositories::result_writer::ResultWriter;

/// CSVファイルライター
///
/// 1行目に列名、以降に1行1レコードで書き出す。NULL は空フィールド。
#[derive(Debug, Default)]
pub struct CsvResultWriter;

impl CsvResultWriter {
    pub fn new() -> Self {
        Self
    }

    /// ファイルに書き出す（同期処理）
    fn write_sync(path: &Path, results: &ResultSet) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        if !results.columns().is_empty() {
            writer
                .write_record(results.columns())
                .context("Failed to write CSV header")?;
        }

        for row in results.rows() {
            writer
                .write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))
                .context("Failed to write CSV record")?;
        }

        writer.flush().context("Failed to flush CSV file")?;

        info!("Wrote {} rows to {}", results.len(), path.display());
        Ok(())
    }
}

#[async_trait]
impl ResultWriter for CsvResultWriter {
    async fn write(&self, path: &Path, results: &ResultSet) -> Result<()> {
        Self::write_sync(path, results)
    }
}
