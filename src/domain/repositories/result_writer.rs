//! # Result Writer Trait
//!
//! クエリ結果のローカル書き出しを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::result_set::ResultSet;

/// 結果ライター
#[async_trait]
pub trait ResultWriter: Send + Sync {
    /// 結果を `path` に書き出す（既存ファイルは上書き）
    async fn write(&self, path: &Path, results: &ResultSet) -> Result<()>;
}
