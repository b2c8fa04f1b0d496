//! # ExportOutcome
//!
//! エクスポート結果

use std::path::PathBuf;

/// エクスポート結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// ローカルCSVに書き込んだ
    WrittenToFile { path: PathBuf, rows: usize },
    /// 結果が0行だったためファイルは作成していない
    NoData,
    /// バケットへエクスポートした
    ExportedToBucket { uri: String },
}
