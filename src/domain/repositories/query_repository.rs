//! # Query Repository Trait
//!
//! クエリ実行とバケットへのエクスポートを抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::result_set::ResultSet;

/// クエリリポジトリ
///
/// クエリを実行して結果を取得する、または結果テーブルをバケットへ書き出す
#[async_trait]
pub trait QueryRepository: Send + Sync {
    /// クエリを実行し、全ページ分の結果を取得する
    ///
    /// # Errors
    ///
    /// クエリの実行または結果の取得に失敗した場合にエラーを返す
    async fn fetch_results(&self, sql: &str) -> Result<ResultSet>;

    /// クエリを実行し、結果テーブルを `destination_uri` へCSVとして書き出す
    ///
    /// # Arguments
    ///
    /// * `sql` - 実行するクエリ
    /// * `destination_uri` - `gs://bucket/object` 形式の出力先
    ///
    /// # Errors
    ///
    /// クエリまたはエクスポートジョブが失敗した場合にエラーを返す
    async fn extract_to_bucket(&self, sql: &str, destination_uri: &str) -> Result<()>;
}
