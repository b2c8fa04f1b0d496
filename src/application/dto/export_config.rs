//! # Export Configuration DTO
//!
//! エクスポート設定のData Transfer Object

/// エクスポート設定
///
/// CLI引数から組み立てられ、1回の実行の間は変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// 実行するSQL
    pub query: String,
    /// インラインJSON鍵 または 鍵ファイルのパス
    pub service_account: String,
    /// 出力ファイル名（バケット出力時はオブジェクト名）
    pub destination_file_name: String,
    /// 出力フォルダ（空文字列ならカレントディレクトリ）
    pub destination_folder_name: String,
    /// 指定された場合はローカルではなくバケットへエクスポート
    pub bucket: Option<String>,
    /// クエリジョブを実行するGCPプロジェクト（未指定なら認証情報から取得）
    pub project_id: Option<String>,
    /// ジョブのロケーション（例: "US", "asia-northeast1"）
    pub location: Option<String>,
}

impl ExportConfig {
    /// 必須項目だけを指定して設定を作成します。
    ///
    /// ```
    /// use bq_export::application::dto::export_config::ExportConfig;
    ///
    /// let config = ExportConfig::new("SELECT 1", "/etc/keys/sa.json", "out.csv")
    ///     .with_folder("results")
    ///     .with_bucket(Some("mybucket".to_string()));
    ///
    /// assert_eq!(config.destination_folder_name, "results");
    /// assert_eq!(config.bucket.as_deref(), Some("mybucket"));
    /// assert_eq!(config.project_id, None);
    /// ```
    pub fn new(
        query: impl Into<String>,
        service_account: impl Into<String>,
        destination_file_name: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            service_account: service_account.into(),
            destination_file_name: destination_file_name.into(),
            destination_folder_name: String::new(),
            bucket: None,
            project_id: None,
            location: None,
        }
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.destination_folder_name = folder.into();
        self
    }

    pub fn with_bucket(mut self, bucket: Option<String>) -> Self {
        self.bucket = bucket;
        self
    }

    pub fn with_project_id(mut self, project_id: Option<String>) -> Self {
        self.project_id = project_id;
        self
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }
}
