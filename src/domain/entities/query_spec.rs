//! # QuerySpec Value Object
//!
//! 実行するクエリとエクスポート先の指定

use std::path::PathBuf;

use super::destination::Destination;

/// エクスポート先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// ローカルCSVファイル
    LocalFile(PathBuf),
    /// Cloud Storage バケット内のオブジェクト
    Bucket { bucket: String, object: String },
}

impl ExportTarget {
    /// バケット宛ての場合は `gs://` URI を返す
    pub fn uri(&self) -> Option<String> {
        match self {
            Self::LocalFile(_) => None,
            Self::Bucket { bucket, object } => Some(gcs_uri(bucket, object)),
        }
    }
}

/// `gs://{bucket}/{object}`
pub fn gcs_uri(bucket: &str, object: &str) -> String {
    format!("gs://{}/{}", bucket, object)
}

/// 1回の実行で使うクエリ指定（不変）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    sql: String,
    bucket: Option<String>,
}

impl QuerySpec {
    /// 空文字列のバケット名は未指定として扱う
    pub fn new(sql: impl Into<String>, bucket: Option<String>) -> Self {
        Self {
            sql: sql.into(),
            bucket: bucket.filter(|b| !b.is_empty()),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// 出力先を決定します。
    ///
    /// バケットが指定されていればオブジェクト名はファイル名のみ（フォルダは使わない）。
    ///
    /// ```
    /// use bq_export::domain::entities::destination::Destination;
    /// use bq_export::domain::entities::query_spec::{ExportTarget, QuerySpec};
    ///
    /// let destination = Destination::new("results", "out.csv");
    ///
    /// let local = QuerySpec::new("SELECT 1", None).target(&destination);
    /// assert_eq!(local, ExportTarget::LocalFile("results/out.csv".into()));
    ///
    /// let remote = QuerySpec::new("SELECT 1", Some("mybucket".to_string())).target(&destination);
    /// assert_eq!(remote.uri().as_deref(), Some("gs://mybucket/out.csv"));
    /// ```
    pub fn target(&self, destination: &Destination) -> ExportTarget {
        match &self.bucket {
            Some(bucket) => ExportTarget::Bucket {
                bucket: bucket.clone(),
                object: destination.file_name().to_string(),
            },
            None => ExportTarget::LocalFile(PathBuf::from(destination.full_path())),
        }
    }
}
