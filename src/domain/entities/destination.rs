//! # Destination Value Object
//!
//! ローカル出力先（フォルダ + ファイル名）

use crate::domain::services::path_combiner::PathCombiner;

/// ローカル出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    folder: String,
    file_name: String,
}

impl Destination {
    /// 新しい出力先を作成
    ///
    /// # Arguments
    ///
    /// * `folder` - 出力フォルダ（空文字列ならカレントディレクトリ）
    /// * `file_name` - 出力ファイル名
    pub fn new(folder: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            file_name: file_name.into(),
        }
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// フォルダとファイル名を結合した正規化済みパス
    pub fn full_path(&self) -> String {
        PathCombiner::combine(&self.folder, &self.file_name)
    }

    /// 書き込み前に作成すべきフォルダ（空の場合は `None`）
    pub fn folder_to_create(&self) -> Option<&str> {
        if self.folder.is_empty() {
            None
        } else {
            Some(&self.folder)
        }
    }
}
