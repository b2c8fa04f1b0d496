//! # Path Combiner Service
//!
//! 出力フォルダとファイル名を1つの正規化済みパスに結合する

/// パス結合サービス
pub struct PathCombiner;

impl PathCombiner {
    /// フォルダとファイル名を結合して正規化します。
    ///
    /// フォルダが空ならファイル名のみを正規化する。
    ///
    /// ```
    /// use bq_export::domain::services::path_combiner::PathCombiner;
    ///
    /// assert_eq!(PathCombiner::combine("", "out.csv"), "out.csv");
    /// assert_eq!(PathCombiner::combine("results/", "out.csv"), "results/out.csv");
    /// assert_eq!(PathCombiner::combine("a/./b/..", "out.csv"), "a/out.csv");
    /// ```
    pub fn combine(folder: &str, file: &str) -> String {
        if folder.is_empty() {
            Self::normalize(file)
        } else {
            Self::normalize(&format!("{}/{}", folder, file))
        }
    }

    /// POSIX の normpath と同じ規則で字句的に正規化する
    ///
    /// - 連続する `/` は1つにまとめる
    /// - `.` は取り除く
    /// - `name/..` は打ち消す（相対パス先頭の `..` は残す、ルート直下の `..` は捨てる）
    /// - 末尾の `/` は取り除く
    /// - 結果が空なら `.`
    pub fn normalize(path: &str) -> String {
        let is_absolute = path.starts_with('/');
        let mut segments: Vec<&str> = Vec::new();

        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.last().is_some_and(|last| *last != "..") {
                        segments.pop();
                    } else if !is_absolute {
                        segments.push("..");
                    }
                }
                name => segments.push(name),
            }
        }

        let joined = segments.join("/");
        if is_absolute {
            format!("/{}", joined)
        } else if joined.is_empty() {
            ".".to_string()
        } else {
            joined
        }
    }
}
