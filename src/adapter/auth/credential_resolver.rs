//! Credential Resolution
//!
//! `--service-account` の値をクライアントが読める鍵ファイルパスに解決する

use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::domain::entities::credential::Credential;

/// 解決済みの認証情報
///
/// インラインJSONの場合は一時ファイルを所有する。
/// `cleanup` を呼ばずに drop された場合（途中で失敗した場合）も一時ファイルは削除される。
#[derive(Debug)]
pub struct ResolvedCredential {
    env_value: String,
    temp_file: Option<NamedTempFile>,
}

impl ResolvedCredential {
    /// `GOOGLE_APPLICATION_CREDENTIALS` に設定する値
    pub fn env_value(&self) -> &str {
        &self.env_value
    }

    /// 後始末が必要な一時ファイルのパス
    pub fn cleanup_path(&self) -> Option<&Path> {
        self.temp_file.as_ref().map(NamedTempFile::path)
    }

    /// 一時ファイルを削除する（無ければ何もしない）
    pub fn cleanup(self) -> Result<()> {
        if let Some(temp_file) = self.temp_file {
            println!(
                "✓ Removing temporary credentials file {}",
                temp_file.path().display()
            );
            temp_file
                .close()
                .context("Failed to remove temporary credentials file")?;
        }
        Ok(())
    }
}

/// 認証情報を解決する
///
/// - 有効なJSONなら一時ファイルに書き出し、そのパスを返す
/// - それ以外は鍵ファイルのパスとしてそのまま返す
///
/// # Errors
///
/// 一時ファイルの作成または書き込みに失敗した場合にエラーを返す
pub fn resolve_credential(input: &str) -> Result<ResolvedCredential> {
    match Credential::parse(input) {
        Credential::InlineJson(json) => {
            let mut temp_file = tempfile::Builder::new()
                .prefix("bq-export-credentials-")
                .suffix(".json")
                .tempfile()
                .context("Failed to create temporary credentials file")?;
            temp_file
                .write_all(json.as_bytes())
                .context("Failed to write temporary credentials file")?;
            temp_file
                .flush()
                .context("Failed to write temporary credentials file")?;

            let env_value = temp_file.path().to_string_lossy().to_string();
            println!("✓ Storing json credentials temporarily at {}", env_value);

            Ok(ResolvedCredential {
                env_value,
                temp_file: Some(temp_file),
            })
        }
        Credential::KeyFile(path) => {
            println!("✓ Using specified json credentials file");
            info!("Credentials file: {}", path);

            Ok(ResolvedCredential {
                env_value: path,
                temp_file: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const INLINE_KEY: &str = r#"{"type":"service_account","project_id":"demo-project","client_email":"sa@demo-project.iam.gserviceaccount.com"}"#;

    #[test]
    fn test_inline_json_is_materialized() {
        let resolved = resolve_credential(INLINE_KEY).unwrap();

        let path = resolved.cleanup_path().expect("inline JSON needs cleanup");
        assert!(!path.as_os_str().is_empty());
        assert_eq!(resolved.env_value(), path.to_string_lossy());
        assert_eq!(fs::read_to_string(path).unwrap(), INLINE_KEY);
    }

    #[test]
    fn test_key_file_path_is_passed_through() {
        let resolved = resolve_credential("/etc/keys/sa.json").unwrap();

        assert_eq!(resolved.cleanup_path(), None);
        assert_eq!(resolved.env_value(), "/etc/keys/sa.json");
    }

    #[test]
    fn test_cleanup_removes_temp_file() {
        let resolved = resolve_credential(INLINE_KEY).unwrap();
        let path = resolved.cleanup_path().unwrap().to_path_buf();
        assert!(path.exists());

        resolved.cleanup().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_temp_file() {
        let path = {
            let resolved = resolve_credential(INLINE_KEY).unwrap();
            resolved.cleanup_path().unwrap().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_cleanup_without_temp_file_is_noop() {
        let resolved = resolve_credential("./relative/key.json").unwrap();
        assert!(resolved.cleanup().is_ok());
    }
}
