//! # Credential Value Object
//!
//! サービスアカウント認証情報のバリューオブジェクト

use std::fmt;

/// サービスアカウント認証情報
///
/// CLIで渡された文字列が有効なJSONであればインラインの鍵、
/// そうでなければ鍵ファイルへのパスとして扱う。
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// インラインで渡されたJSON鍵
    InlineJson(String),
    /// 鍵ファイルへのパス
    KeyFile(String),
}

impl Credential {
    /// 入力文字列を分類します。
    ///
    /// # 例
    ///
    /// ```
    /// use bq_export::domain::entities::credential::Credential;
    ///
    /// let inline = Credential::parse(r#"{"type":"service_account"}"#);
    /// assert!(inline.is_inline());
    ///
    /// let path = Credential::parse("/etc/keys/sa.json");
    /// assert_eq!(path, Credential::KeyFile("/etc/keys/sa.json".to_string()));
    /// ```
    pub fn parse(input: &str) -> Self {
        if serde_json::from_str::<serde_json::Value>(input).is_ok() {
            Self::InlineJson(input.to_string())
        } else {
            Self::KeyFile(input.to_string())
        }
    }

    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::InlineJson(_))
    }

    /// 元の入力文字列
    pub fn as_str(&self) -> &str {
        match self {
            Self::InlineJson(json) => json,
            Self::KeyFile(path) => path,
        }
    }
}

// インラインJSONは秘密鍵を含むためログに出さない
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InlineJson(json) => f
                .debug_tuple("InlineJson")
                .field(&format_args!("<{} bytes redacted>", json.len()))
                .finish(),
            Self::KeyFile(path) => f.debug_tuple("KeyFile").field(path).finish(),
        }
    }
}
