//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Credential**: サービスアカウント認証情報（インラインJSON または キーファイルパス）
//! - **Destination**: 出力先フォルダとファイル名
//! - **QuerySpec / ExportTarget**: 実行するクエリとエクスポート先
//! - **ResultSet**: クエリ結果
//! - **ExportOutcome**: エクスポート結果

pub mod credential;
pub mod destination;
pub mod export_outcome;
pub mod query_spec;
pub mod result_set;
