//! # bq-export
//!
//! BigQuery のクエリ結果をローカルCSVまたは Cloud Storage バケットに保存するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 認証情報・出力先・クエリ指定とパス結合ルール（外部依存なし）
//! - **Application層**: エクスポートのユースケース
//! - **Adapter層**: 外部システムとの統合（BigQuery, ファイルシステム, 一時ファイル）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
