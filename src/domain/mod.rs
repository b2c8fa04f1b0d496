//! # Domain Layer
//!
//! このモジュールはエクスポート処理の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - BigQuery やファイルシステムについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: エンティティとバリューオブジェクト（Credential, Destination, QuerySpecなど）
//! - **errors**: ドメインエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（パス結合）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
