//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ExportQueryUseCase**: クエリを実行し、結果をCSVまたはバケットへエクスポート

pub mod export_query;
