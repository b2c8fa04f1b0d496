//! BigQuery Adapter Modules
//!
//! BigQuery統合のためのアダプターモジュール

pub mod client;
pub mod models;
pub mod query_runner;
