//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod bigquery_query_repository;
pub mod csv_result_writer;
