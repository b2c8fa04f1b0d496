//! BigQuery Job Models
//!
//! SDKの型から切り離したジョブ・結果ページの表現

use chrono::DateTime;
use google_cloud_bigquery::http::job::JobReference;
use google_cloud_bigquery::http::table::{
    TableFieldSchema, TableFieldType, TableReference, TableSchema,
};
use google_cloud_bigquery::http::tabledata::list::{Tuple, Value};

use crate::domain::entities::result_set::ResultRow;

/// 実行中または完了したジョブの識別子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    pub job_id: String,
    pub location: Option<String>,
}

impl From<JobReference> for JobHandle {
    fn from(reference: JobReference) -> Self {
        Self {
            job_id: reference.job_id,
            location: reference.location,
        }
    }
}

/// クエリ結果の1ページ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage {
    pub job: JobHandle,
    /// ジョブが完了していない場合は `false`（行もスキーマも無い）
    pub complete: bool,
    pub columns: Option<Vec<String>>,
    pub rows: Vec<ResultRow>,
    pub page_token: Option<String>,
}

impl QueryPage {
    pub fn from_response(
        job_reference: JobReference,
        complete: bool,
        schema: Option<TableSchema>,
        rows: Option<Vec<Tuple>>,
        page_token: Option<String>,
    ) -> Self {
        let fields = schema.map(|schema| schema.fields);
        let rows = rows
            .unwrap_or_default()
            .iter()
            .map(|tuple| tuple_to_row(tuple, fields.as_deref()))
            .collect();

        Self {
            job: JobHandle::from(job_reference),
            complete,
            columns: fields.map(column_names),
            rows,
            page_token: page_token.filter(|token| !token.is_empty()),
        }
    }
}

/// ジョブの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatusSummary {
    pub done: bool,
    pub error: Option<String>,
}

/// テーブル参照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
}

impl From<TableReference> for TableRef {
    fn from(reference: TableReference) -> Self {
        Self {
            project_id: reference.project_id,
            dataset_id: reference.dataset_id,
            table_id: reference.table_id,
        }
    }
}

impl From<&TableRef> for TableReference {
    fn from(table: &TableRef) -> Self {
        TableReference {
            project_id: table.project_id.clone(),
            dataset_id: table.dataset_id.clone(),
            table_id: table.table_id.clone(),
        }
    }
}

pub fn column_names(fields: Vec<TableFieldSchema>) -> Vec<String> {
    fields.into_iter().map(|field| field.name).collect()
}

/// 1行をCSV用の文字列に変換する（スキーマが無い場合はREST表現のまま）
pub fn tuple_to_row(tuple: &Tuple, fields: Option<&[TableFieldSchema]>) -> ResultRow {
    tuple
        .f
        .iter()
        .enumerate()
        .map(|(i, cell)| cell_to_string(&cell.v, fields.and_then(|f| f.get(i))))
        .collect()
}

/// セル値をCSV用の文字列に変換する
///
/// NULL は `None`、REPEATED / RECORD はJSON配列の文字列になる。
/// TIMESTAMP はエクストラクトジョブと同じ `YYYY-MM-DD HH:MM:SS[.ffffff] UTC` 形式
pub fn cell_to_string(value: &Value, field: Option<&TableFieldSchema>) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(format_scalar(s, field)),
        nested => Some(value_to_json(nested, field).to_string()),
    }
}

fn value_to_json(value: &Value, field: Option<&TableFieldSchema>) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::String(s) => serde_json::Value::String(format_scalar(s, field)),
        Value::Array(cells) => cells
            .iter()
            .map(|cell| value_to_json(&cell.v, field))
            .collect(),
        Value::Struct(tuple) => {
            let sub_fields = field.and_then(|f| f.fields.as_deref());
            tuple
                .f
                .iter()
                .enumerate()
                .map(|(i, cell)| value_to_json(&cell.v, sub_fields.and_then(|f| f.get(i))))
                .collect()
        }
    }
}

fn format_scalar(raw: &str, field: Option<&TableFieldSchema>) -> String {
    match field.map(|f| &f.data_type) {
        Some(TableFieldType::Timestamp) => {
            format_timestamp(raw).unwrap_or_else(|| raw.to_string())
        }
        _ => raw.to_string(),
    }
}

/// Format a REST TIMESTAMP value (epoch seconds as a float string) as a UTC datetime
pub fn format_timestamp(raw: &str) -> Option<String> {
    let seconds: f64 = raw.parse().ok()?;
    if !seconds.is_finite() {
        return None;
    }
    let micros = (seconds * 1_000_000.0).round() as i64;
    let datetime = DateTime::from_timestamp_micros(micros)?;
    Some(datetime.format("%Y-%m-%d %H:%M:%S%.f UTC").to_string())
}
