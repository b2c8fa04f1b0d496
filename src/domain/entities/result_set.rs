//! # ResultSet
//!
//! クエリ結果（全ページ分）

/// 1行分のセル。NULL は `None`
pub type ResultRow = Vec<Option<String>>;

/// クエリ結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<ResultRow>,
}

impl ResultSet {
    /// 列名を指定して空の結果を作成
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// 列名がまだ無ければ設定する
    pub fn set_columns_if_missing(&mut self, columns: Option<Vec<String>>) {
        if self.columns.is_empty() {
            if let Some(columns) = columns {
                self.columns = columns;
            }
        }
    }

    /// ページの行を末尾に追加
    pub fn extend(&mut self, rows: impl IntoIterator<Item = ResultRow>) {
        self.rows.extend(rows);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let results = ResultSet::new(vec!["id".to_string()]);
        assert!(results.is_empty());
        assert_eq!(results.len(), 0);
        assert_eq!(results.columns(), ["id".to_string()]);
    }

    #[test]
    fn test_extend_keeps_page_order() {
        let mut results = ResultSet::new(vec!["id".to_string()]);
        results.extend(vec![vec![Some("1".to_string())]]);
        results.extend(vec![vec![Some("2".to_string())], vec![None]]);

        assert_eq!(results.len(), 3);
        assert_eq!(results.rows()[0], vec![Some("1".to_string())]);
        assert_eq!(results.rows()[1], vec![Some("2".to_string())]);
        assert_eq!(results.rows()[2], vec![None]);
    }

    #[test]
    fn test_set_columns_if_missing() {
        let mut results = ResultSet::default();
        results.set_columns_if_missing(None);
        assert!(results.columns().is_empty());

        results.set_columns_if_missing(Some(vec!["a".to_string()]));
        results.set_columns_if_missing(Some(vec!["b".to_string()]));
        assert_eq!(results.columns(), ["a".to_string()]);
    }
}
