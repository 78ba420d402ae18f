//! Result rows and result sets.

use crate::CellValue;
use bucket_error::{QueryError, QueryErrorKind};
use serde_json::Value;
use std::collections::BTreeMap;

/// One row of a query result, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    cells: BTreeMap<String, CellValue>,
}

impl ResultRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell and returns the row.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    /// Sets a cell.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// The cell for a column, if the row has a non-null value for it.
    pub fn value(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column).filter(|cell| !cell.is_null())
    }

    /// Number of cells, including explicit nulls.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Ingests a row from a JSON object.
    pub fn from_json(value: &Value) -> Result<Self, QueryError> {
        let object = value.as_object().ok_or_else(|| {
            QueryError::new(QueryErrorKind::MalformedResult(format!(
                "expected a row object, got {}",
                value
            )))
        })?;

        let mut row = ResultRow::new();
        for (column, cell) in object {
            row.insert(column.clone(), CellValue::from_json(cell)?);
        }
        Ok(row)
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for ResultRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = ResultRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// Rows in the order the query layer returned them.
#[derive(Debug, Clone, Default, PartialEq, derive_more::From)]
pub struct ResultSet {
    rows: Vec<ResultRow>,
}

impl ResultSet {
    /// Creates a result set from rows.
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    /// Rows in result order.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Iterates rows in result order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the result has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ingests a result set from a JSON array of row objects.
    pub fn from_json(value: &Value) -> Result<Self, QueryError> {
        let items = value.as_array().ok_or_else(|| {
            QueryError::new(QueryErrorKind::MalformedResult(format!(
                "expected an array of rows, got {}",
                value
            )))
        })?;

        let rows = items
            .iter()
            .map(ResultRow::from_json)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(row_count = rows.len(), "Ingested result set");
        Ok(Self { rows })
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<ResultRow> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
