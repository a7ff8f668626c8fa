use super::error::DataError;

// ---------------------------------------------------------------------------
// Column – one named series of samples
// ---------------------------------------------------------------------------

/// A single named numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// An ordered table of named numeric columns, one row per time sample.
///
/// Every column has exactly [`Dataset::row_count`] values; the constructor
/// refuses anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset from columns that were read side by side.
    ///
    /// Zero rows is a valid (empty) table. Columns of unequal length are a
    /// format error.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, DataError> {
        let rows = columns.first().map(|c| c.values.len()).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.values.len() != rows) {
            return Err(DataError::Layout(format!(
                "column '{}' has {} values, expected {rows}",
                bad.name,
                bad.values.len()
            )));
        }
        Ok(Dataset { columns, rows })
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&[f64], DataError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    /// Column names in load order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of samples.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Whether the table holds no samples.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}
