use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`DataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be opened or is of an unknown type.
    File,
    /// A required column is absent, or there is nothing to plot.
    Schema,
    /// The content could not be parsed, or a value is not numeric.
    Format,
}

/// Everything that can go wrong between a file on disk and a built figure.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("dataset has no rows")]
    NoRows,

    #[error("row {row}, column '{column}': '{value}' is not a number")]
    NotNumeric {
        row: usize,
        column: String,
        value: String,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed table: {0}")]
    Layout(String),
}

impl DataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DataError::File { .. } | DataError::UnsupportedFormat(_) => ErrorKind::File,
            DataError::MissingColumn(_) | DataError::NoRows => ErrorKind::Schema,
            DataError::NotNumeric { .. } | DataError::Csv(_) | DataError::Layout(_) => {
                ErrorKind::Format
            }
        }
    }
}
