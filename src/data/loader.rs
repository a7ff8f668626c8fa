use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::DataError;
use super::model::{Column, Dataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the named columns of a CSV dataset from a file.
///
/// The file must have a `.csv` extension (or none). Only `columns` are kept
/// and parsed as numbers; anything else in the file is ignored. The file
/// handle is closed before this returns.
pub fn load_file(path: &Path, columns: &[&str]) -> Result<Dataset, DataError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if !ext.is_empty() && ext != "csv" {
        return Err(DataError::UnsupportedFormat(ext));
    }

    let columns = dedup(columns);
    let dataset = read_csv(open(path)?, &columns)?;

    log::info!(
        "Loaded {} rows of {:?} from {}",
        dataset.row_count(),
        columns,
        path.display()
    );
    Ok(dataset)
}

fn open(path: &Path) -> Result<File, DataError> {
    File::open(path).map_err(|source| DataError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Requested columns in first-seen order, without repeats.
fn dedup<'a>(columns: &[&'a str]) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::with_capacity(columns.len());
    for &c in columns {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then one row per sample.
///
/// Fields and headers are trimmed. Headers that are empty (a trailing comma
/// on every line, as some simulators write) are never matched. When a name
/// appears twice the first column wins. Unrequested columns are never
/// decoded, so they may hold arbitrary bytes.
pub fn read_csv<R: Read>(reader: R, columns: &[&str]) -> Result<Dataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.byte_headers()?.clone();
    let indices = columns
        .iter()
        .map(|&name| {
            headers
                .iter()
                .position(|h| !h.is_empty() && h == name.as_bytes())
                .ok_or_else(|| DataError::MissingColumn(name.to_string()))
        })
        .collect::<Result<Vec<usize>, _>>()?;

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];

    for (row_no, result) in reader.byte_records().enumerate() {
        let record = result?;
        for ((&idx, &name), out) in indices.iter().zip(columns).zip(values.iter_mut()) {
            out.push(parse_field(record.get(idx).unwrap_or(b""), row_no, name)?);
        }
    }

    Dataset::from_columns(
        columns
            .iter()
            .zip(values)
            .map(|(name, values)| Column {
                name: name.to_string(),
                values,
            })
            .collect(),
    )
}

fn parse_field(raw: &[u8], row: usize, column: &str) -> Result<f64, DataError> {
    std::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| DataError::NotNumeric {
            row,
            column: column.to_string(),
            value: String::from_utf8_lossy(raw).into_owned(),
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::data::ErrorKind;

    const HEAT: &str = "t,a1,a2,a3,a4,a5\n0,1.0,0.9,0.8,0.7,0.6\n1,0.8,0.85,0.82,0.75,0.65";

    fn temp_with(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_columns_match_row_count() {
        let ds = read_csv(HEAT.as_bytes(), &["t", "a1", "a2", "a3", "a4", "a5"]).unwrap();
        assert_eq!(ds.row_count(), 2);
        for c in ds.columns() {
            assert_eq!(c.values.len(), 2);
        }
        assert_eq!(ds.column("a2").unwrap(), &[0.9, 0.85]);
    }

    #[test]
    fn test_column_order_irrelevant() {
        let ds = read_csv("z,y,x\n3,2,1\n6,5,4".as_bytes(), &["x", "y", "z"]).unwrap();
        assert_eq!(ds.column("x").unwrap(), &[1.0, 4.0]);
        assert_eq!(ds.column("z").unwrap(), &[3.0, 6.0]);
        assert_eq!(ds.column_names().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_unrequested_columns_ignored() {
        let ds = read_csv("time,x,label\n0,1,a\n1,2,b".as_bytes(), &["time", "x"]).unwrap();
        assert_eq!(ds.columns().len(), 2);
    }

    #[test]
    fn test_invalid_utf8_in_unrequested_column() {
        let content: &[u8] = b"time,x,note\n0,1,ok\n1,2,\xff\xfe\n";
        let ds = read_csv(content, &["time", "x"]).unwrap();
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.column("x").unwrap(), &[1.0, 2.0]);
    }

    #[test]
    fn test_invalid_utf8_in_requested_column_is_format_error() {
        let content: &[u8] = b"time,x\n0,1\n1,\xff\n";
        let err = read_csv(content, &["time", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(err, DataError::NotNumeric { row: 1, ref column, .. } if column == "x"));
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let err = read_csv("x,y\n1,2".as_bytes(), &["x", "y", "z"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert_eq!(err.to_string(), "missing column 'z'");
    }

    #[test]
    fn test_non_numeric_is_format_error() {
        let err = read_csv("x,y\n1,2\n3,oops".as_bytes(), &["x", "y"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(
            err,
            DataError::NotNumeric { row: 1, ref column, ref value } if column == "y" && value == "oops"
        ));
    }

    #[test]
    fn test_empty_cell_is_format_error() {
        let err = read_csv("x,y\n1,".as_bytes(), &["x", "y"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_ragged_rows_are_format_error() {
        let err = read_csv("x,y\n1,2\n3".as_bytes(), &["x"]).unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_header_only_gives_zero_rows() {
        let ds = read_csv("t,a1\n".as_bytes(), &["t", "a1"]).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.column("a1").unwrap().len(), 0);
    }

    #[test]
    fn test_trailing_comma_and_whitespace() {
        let content = "time, x, y, z,\n0.0, 1.0, 1.0, 1.0,\n0.01, 1.1, 1.2, 0.9,\n";
        let ds = read_csv(content.as_bytes(), &["time", "x"]).unwrap();
        assert_eq!(ds.column("time").unwrap(), &[0.0, 0.01]);
        assert_eq!(ds.column("x").unwrap(), &[1.0, 1.1]);
    }

    #[test]
    fn test_duplicate_rows_kept_in_order() {
        let ds = read_csv("x,y\n1,1\n1,1\n0,2".as_bytes(), &["x", "y"]).unwrap();
        assert_eq!(ds.column("x").unwrap(), &[1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_load_file_csv() {
        let file = temp_with(".csv", HEAT);
        let ds = load_file(file.path(), &["t", "a5", "t"]).unwrap();
        assert_eq!(ds.column_names().collect::<Vec<_>>(), vec!["t", "a5"]);
        assert_eq!(ds.column("a5").unwrap(), &[0.6, 0.65]);
    }

    #[test]
    fn test_load_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("lorenz.csv"), &["x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::File);
        assert!(err.to_string().contains("lorenz.csv"));
    }

    #[test]
    fn test_load_file_rejects_non_csv() {
        let file = temp_with(".json", r#"[{"x": 1, "y": 2}]"#);
        let err = load_file(file.path(), &["x", "y"]).unwrap_err();
        assert!(matches!(err, DataError::UnsupportedFormat(ref e) if e == "json"));
        assert_eq!(err.kind(), ErrorKind::File);

        let file = temp_with(".parquet", "");
        let err = load_file(file.path(), &["x"]).unwrap_err();
        assert!(matches!(err, DataError::UnsupportedFormat(ref e) if e == "parquet"));
    }
}
