/// Delimited table reader.
///
/// Reads a comma-delimited file with a header row into a `RawTable`: a
/// mapping from column name to the column's string values. The first
/// column is treated as a row index (as written by dataframe exporters)
/// and discarded, both in the header and in every data row.
///
/// Only structural problems are errors here: an unreadable file, bad
/// quoting, rows whose field count differs from the header. Field contents
/// are not interpreted; that happens in `ingest::normalize`.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;

/// Column-oriented string table, index column already removed.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    columns: Vec<String>,
    values: Vec<Vec<String>>,
    /// 1-based file line of each row, for error reporting.
    lines: Vec<usize>,
}

impl RawTable {
    /// Column names in file order (without the index column).
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Values of a named column, one per row. Names match exactly.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|idx| self.values[idx].as_slice())
    }

    /// File line number of row `row`.
    pub fn line(&self, row: usize) -> usize {
        self.lines.get(row).copied().unwrap_or(row + 2)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Reads the table at `path`.
pub fn read_table(path: &Path) -> Result<RawTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(file, path)
}

/// Reads a table from any byte source. `origin` is only used in error
/// messages.
pub fn parse_table<R: Read>(source: R, origin: &Path) -> Result<RawTable, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(source);

    let headers = reader.headers().map_err(csv_err)?.clone();
    if headers.is_empty() {
        return Err(LoadError::EmptyFile);
    }

    // Skip the leading index column
    let columns: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
    let mut values: Vec<Vec<String>> = vec![Vec::new(); columns.len()];
    let mut lines = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(csv_err)?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);

        for (col, field) in record.iter().skip(1).enumerate() {
            values[col].push(field.to_string());
        }
        lines.push(line);
    }

    Ok(RawTable {
        columns,
        values,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;

    fn parse(text: &str) -> Result<RawTable, LoadError> {
        parse_table(text.as_bytes(), Path::new("<fixture>"))
    }

    #[test]
    fn test_index_column_is_dropped() {
        let table = parse(fixture_small_csv()).expect("fixture should parse");

        assert_eq!(table.column_names()[0], "event_id");
        assert!(table.column("").is_none(), "index column must not be exposed");
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_column_lookup_is_case_sensitive() {
        let table = parse(fixture_small_csv()).unwrap();
        assert!(table.column("datetime").is_some());
        assert!(table.column("DateTime").is_none());
    }

    #[test]
    fn test_extra_columns_are_kept() {
        let table = parse(fixture_extra_columns_csv()).unwrap();
        let state = table.column("state").expect("state column should survive");
        assert_eq!(state, ["OK", "KS"]);
    }

    #[test]
    fn test_line_numbers_start_after_header() {
        let table = parse(fixture_small_csv()).unwrap();
        assert_eq!(table.line(0), 2);
        assert_eq!(table.line(5), 7);
    }

    #[test]
    fn test_ragged_row_is_structural_error() {
        let err = parse(fixture_ragged_csv()).unwrap_err();
        assert!(matches!(err, LoadError::Csv { .. }), "got {err:?}");
    }

    #[test]
    fn test_empty_input_is_error() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, LoadError::EmptyFile), "got {err:?}");
    }

    #[test]
    fn test_header_only_gives_empty_table() {
        let table = parse(",event_id,grid_id,datetime,lon,lat,fujita_scale\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column("grid_id").map(|c| c.len()), Some(0));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_table(Path::new("/nonexistent/tornado_data.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
    }
}
