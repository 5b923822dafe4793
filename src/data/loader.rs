//! CSV Metrics Loader Module
//! Reads a recorded-metrics CSV file into a Polars DataFrame.

use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rows sampled when sniffing column types.
const INFER_SCHEMA_ROWS: usize = 10_000;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse CSV: {0}")]
    Parse(#[from] PolarsError),
}

/// Loads metrics tables from delimited text files.
pub struct MetricsLoader;

impl MetricsLoader {
    /// Load a CSV file whose first row names the columns.
    ///
    /// Column and row order follow the file. Numeric-looking columns are
    /// typed as integers or floats, everything else stays a string.
    pub fn load(path: &Path) -> Result<DataFrame, LoaderError> {
        let file = File::open(path).map_err(|source| LoaderError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .into_reader_with_file_handle(file)
            .finish()?;

        tracing::info!(
            "Loaded {} rows, {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );
        tracing::debug!(
            "Columns: {:?}, numeric: {:?}",
            Self::column_names(&df),
            Self::numeric_columns(&df)
        );

        Ok(df)
    }

    /// Column names in file order.
    pub fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Names of the columns that hold numbers.
    pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
        df.get_columns()
            .iter()
            .filter(|col| is_numeric(col.dtype()))
            .map(|col| col.name().to_string())
            .collect()
    }
}

/// Whether a column type can be plotted or summed as-is.
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_keeps_header_and_row_order() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(
            tmp.path(),
            "data.csv",
            "epoch,reward,other\n2,3,7\n0,1,5\n1,2,6\n",
        );

        let df = MetricsLoader::load(&path).expect("load");

        assert_eq!(df.height(), 3);
        assert_eq!(
            MetricsLoader::column_names(&df),
            vec!["epoch", "reward", "other"]
        );

        let epochs: Vec<Option<i64>> = df
            .column("epoch")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(epochs, vec![Some(2), Some(0), Some(1)]);
    }

    #[test]
    fn test_load_sniffs_value_types() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(
            tmp.path(),
            "mixed.csv",
            "epoch,reward,phase\n0,0.5,warmup\n1,1.25,train\n",
        );

        let df = MetricsLoader::load(&path).expect("load");

        assert_eq!(df.column("epoch").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("reward").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("phase").unwrap().dtype(), &DataType::String);
        assert_eq!(MetricsLoader::numeric_columns(&df), vec!["epoch", "reward"]);
    }

    #[test]
    fn test_load_header_only_has_zero_rows() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(tmp.path(), "empty.csv", "epoch,reward,other\n");

        let df = MetricsLoader::load(&path).expect("load");

        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_load_missing_file_is_file_access_error() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("nope.csv");

        let err = MetricsLoader::load(&path).unwrap_err();

        match err {
            LoaderError::FileAccess { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected FileAccess, got {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_file_is_parse_error() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(tmp.path(), "blank.csv", "");

        let err = MetricsLoader::load(&path).unwrap_err();

        assert!(matches!(err, LoaderError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_error_display_file_access() {
        let err = LoaderError::FileAccess {
            path: PathBuf::from("/some/data.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/some/data.csv"));
        assert!(msg.contains("no such file"));
    }
}
