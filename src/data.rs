use crate::config::Columns;
use crate::error::Result;
use crate::stats::{check_finite, check_len};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("column {column:?} not found in {path:?}, available columns: {available:?}")]
    MissingColumn {
        path: PathBuf,
        column: String,
        available: Vec<String>,
    },

    #[error("invalid number {value:?} in column {column:?} on line {line} of {path:?}")]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error("non-finite value in column {column:?} on line {line} of {path:?}")]
    NonFinite {
        path: PathBuf,
        line: u64,
        column: String,
    },
}

/// Index-aligned x and y values, one pair per observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Samples {
    /// Create samples from paired values.
    ///
    /// # Errors
    /// Returns an error if the lengths differ or any value is NaN or infinite.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        check_len(&xs, &ys)?;
        check_finite(&xs)?;
        check_finite(&ys)?;
        Ok(Self { xs, ys })
    }

    /// Load samples from a headered CSV file.
    ///
    /// The columns named by `columns.x` and `columns.y` become the x and y values.
    /// Every other column is ignored.
    ///
    /// # Errors
    /// Returns [`Error::DataSource`](crate::error::Error::DataSource) if the file
    /// cannot be read, a column is missing or a cell is not a finite number.
    pub fn from_csv<P: AsRef<Path>>(file: P, columns: &Columns, delimiter: u8) -> Result<Self> {
        let (xs, ys) = read_columns(file.as_ref(), columns, delimiter)?;
        Ok(Self { xs, ys })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

fn read_columns(
    path: &Path,
    columns: &Columns,
    delimiter: u8,
) -> std::result::Result<(Vec<f64>, Vec<f64>), DataSourceError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| DataSourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| DataSourceError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let i_x = find_column(path, &headers, &columns.x)?;
    let i_y = find_column(path, &headers, &columns.y)?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| DataSourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        xs.push(parse_cell(path, &record, i_x, &columns.x)?);
        ys.push(parse_cell(path, &record, i_y, &columns.y)?);
    }

    Ok((xs, ys))
}

fn find_column(
    path: &Path,
    headers: &StringRecord,
    column: &str,
) -> std::result::Result<usize, DataSourceError> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| DataSourceError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
            available: headers.iter().map(String::from).collect(),
        })
}

fn parse_cell(
    path: &Path,
    record: &StringRecord,
    idx: usize,
    column: &str,
) -> std::result::Result<f64, DataSourceError> {
    let line = record.position().map_or(0, |pos| pos.line());
    let cell = record.get(idx).unwrap_or_default();

    let val: f64 = cell.parse().map_err(|_| DataSourceError::InvalidValue {
        path: path.to_path_buf(),
        line,
        column: column.to_string(),
        value: cell.to_string(),
    })?;
    if !val.is_finite() {
        return Err(DataSourceError::NonFinite {
            path: path.to_path_buf(),
            line,
            column: column.to_string(),
        });
    }

    Ok(val)
}
