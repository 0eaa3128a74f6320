use crate::fit::FitError;
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read error: {0}")]
    Read(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column}: {value:?} is not a number")]
    ParseFloat {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("column {index} requested but the table has {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },

    #[error("row {index} requested but only {rows} rows are usable")]
    RowOutOfRange { index: usize, rows: usize },

    #[error("histogram edges must be at least two non-decreasing values")]
    InvalidEdges,

    #[error("no values to work with")]
    Empty,

    #[error("NaN in input")]
    NotANumber,

    #[error(transparent)]
    Fit(#[from] FitError),

    #[error("{path:?}: {source}")]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<TelemetryError>,
    },
}

impl TelemetryError {
    /// Attaches the file the error came from. Read errors become `Io`, so a
    /// file that opens but cannot be read looks the same as one that cannot
    /// be opened.
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            TelemetryError::Read(source) => TelemetryError::Io {
                path: path.to_path_buf(),
                source,
            },
            e @ TelemetryError::Io { .. } | e @ TelemetryError::InFile { .. } => e,
            e => TelemetryError::InFile {
                path: path.to_path_buf(),
                source: Box::new(e),
            },
        }
    }
}
