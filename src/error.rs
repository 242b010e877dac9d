use polars::error::PolarsError;
use std::error::Error;
use std::fmt::Display;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum GraphViewerError {
    PermissionDenied(PathBuf),
    File(std::io::Error),
    Parse {
        line: usize,
        column: String,
        value: String,
    },
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    MissingHeader(PathBuf),
    DuplicateColumn(String),
    MissingColumn(String),
    DataFrame(PolarsError),
    Settings(String),
    SettingsFormat(serde_json::Error),
}

impl GraphViewerError {
    /// Maps an I/O error on `path`, keeping permission failures as their own kind.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            GraphViewerError::PermissionDenied(path.to_path_buf())
        } else {
            GraphViewerError::File(err)
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, GraphViewerError::PermissionDenied(_))
    }
}

impl From<std::io::Error> for GraphViewerError {
    fn from(err: std::io::Error) -> GraphViewerError {
        GraphViewerError::File(err)
    }
}

impl From<PolarsError> for GraphViewerError {
    fn from(err: PolarsError) -> GraphViewerError {
        GraphViewerError::DataFrame(err)
    }
}

impl From<serde_json::Error> for GraphViewerError {
    fn from(err: serde_json::Error) -> GraphViewerError {
        GraphViewerError::SettingsFormat(err)
    }
}

impl Display for GraphViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphViewerError::PermissionDenied(path) => {
                write!(f, "Permission denied accessing {}", path.display())
            }
            GraphViewerError::File(x) => write!(f, "File I/O error: {x}"),
            GraphViewerError::Parse {
                line,
                column,
                value,
            } => write!(
                f,
                "Could not parse '{value}' in column '{column}' on line {line} as a number"
            ),
            GraphViewerError::RaggedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {line} has {found} values but the header names {expected} columns"
            ),
            GraphViewerError::MissingHeader(path) => {
                write!(f, "{} has no header line", path.display())
            }
            GraphViewerError::DuplicateColumn(name) => {
                write!(f, "Header names column '{name}' more than once")
            }
            GraphViewerError::MissingColumn(name) => {
                write!(f, "Table has no column named '{name}'")
            }
            GraphViewerError::DataFrame(x) => write!(f, "Error using polars: {x}"),
            GraphViewerError::Settings(x) => write!(f, "Bad setting: {x}"),
            GraphViewerError::SettingsFormat(x) => {
                write!(f, "Settings file is not valid JSON: {x}")
            }
        }
    }
}

impl Error for GraphViewerError {}

pub type Result<T> = std::result::Result<T, GraphViewerError>;
