use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("grid must have at least one row and one column, got {height}x{width}")]
    EmptyGrid { height: usize, width: usize },

    #[error("grid of {height}x{width} cells is too large")]
    TooLarge { height: usize, width: usize },

    #[error("cell ({row}, {col}) has value {value}, expected 0 or 1")]
    NonBinaryCell { row: usize, col: usize, value: i64 },

    #[error("row {row} has {found} columns, expected {expected}")]
    JaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: `{token}` is not an integer")]
    Parse { line: usize, token: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("window failed: {0}")]
    Window(String),

    #[error("invalid option `{0}`")]
    InvalidOption(String),

    #[error("option `{0}` requires a value")]
    MissingValue(String),

    #[error("option `{option}` expects a positive integer, got `{value}`")]
    InvalidNumber { option: String, value: String },
}
