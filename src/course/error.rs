use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("table contains no rows")]
    Empty,

    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    Malformed { row: usize, column: String, value: String },

    #[error("row {row}: column '{column}' is not a finite number")]
    NonFinite { row: usize, column: String },

    #[error("degenerate {column} column: {reason}")]
    Degenerate { column: &'static str, reason: String }
}
