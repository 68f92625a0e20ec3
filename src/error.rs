//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell {position} is out of bounds (must be 0-8)")]
    PositionOutOfBounds { position: usize },

    #[error("cell {position} is already filled")]
    CellOccupied { position: usize },

    #[error("no child of the current node matches a move at cell {position}")]
    UnmatchedMove { position: usize },

    #[error("tree has not been valuated; call valuate_all first")]
    NotValued,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
