//! Track-subsystem error type.

use thiserror::Error;

/// Errors produced while parsing or loading a track layout.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("layout contains no rows")]
    EmptyLayout,

    #[error("layout too large at row {row}, column {col}: coordinates and cart ids must fit in a u32")]
    LayoutTooLarge { row: usize, col: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TrackResult<T> = Result<T, TrackError>;
