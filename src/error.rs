use thiserror::Error;

/// Result of constructing a grid.
pub type GridResult<T> = Result<T, GridError>;

/// Error encountered while building a grid.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("grid needs {expected} cells but only {actual} were provided")]
    CellCount { expected: usize, actual: usize },
}
