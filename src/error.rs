use thiserror::Error;

// Unified error type for rowmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("dimension error: {0}")]
    DimensionError(String),
    #[error("configuration error: {0}")]
    ConfigurationError(String),
    #[error("index error: {0}")]
    IndexError(String),
}

/// Renders a shape as `RxC` for error messages.
pub(crate) fn shape(rows: usize, cols: usize) -> String {
    format!("{rows}x{cols}")
}
