//! Core shape and element-access traits for rowmat.

use crate::error::MatError;

/// Shape information for anything laid out as rows × columns.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;

    /// True for a `1 × n` matrix.
    fn is_row_vector(&self) -> bool {
        self.nrows() == 1
    }

    /// True for an `n × 1` matrix.
    fn is_column_vector(&self) -> bool {
        self.ncols() == 1
    }
}

/// Bounds-checked element read.
pub trait MatrixGet<T> {
    /// Returns element `(i, j)`, or `MatError::IndexError` when out of range.
    fn get(&self, i: usize, j: usize) -> Result<T, MatError>;
}
