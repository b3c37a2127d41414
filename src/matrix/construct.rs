//! Matrix construction protocol.
//!
//! Every matrix is built through [`Matrix::with_options`], which picks one of three modes from the
//! supplied [`MatrixOptions`]:
//!
//! - explicit row-major `data` (length must be `rows * cols`),
//! - a `generator(i, j)` invoked once per cell in row-major order,
//! - neither, giving a zero-filled matrix.
//!
//! Supplying both `data` and `generator` is a `ConfigurationError`. The shorthand constructors
//! (`zeros`, `from_fn`, `from_vec`, ...) and the derived ones (`copy`, `transpose`) all go through
//! the same path.

use crate::config::options::MatrixOptions;
use crate::error::{MatError, shape};
use crate::matrix::Matrix;

/// Validates a shape and returns its element count.
///
/// Rejects zero dimensions and shapes whose `rows * cols` overflows `usize`.
pub(crate) fn check_dims(rows: usize, cols: usize) -> Result<usize, MatError> {
    if rows == 0 || cols == 0 {
        return Err(MatError::DimensionError(format!(
            "matrix dimensions must be positive, got {}",
            shape(rows, cols)
        )));
    }
    rows.checked_mul(cols).ok_or_else(|| {
        MatError::DimensionError(format!(
            "{} matrix has more elements than fit in usize",
            shape(rows, cols)
        ))
    })
}

/// Generator fill of `len == rows * cols` cells; callers have already validated the dimensions.
fn generate<F>(rows: usize, cols: usize, len: usize, mut f: F) -> Matrix
where
    F: FnMut(usize, usize) -> f32,
{
    let mut data = Vec::with_capacity(len);
    for i in 0..rows {
        for j in 0..cols {
            data.push(f(i, j));
        }
    }
    Matrix { rows, cols, data }
}

impl Matrix {
    /// Builds a `rows × cols` matrix from the given construction options.
    ///
    /// Validation order: positive dimensions, then the data/generator conflict, then data length.
    pub fn with_options(
        rows: usize,
        cols: usize,
        options: MatrixOptions<'_>,
    ) -> Result<Self, MatError> {
        let len = check_dims(rows, cols)?;
        match (options.data, options.generator) {
            (Some(_), Some(_)) => Err(MatError::ConfigurationError(
                "explicit data and a generator cannot both be supplied".into(),
            )),
            (Some(data), None) => {
                if data.len() != len {
                    return Err(MatError::DimensionError(format!(
                        "{} matrix needs {len} values, got {}",
                        shape(rows, cols),
                        data.len()
                    )));
                }
                log::trace!("matrix {} from explicit data", shape(rows, cols));
                Ok(Matrix { rows, cols, data })
            }
            (None, Some(mut generator)) => {
                log::trace!("matrix {} from generator", shape(rows, cols));
                Ok(generate(rows, cols, len, &mut generator))
            }
            (None, None) => {
                log::trace!("matrix {} zero-filled", shape(rows, cols));
                Ok(Matrix {
                    rows,
                    cols,
                    data: vec![0.0; len],
                })
            }
        }
    }

    /// Zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatError> {
        Self::with_options(rows, cols, MatrixOptions::new())
    }

    /// Fills each cell with `f(i, j)`, visiting cells in row-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Result<Self, MatError>
    where
        F: FnMut(usize, usize) -> f32,
    {
        Self::with_options(rows, cols, MatrixOptions::new().with_generator(f))
    }

    /// Takes ownership of row-major `data`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, MatError> {
        Self::with_options(rows, cols, MatrixOptions::new().with_data(data))
    }

    /// `n × 1` column vector.
    pub fn column(values: &[f32]) -> Result<Self, MatError> {
        Self::from_vec(values.len(), 1, values.to_vec())
    }

    /// `1 × n` row vector.
    pub fn row_vector(values: &[f32]) -> Result<Self, MatError> {
        Self::from_vec(1, values.len(), values.to_vec())
    }

    /// Deep copy with its own storage.
    pub fn copy(&self) -> Self {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.clone(),
        }
    }

    /// New `cols × rows` matrix with `t(i, j) = self(j, i)`.
    pub fn transpose(&self) -> Self {
        generate(self.cols, self.rows, self.data.len(), |i, j| {
            self.data[j * self.cols + i]
        })
    }
}
