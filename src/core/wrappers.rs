//! Wrappers for moving data between `Matrix` and faer dense matrices.
//!
//! faer stores column-major and is generic over the element type; `Matrix` is row-major `f32`.
//! Conversions copy element by element through `(i, j)` indexing, so layout never leaks across
//! the boundary.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use faer::Mat;
use num_traits::Float;

use crate::error::{MatError, shape};
use crate::matrix::Matrix;
use crate::matrix::construct::check_dims;

impl Matrix {
    /// Copies into a new `faer::Mat<f32>` with the same shape.
    pub fn to_faer(&self) -> Mat<f32> {
        Mat::from_fn(self.rows, self.cols, |i, j| self.data[i * self.cols + j])
    }

    /// Copies a faer matrix of any float type into a new `Matrix`.
    ///
    /// Elements go through `ToPrimitive::to_f32`: for `f64` input, values beyond the `f32` range
    /// saturate to `±inf` and NaN stays NaN. Fails with `DimensionError` on an empty input, and
    /// with `ConfigurationError` only for float types whose `to_f32` reports no conversion.
    pub fn from_faer<T: Float>(m: &Mat<T>) -> Result<Matrix, MatError> {
        let (rows, cols) = (m.nrows(), m.ncols());
        if rows == 0 || cols == 0 {
            return Err(MatError::DimensionError(format!(
                "cannot convert an empty {} faer matrix",
                shape(rows, cols)
            )));
        }
        let mut data = Vec::with_capacity(check_dims(rows, cols)?);
        for i in 0..rows {
            for j in 0..cols {
                let v = m[(i, j)].to_f32().ok_or_else(|| {
                    MatError::ConfigurationError(format!(
                        "element ({i}, {j}) is not representable as f32"
                    ))
                })?;
                data.push(v);
            }
        }
        Matrix::from_vec(rows, cols, data)
    }
}
