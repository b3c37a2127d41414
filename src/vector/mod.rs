//! Vector view over matrices.
//!
//! There is no separate vector type: a `1 × n` or `n × 1` [`Matrix`] is treated as a geometric
//! vector. These helpers read the flat row-major data and work the same for either orientation,
//! except [`cross`], which needs exactly three components.

use crate::core::traits::MatShape;
use crate::error::{MatError, shape};
use crate::matrix::Matrix;

fn component(v: &Matrix, idx: usize, name: char) -> Result<f32, MatError> {
    v.data.get(idx).copied().ok_or_else(|| {
        MatError::IndexError(format!(
            "component {name} needs at least {} values, vector has {}",
            idx + 1,
            v.data.len()
        ))
    })
}

/// First component.
pub fn vec_x(v: &Matrix) -> Result<f32, MatError> {
    component(v, 0, 'x')
}

/// Second component.
pub fn vec_y(v: &Matrix) -> Result<f32, MatError> {
    component(v, 1, 'y')
}

/// Third component.
pub fn vec_z(v: &Matrix) -> Result<f32, MatError> {
    component(v, 2, 'z')
}

/// Euclidean length over all stored values.
pub fn length(v: &Matrix) -> f32 {
    v.data.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// `v / length(v)` with the same shape; a zero-length vector comes back unchanged.
pub fn normalized(v: &Matrix) -> Matrix {
    let len = length(v);
    if len == 0.0 {
        return v.copy();
    }
    Matrix {
        rows: v.rows,
        cols: v.cols,
        data: v.data.iter().map(|x| x / len).collect(),
    }
}

/// True for a `3 × 1` or `1 × 3` matrix.
pub fn is_three_dimensional_vector(v: &Matrix) -> bool {
    (v.nrows() == 3 && v.is_column_vector()) || (v.is_row_vector() && v.ncols() == 3)
}

/// Cross product `a × b` as a `3 × 1` column, whatever the input orientations.
pub fn cross(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    for v in [a, b] {
        if !is_three_dimensional_vector(v) {
            return Err(MatError::DimensionError(format!(
                "cross product needs 3x1 or 1x3 operands, got {}",
                shape(v.rows, v.cols)
            )));
        }
    }
    let (ax, ay, az) = (a.data[0], a.data[1], a.data[2]);
    let (bx, by, bz) = (b.data[0], b.data[1], b.data[2]);
    Ok(Matrix {
        rows: 3,
        cols: 1,
        data: vec![ay * bz - by * az, az * bx - bz * ax, ax * by - bx * ay],
    })
}

/// `3 × 1` column vector `(x, y, z)`.
pub fn vector3(x: f32, y: f32, z: f32) -> Matrix {
    Matrix {
        rows: 3,
        cols: 1,
        data: vec![x, y, z],
    }
}
