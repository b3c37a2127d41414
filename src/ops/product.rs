//! Matrix and scalar products.
//!
//! - [`matmul`] is the checked matrix–matrix product.
//! - Scalar scaling is exposed through [`Matrix::scale`] and the `Mul` operator in both operand
//!   orders (`&m * 2.0`, `2.0 * &m`).
//! - [`mul`] multiplies two [`Operand`]s (matrix or scalar) and [`mult`] left-folds it over a
//!   sequence.

use std::ops::Mul;

use crate::error::{MatError, shape};
use crate::matrix::Matrix;

/// One input (or result) of the n-ary product.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Matrix(Matrix),
    Scalar(f32),
}

impl Operand {
    /// The matrix, if this operand is one.
    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Operand::Matrix(m) => Some(m),
            Operand::Scalar(_) => None,
        }
    }

    pub fn into_matrix(self) -> Option<Matrix> {
        match self {
            Operand::Matrix(m) => Some(m),
            Operand::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            Operand::Scalar(s) => Some(*s),
            Operand::Matrix(_) => None,
        }
    }
}

impl From<Matrix> for Operand {
    fn from(m: Matrix) -> Self {
        Operand::Matrix(m)
    }
}

impl From<f32> for Operand {
    fn from(s: f32) -> Self {
        Operand::Scalar(s)
    }
}

/// Matrix–matrix product `a · b`.
///
/// Requires `a.cols() == b.rows()`. Each result cell starts at zero and accumulates
/// `a[i,k] * b[k,j]` for increasing `k`.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    if a.cols != b.rows {
        return Err(MatError::DimensionError(format!(
            "cannot multiply {} by {}: inner dimensions differ",
            shape(a.rows, a.cols),
            shape(b.rows, b.cols)
        )));
    }
    log::debug!("matmul {} x {}", shape(a.rows, a.cols), shape(b.rows, b.cols));
    let mut c = Matrix::zeros(a.rows, b.cols)?;
    for i in 0..a.rows {
        for j in 0..b.cols {
            let cell = &mut c.data[i * b.cols + j];
            for k in 0..a.cols {
                *cell += a.data[i * a.cols + k] * b.data[k * b.cols + j];
            }
        }
    }
    Ok(c)
}

impl Matrix {
    /// Elementwise `value * s` into a new matrix of the same shape.
    pub fn scale(&self, s: f32) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v * s).collect(),
        }
    }
}

impl Mul<f32> for &Matrix {
    type Output = Matrix;
    fn mul(self, s: f32) -> Matrix {
        self.scale(s)
    }
}

impl Mul<f32> for Matrix {
    type Output = Matrix;
    fn mul(self, s: f32) -> Matrix {
        self.scale(s)
    }
}

impl Mul<&Matrix> for f32 {
    type Output = Matrix;
    fn mul(self, m: &Matrix) -> Matrix {
        m.scale(self)
    }
}

impl Mul<Matrix> for f32 {
    type Output = Matrix;
    fn mul(self, m: Matrix) -> Matrix {
        m.scale(self)
    }
}

/// Binary product over operands.
///
/// Matrix·matrix is [`matmul`]; a scalar on either side scales the matrix; two scalars multiply.
pub fn mul(a: &Operand, b: &Operand) -> Result<Operand, MatError> {
    Ok(match (a, b) {
        (Operand::Matrix(x), Operand::Matrix(y)) => Operand::Matrix(matmul(x, y)?),
        (Operand::Matrix(x), Operand::Scalar(s)) | (Operand::Scalar(s), Operand::Matrix(x)) => {
            Operand::Matrix(x.scale(*s))
        }
        (Operand::Scalar(x), Operand::Scalar(y)) => Operand::Scalar(x * y),
    })
}

/// Left fold of [`mul`] over `operands`.
///
/// An empty slice performs no computation and yields `Ok(None)`. A single operand is returned as
/// a copy.
pub fn mult(operands: &[Operand]) -> Result<Option<Operand>, MatError> {
    let Some((first, rest)) = operands.split_first() else {
        return Ok(None);
    };
    let mut acc = first.clone();
    for op in rest {
        acc = mul(&acc, op)?;
    }
    Ok(Some(acc))
}
