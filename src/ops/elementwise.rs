//! Elementwise n-ary folds.
//!
//! `add` and `sub` are both instances of [`elementwise_fold`]: start from a copy of the first
//! operand, then combine every later operand cell by cell in storage order. Each operand must have
//! exactly the accumulator's shape.

use crate::error::{MatError, shape};
use crate::matrix::Matrix;

/// Applies `op` cell by cell, writing into `acc`.
fn combine<F>(name: &str, mut acc: Matrix, m: &Matrix, op: &F) -> Result<Matrix, MatError>
where
    F: Fn(f32, f32) -> f32,
{
    if m.rows != acc.rows || m.cols != acc.cols {
        return Err(MatError::DimensionError(format!(
            "{name}: operand is {} but accumulator is {}",
            shape(m.rows, m.cols),
            shape(acc.rows, acc.cols)
        )));
    }
    for (a, &b) in acc.data.iter_mut().zip(&m.data) {
        *a = op(*a, b);
    }
    Ok(acc)
}

/// Left fold of `op` over equally shaped matrices.
///
/// `name` only appears in the error message. An empty slice yields `Ok(None)`.
pub fn elementwise_fold<F>(
    name: &str,
    operands: &[&Matrix],
    op: F,
) -> Result<Option<Matrix>, MatError>
where
    F: Fn(f32, f32) -> f32,
{
    let Some((first, rest)) = operands.split_first() else {
        return Ok(None);
    };
    let mut acc = first.copy();
    for m in rest {
        acc = combine(name, acc, m, &op)?;
    }
    Ok(Some(acc))
}

/// Elementwise sum of all operands.
pub fn add(operands: &[&Matrix]) -> Result<Option<Matrix>, MatError> {
    elementwise_fold("add", operands, |a, b| a + b)
}

/// First operand minus each later operand, elementwise.
pub fn sub(operands: &[&Matrix]) -> Result<Option<Matrix>, MatError> {
    elementwise_fold("sub", operands, |a, b| a - b)
}

impl Matrix {
    /// `self + other`, elementwise.
    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix, MatError> {
        combine("add", self.copy(), other, &|a, b| a + b)
    }

    /// `self - other`, elementwise.
    pub fn checked_sub(&self, other: &Matrix) -> Result<Matrix, MatError> {
        combine("sub", self.copy(), other, &|a, b| a - b)
    }
}
