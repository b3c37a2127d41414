//! Dense row-major matrix storage.
//!
//! `Matrix` owns a contiguous `Vec<f32>` of `rows * cols` values, with element `(i, j)` stored at
//! offset `i * cols + j`. Dimensions are fixed at construction and always positive; the only
//! in-place mutation is [`Matrix::set_at`]. Constructors live in [`crate::matrix::construct`].

use std::fmt;

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::{MatError, shape};

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f32>,
}

impl Matrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements (`rows * cols`).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Row-major view of the storage.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    fn check_bounds(&self, i: usize, j: usize) -> Result<usize, MatError> {
        if i >= self.rows || j >= self.cols {
            return Err(MatError::IndexError(format!(
                "({i}, {j}) is outside a {} matrix",
                shape(self.rows, self.cols)
            )));
        }
        Ok(i * self.cols + j)
    }

    /// Reads element `(i, j)`.
    pub fn at(&self, i: usize, j: usize) -> Result<f32, MatError> {
        let idx = self.check_bounds(i, j)?;
        Ok(self.data[idx])
    }

    /// Overwrites element `(i, j)` in place.
    pub fn set_at(&mut self, i: usize, j: usize, value: f32) -> Result<(), MatError> {
        let idx = self.check_bounds(i, j)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Borrows row `i`.
    pub fn row(&self, i: usize) -> Result<&[f32], MatError> {
        if i >= self.rows {
            return Err(MatError::IndexError(format!(
                "row {i} is outside a {} matrix",
                shape(self.rows, self.cols)
            )));
        }
        let idx = i * self.cols;
        Ok(&self.data[idx..(idx + self.cols)])
    }

    /// Writes the [`Display`](fmt::Display) rendering to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl MatShape for Matrix {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl MatrixGet<f32> for Matrix {
    fn get(&self, i: usize, j: usize) -> Result<f32, MatError> {
        self.at(i, j)
    }
}

/// One line per row, each cell as `{:7.2}`, cells separated by a space.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks_exact(self.cols) {
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{v:7.2}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix {
            rows: 2,
            cols: 3,
            data: vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        }
    }

    #[test]
    fn row_major_offsets() {
        let m = sample();
        assert_eq!(m.at(0, 2).unwrap(), 2.0);
        assert_eq!(m.at(1, 0).unwrap(), 3.0);
        assert_eq!(m.row(1).unwrap(), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn out_of_range_access() {
        let mut m = sample();
        assert!(matches!(m.at(2, 0), Err(MatError::IndexError(_))));
        assert!(matches!(m.at(0, 3), Err(MatError::IndexError(_))));
        assert!(matches!(m.set_at(5, 5, 1.0), Err(MatError::IndexError(_))));
        assert!(matches!(m.row(2), Err(MatError::IndexError(_))));
        // failed writes leave storage untouched
        assert_eq!(m, sample());
    }

    #[test]
    fn set_at_is_in_place() {
        let mut m = sample();
        m.set_at(1, 1, -7.5).unwrap();
        assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0, -7.5, 5.0]);
        assert_eq!((m.nrows(), m.ncols()), (2, 3));
    }

    #[test]
    fn generic_get() {
        fn trace<M: MatrixGet<f32> + MatShape>(m: &M) -> Result<f32, MatError> {
            (0..m.nrows().min(m.ncols())).map(|k| m.get(k, k)).sum()
        }
        let m = Matrix {
            rows: 2,
            cols: 2,
            data: vec![1.0, 9.0, 9.0, 2.0],
        };
        assert_eq!(trace(&m).unwrap(), 3.0);
        assert!(m.get(0, 2).is_err());
    }

    #[test]
    fn display_fixed_width() {
        let m = Matrix {
            rows: 2,
            cols: 2,
            data: vec![1.5, -2.0, 10.0, 7.256],
        };
        assert_eq!(m.to_string(), "   1.50   -2.00\n  10.00    7.26\n");
    }
}
