// rayon-based row-parallel products

use rayon::prelude::*;

use crate::error::{MatError, shape};
use crate::matrix::Matrix;

/// Sizes rayon's global pool to the number of logical CPUs.
///
/// Only the first call has an effect; later calls (or a pool already built elsewhere) are ignored.
pub fn init_thread_pool() {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get())
        .build_global()
        .ok();
}

/// Number of worker threads rayon will use.
pub fn num_threads() -> usize {
    rayon::current_num_threads()
}

/// Same product as [`crate::ops::matmul`], one task per output row.
///
/// Each cell still accumulates over increasing `k`, so the result is bit-identical to the serial
/// product.
pub fn par_matmul(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    if a.cols != b.rows {
        return Err(MatError::DimensionError(format!(
            "cannot multiply {} by {}: inner dimensions differ",
            shape(a.rows, a.cols),
            shape(b.rows, b.cols)
        )));
    }
    log::debug!("par_matmul {} x {}", shape(a.rows, a.cols), shape(b.rows, b.cols));
    let mut c = Matrix::zeros(a.rows, b.cols)?;
    c.data.par_chunks_mut(b.cols).enumerate().for_each(|(i, row)| {
        let a_row = &a.data[i * a.cols..(i + 1) * a.cols];
        for (j, cell) in row.iter_mut().enumerate() {
            for (k, &aik) in a_row.iter().enumerate() {
                *cell += aik * b.data[k * b.cols + j];
            }
        }
    });
    Ok(c)
}
