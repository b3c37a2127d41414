//! Matrix module: the row-major `Matrix` type and its construction protocol.

pub mod dense;
pub use dense::Matrix;
pub mod construct;
