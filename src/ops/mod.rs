//! Arithmetic over matrices: products and elementwise folds.

pub mod product;
pub use product::{Operand, matmul, mul, mult};

pub mod elementwise;
pub use elementwise::{add, elementwise_fold, sub};
