//! Configuration types for matrix construction.

pub mod options;
pub use options::{Generator, MatrixOptions};
