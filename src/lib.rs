//! rowmat: row-major dense matrices and the vectors built from them
//!
//! This crate provides a single owned `Matrix` type over `f32` with generator-based construction,
//! matrix and scalar products, elementwise folds, transpose, and 3-D vector helpers that treat a
//! one-row or one-column matrix as a geometric vector.

#[cfg(feature = "rayon")]
pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod vector;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::MatError;
pub use matrix::*;
pub use ops::*;
pub use vector::*;
