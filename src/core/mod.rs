//! Core shape and access traits, plus interop wrappers.

pub mod traits;
pub use traits::{MatShape, MatrixGet};
pub mod wrappers;
