//! Construction options for [`Matrix`](crate::Matrix).
//!
//! This module provides the `MatrixOptions` struct, which carries the optional inputs that select a
//! construction mode: explicit row-major data, a per-cell generator, or neither (zero-fill). The
//! data and generator inputs are mutually exclusive; supplying both is rejected when the matrix is
//! built.

use std::fmt;

/// Per-cell generator invoked as `generator(i, j)` in row-major order.
pub type Generator<'a> = Box<dyn FnMut(usize, usize) -> f32 + 'a>;

/// Optional construction inputs.
#[derive(Default)]
pub struct MatrixOptions<'a> {
    /// Explicit row-major values; length must equal `rows * cols`
    pub data: Option<Vec<f32>>,

    /// Cell generator, called once per cell (i outer, j inner)
    pub generator: Option<Generator<'a>>,
}

impl<'a> MatrixOptions<'a> {
    /// No inputs: the matrix is zero-filled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: Vec<f32>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_generator<F>(mut self, generator: F) -> Self
    where
        F: FnMut(usize, usize) -> f32 + 'a,
    {
        self.generator = Some(Box::new(generator));
        self
    }
}

impl fmt::Debug for MatrixOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixOptions")
            .field("data", &self.data.as_ref().map(Vec::len))
            .field("generator", &self.generator.is_some())
            .finish()
    }
}
