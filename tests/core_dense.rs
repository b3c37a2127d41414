//! Tests for matrix storage and the construction protocol.
//!
//! These tests exercise bounds-checked access, the three construction modes (explicit data,
//! generator, zero-fill), and the derived constructors `copy` and `transpose`, using random data
//! for the shape-generic properties.

use rand::Rng;
use rowmat::{MatError, Matrix, MatrixOptions};

/// Random `rows × cols` matrix with entries in [-1, 1).
fn random_matrix(rows: usize, cols: usize, rng: &mut impl Rng) -> Matrix {
    Matrix::from_fn(rows, cols, |_, _| rng.gen_range(-1.0f32..1.0)).unwrap()
}

/// `at` on a generator-built matrix returns the generated value.
#[test]
fn generator_cell_lookup() {
    let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as f32).unwrap();
    assert_eq!(m.at(1, 2).unwrap(), 5.0);
    assert_eq!(m.at(0, 0).unwrap(), 0.0);
}

/// A stateful generator observes cells in row-major order.
#[test]
fn stateful_generator_order() {
    let mut counter = 0.0f32;
    let m = Matrix::with_options(
        3,
        2,
        MatrixOptions::new().with_generator(|_, _| {
            counter += 1.0;
            counter
        }),
    )
    .unwrap();
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(m.row(2).unwrap(), &[5.0, 6.0]);
}

/// Explicit data is taken verbatim in row-major order.
#[test]
fn explicit_data() {
    let m = Matrix::with_options(2, 2, MatrixOptions::new().with_data(vec![1.0, 2.0, 3.0, 4.0]))
        .unwrap();
    assert_eq!(m.at(0, 1).unwrap(), 2.0);
    assert_eq!(m.at(1, 0).unwrap(), 3.0);
}

/// Each construction contract violation maps to its error kind.
#[test]
fn construction_errors() {
    let both = MatrixOptions::new().with_data(vec![1.0]).with_generator(|_, _| 0.0);
    assert!(matches!(Matrix::with_options(1, 1, both), Err(MatError::ConfigurationError(_))));

    let short = MatrixOptions::new().with_data(vec![1.0; 5]);
    assert!(matches!(Matrix::with_options(2, 3, short), Err(MatError::DimensionError(_))));

    assert!(matches!(Matrix::zeros(0, 0), Err(MatError::DimensionError(_))));
    assert!(matches!(Matrix::from_fn(0, 2, |_, _| 1.0), Err(MatError::DimensionError(_))));
    assert!(matches!(Matrix::row_vector(&[]), Err(MatError::DimensionError(_))));
    assert!(matches!(Matrix::column(&[]), Err(MatError::DimensionError(_))));
}

/// A shape whose element count overflows `usize` is rejected instead of wrapping.
#[test]
fn overflowing_shape_rejected() {
    let huge = 1usize << (usize::BITS - 1);
    assert!(matches!(Matrix::from_vec(huge, 2, vec![]), Err(MatError::DimensionError(_))));
    assert!(matches!(Matrix::zeros(2, huge), Err(MatError::DimensionError(_))));
}

/// Out-of-range reads and writes fail with `IndexError`.
#[test]
fn bounds_checked_access() {
    let mut m = Matrix::zeros(2, 2).unwrap();
    assert!(matches!(m.at(2, 1), Err(MatError::IndexError(_))));
    assert!(matches!(m.set_at(0, 2, 1.0), Err(MatError::IndexError(_))));
    m.set_at(1, 1, 4.0).unwrap();
    assert_eq!(m.at(1, 1).unwrap(), 4.0);
}

/// Mutating a copy leaves the original untouched.
#[test]
fn copy_owns_its_storage() {
    let mut rng = rand::thread_rng();
    let m = random_matrix(4, 3, &mut rng);
    let mut c = m.copy();
    assert_eq!(c, m);
    c.set_at(3, 2, 100.0).unwrap();
    assert_ne!(c, m);
    assert_ne!(m.at(3, 2).unwrap(), 100.0);
}

/// Transposing twice gives back the original, for a spread of shapes.
#[test]
fn double_transpose_identity() {
    let mut rng = rand::thread_rng();
    for (rows, cols) in [(1, 1), (1, 5), (5, 1), (3, 4), (7, 2)] {
        let m = random_matrix(rows, cols, &mut rng);
        let t = m.transpose();
        assert_eq!((t.rows(), t.cols()), (cols, rows));
        for i in 0..rows {
            for j in 0..cols {
                assert_eq!(t.at(j, i).unwrap(), m.at(i, j).unwrap());
            }
        }
        assert_eq!(t.transpose(), m);
    }
}

/// The print routine renders one fixed-width line per row.
#[test]
fn display_rows() {
    let m = Matrix::from_vec(2, 3, vec![1.0, -1.25, 0.0, 100.0, 2.5, -0.5]).unwrap();
    let text = m.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["   1.00   -1.25    0.00", " 100.00    2.50   -0.50"]);
}

/// faer round trip keeps every element in place.
#[test]
fn faer_round_trip() {
    let mut rng = rand::thread_rng();
    let m = random_matrix(3, 5, &mut rng);
    let f = m.to_faer();
    assert_eq!(Matrix::from_faer(&f).unwrap(), m);
}
