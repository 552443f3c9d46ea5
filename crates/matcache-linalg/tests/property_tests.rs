//! Property-based tests for matcache-linalg
//!
//! These tests use proptest to generate random matrices and verify
//! mathematical properties of the inversion routine. Generated inputs are
//! strictly diagonally dominant, which guarantees invertibility and keeps
//! the conditioning good enough for tight tolerances.

use proptest::prelude::*;

use matcache_linalg::{InvertOptions, Inverter, LinalgError, MatMul, Matrix};

const MAX_DIM: usize = 6;

prop_compose! {
    /// Strictly diagonally dominant square matrix: |a_ii| > sum_j |a_ij|
    fn arb_dominant_matrix()(n in 1usize..=MAX_DIM)(
        off_diag in prop::collection::vec(-1.0f64..1.0, n * n..=n * n),
        margins in prop::collection::vec(1.0f64..2.0, n..=n),
        n in Just(n)
    ) -> Matrix {
        let mut m = Matrix::zeros(n, n);
        for r in 0..n {
            let mut row_sum = 0.0;
            for c in 0..n {
                if r != c {
                    m[(r, c)] = off_diag[r * n + c];
                    row_sum += m[(r, c)].abs();
                }
            }
            m[(r, r)] = row_sum + margins[r];
        }
        m
    }
}

prop_compose! {
    fn arb_rectangular_matrix()(
        (rows, cols) in (1usize..=8, 1usize..=8).prop_filter("non-square", |&(r, c)| r != c)
    )(
        data in prop::collection::vec(-10.0f64..10.0, rows * cols..=rows * cols),
        rows in Just(rows),
        cols in Just(cols)
    ) -> Matrix {
        Matrix::new(rows, cols, data).expect("length matches dims")
    }
}

proptest! {
    /// A dominant matrix always inverts, and M @ M^-1 is the identity
    /// within floating-point tolerance
    #[test]
    fn test_inverse_round_trips_to_identity(m in arb_dominant_matrix()) {
        let inv = Inverter::compute(&m, &InvertOptions::default()).unwrap();
        let product = MatMul::compute(&m, &inv).unwrap();

        let n = m.rows();
        let identity = Matrix::identity(n);
        for r in 0..n {
            for c in 0..n {
                prop_assert!((product[(r, c)] - identity[(r, c)]).abs() < 1e-9);
            }
        }
    }

    /// Inversion is deterministic: the same input yields the same output
    #[test]
    fn test_inversion_is_deterministic(m in arb_dominant_matrix()) {
        let first = Inverter::compute(&m, &InvertOptions::default()).unwrap();
        let second = Inverter::compute(&m, &InvertOptions::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Non-square matrices are always rejected with a shape error
    #[test]
    fn test_non_square_always_rejected(m in arb_rectangular_matrix()) {
        let err = Inverter::compute(&m, &InvertOptions::default()).unwrap_err();
        let is_shape_err = matches!(err, LinalgError::InvalidShape { .. });
        prop_assert!(is_shape_err);
    }

    /// Cloning preserves exact equality, the comparison the cache layer
    /// keys on
    #[test]
    fn test_clone_compares_equal(m in arb_dominant_matrix()) {
        let copy = m.clone();
        prop_assert_eq!(&m, &copy);
    }
}
