//! Matrix inversion via Gauss-Jordan elimination with partial pivoting

use tracing::trace;

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

/// Inversion configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvertOptions {
    /// Pivot magnitudes at or below this threshold are treated as zero,
    /// making the matrix singular under this numeric method
    pub pivot_threshold: f64,
}

impl Default for InvertOptions {
    fn default() -> Self {
        Self {
            pivot_threshold: 1e-12,
        }
    }
}

/// Gauss-Jordan matrix inversion
pub struct Inverter;

impl Inverter {
    /// Validates that a matrix is square and therefore a candidate for inversion
    pub fn validate_shape(matrix: &Matrix) -> Result<()> {
        if !matrix.is_square() {
            return Err(LinalgError::invalid_shape(
                "INVERT_NON_SQUARE",
                format!(
                    "Matrix inversion requires a square matrix, got {}x{}",
                    matrix.rows(),
                    matrix.cols()
                ),
                format!("{}x{}", matrix.rows(), matrix.cols()),
                "matrix inversion",
                "Only square matrices are invertible",
            ));
        }
        Ok(())
    }

    /// Computes the inverse of `matrix`
    ///
    /// Row-reduces an augmented copy of the input while applying the same
    /// operations to an identity matrix, which ends up holding the inverse.
    /// Partial pivoting: each elimination column pivots on the remaining row
    /// with the largest absolute value.
    pub fn compute(matrix: &Matrix, options: &InvertOptions) -> Result<Matrix> {
        Self::validate_shape(matrix)?;

        let n = matrix.rows();
        trace!("inverting {}x{} matrix", n, n);

        let mut a = matrix.clone();
        let mut inv = Matrix::identity(n);

        for col in 0..n {
            // Pick the remaining row with the largest magnitude in this column
            let mut pivot_row = col;
            let mut pivot_mag = a[(col, col)].abs();
            for r in col + 1..n {
                let mag = a[(r, col)].abs();
                if mag > pivot_mag {
                    pivot_row = r;
                    pivot_mag = mag;
                }
            }

            if pivot_mag.is_nan() || pivot_mag <= options.pivot_threshold {
                return Err(LinalgError::singular(
                    "INVERT_SINGULAR",
                    format!("Matrix is singular, no usable pivot in column {}", col),
                    format!("{}x{}", n, n),
                    col,
                    "Check that the rows of the matrix are linearly independent",
                ));
            }

            a.swap_rows(col, pivot_row);
            inv.swap_rows(col, pivot_row);

            let pivot = a[(col, col)];
            for c in 0..n {
                a[(col, c)] /= pivot;
                inv[(col, c)] /= pivot;
            }

            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = a[(r, col)];
                if factor == 0.0 {
                    continue;
                }
                for c in 0..n {
                    a[(r, c)] -= factor * a[(col, c)];
                    inv[(r, c)] -= factor * inv[(col, c)];
                }
            }
        }

        Ok(inv)
    }
}
