//! Dense matrix multiplication

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

/// Dense matrix product
pub struct MatMul;

impl MatMul {
    /// Validates shapes for matrix multiplication and returns `(m, k, n)`
    pub fn validate_shapes(a: &Matrix, b: &Matrix) -> Result<(usize, usize, usize)> {
        if a.cols() != b.rows() {
            return Err(LinalgError::incompatible_shapes(
                "MATMUL_INNER_DIM_MISMATCH",
                format!(
                    "Matrix dimensions don't match for multiplication: ({}, {}) @ ({}, {})",
                    a.rows(),
                    a.cols(),
                    b.rows(),
                    b.cols()
                ),
                "matrix multiplication",
                format!("{}x{}", a.rows(), a.cols()),
                format!("{}x{}", b.rows(), b.cols()),
                "Ensure inner dimensions match for matrix multiplication",
            ));
        }
        Ok((a.rows(), a.cols(), b.cols()))
    }

    /// Computes the product `A @ B`
    ///
    /// Plain triple loop in i-k-j order. The matrices this crate deals with
    /// are small, so there is no blocking or SIMD here.
    pub fn compute(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let (m, k, n) = Self::validate_shapes(a, b)?;

        let mut c = Matrix::zeros(m, n);
        for i in 0..m {
            for p in 0..k {
                let aip = a[(i, p)];
                if aip == 0.0 {
                    continue;
                }
                for j in 0..n {
                    c[(i, j)] += aip * b[(p, j)];
                }
            }
        }
        Ok(c)
    }
}
