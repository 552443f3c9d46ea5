//! Dense row-major matrix type

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};

/// Dense matrix of `f64` elements in row-major layout.
///
/// Equality is exact: two matrices compare equal only when their shapes match
/// and every element is value-equal. This is the comparison the cache layer
/// keys on, so no tolerance is applied.
///
/// Serializes to and from nested row arrays (`[[1.0, 0.0], [0.0, 1.0]]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from row-major data
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            LinalgError::invalid_shape(
                "MATRIX_SHAPE_TOO_LARGE",
                "Shape is too large",
                format!("{}x{}", rows, cols),
                "matrix creation",
                "Use smaller dimensions to avoid overflow",
            )
        })?;
        if data.len() != expected {
            return Err(LinalgError::invalid_shape(
                "MATRIX_DATA_LENGTH_MISMATCH",
                format!(
                    "Expected {} elements for a {}x{} matrix, got {}",
                    expected,
                    rows,
                    cols,
                    data.len()
                ),
                format!("{}x{}", rows, cols),
                "matrix creation",
                "Provide exactly rows * cols elements",
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates the `n`x`n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Creates a matrix from nested row vectors
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(LinalgError::invalid_shape(
                    "MATRIX_RAGGED_ROWS",
                    format!("Row {} has {} elements, expected {}", i, row.len(), ncols),
                    format!("{}x{}", nrows, ncols),
                    "matrix creation",
                    "Provide rows of equal length",
                ));
            }
        }
        let data = rows.into_iter().flatten().collect();
        Self::new(nrows, ncols, data)
    }

    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of elements
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the element at `(row, col)`, or `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns row `r` as a slice
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Returns the underlying row-major data as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Swaps rows `r1` and `r2` in place
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(r1 * self.cols + c, r2 * self.cols + c);
        }
    }

    /// Copies the matrix out as nested row vectors
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.cols + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{} matrix", self.rows, self.cols)?;
        for r in 0..self.rows {
            write!(f, "[")?;
            for (i, v) in self.row(r).iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.6}", v)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
